//! Example: Simulate and render a short overlay sequence headlessly.
//!
//! Mounts an effect surface, feeds it synthetic pointer motion and a few
//! clicks, and renders every 30th frame to RGBA buffers.
//!
//! Run with:
//!     cargo run --example overlay_demo

use anyhow::Context;
use glimmer_overlay::{
    EffectConfig, EffectSurface, OverlayRenderConfig, OverlayRenderer, Viewport,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Glimmer Overlay - Headless Demo");
    println!("===============================\n");

    let width = 640;
    let height = 360;
    let config = EffectConfig {
        frequency: 120,
        range: 8.0,
        starfield: true,
    };

    println!("Mounting surface...");
    println!("  Resolution: {}x{}", width, height);
    println!("  Frequency: {}", config.frequency);
    println!("  Range: {}", config.range);

    let mut surface = EffectSurface::mount(config, Some(Viewport::new(width, height)))
        .context("surface did not mount")?;

    let renderer = pollster::block_on(OverlayRenderer::new(OverlayRenderConfig {
        width,
        height,
        ..Default::default()
    }))
    .context("failed to create overlay renderer")?;
    println!("  GPU: {}\n", renderer.adapter_info().name);

    let frame = 1.0 / 60.0;
    let total_frames = 600; // 10 seconds
    for i in 0..total_frames {
        let t = i as f32 * frame;

        // Sweep the pointer in a slow circle and click once a second.
        surface.pointer_moved((t * 0.7).sin() * 0.8, (t * 0.9).cos() * 0.8);
        if i % 60 == 30 {
            surface.clicked((t * 1.3).sin() * 0.5, (t * 1.1).cos() * 0.5);
        }
        surface.tick(frame);

        if i % 30 == 0 {
            let vertices = surface.vertices();
            let pixels = renderer.render_frame(&vertices)?;
            let covered = pixels.chunks_exact(4).filter(|px| px[3] > 0).count();
            println!(
                "  t={:>4.1}s particles={:>3} vertices={:>5} covered_px={}",
                t,
                surface.particle_count(),
                vertices.len(),
                covered
            );
        }
    }

    println!("\nTotals:");
    println!("  Spawned: {}", surface.spawned_total());
    println!("  Removed: {}", surface.removed_total());
    surface.teardown();
    println!("  After teardown: {} live", surface.particle_count());

    Ok(())
}
