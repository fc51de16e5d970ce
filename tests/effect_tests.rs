//! Integration tests for the particle simulation.


use effect_fixtures::{run_frames, starfield_surface, test_surface, FRAME};
use glimmer_overlay::{spawn_probability, Easing, ParticlePhase, Tween};

// ==================== Spawn Probability ====================

#[test]
fn test_spawn_probability_scales_linearly() {
    assert_eq!(spawn_probability(0), 0.0);
    assert!((spawn_probability(40) - 0.1).abs() < 1e-6);
    assert!((spawn_probability(80) - 0.2).abs() < 1e-6);
    // Doubling frequency doubles the probability.
    assert!((spawn_probability(80) - 2.0 * spawn_probability(40)).abs() < 1e-6);
}

#[test]
fn test_observed_spawn_rate_tracks_probability() {
    let frames = 5_000;
    for frequency in [40, 80, 150] {
        let mut surface = test_surface(frequency);
        run_frames(&mut surface, frames);

        let expected = spawn_probability(frequency) as f64 * frames as f64;
        let observed = surface.spawned_total() as f64;
        // Binomial over 5000 draws; allow a generous band around the mean.
        assert!(
            (observed - expected).abs() < expected * 0.25,
            "frequency {}: observed {} spawns, expected about {}",
            frequency,
            observed,
            expected
        );
    }
}

// ==================== Easing and Tweens ====================

#[test]
fn test_easings_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicOut,
        Easing::ExpoOut,
    ] {
        assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
    }
}

#[test]
fn test_tween_respects_delay() {
    let mut tween = Tween::new(0.0f32, 10.0, 1.0, Easing::Linear).with_delay(0.5);
    assert_eq!(tween.advance(0.5), 0.0);
    assert!(!tween.finished());
    let mid = tween.advance(0.5);
    assert!((mid - 5.0).abs() < 1e-4);
    tween.advance(0.5);
    assert!(tween.finished());
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn test_tween_overshoot_clamps_to_end() {
    let mut tween = Tween::new(0.0f32, 3.0, 0.25, Easing::ExpoOut);
    assert_eq!(tween.advance(100.0), 3.0);
    assert!(tween.finished());
}

// ==================== Particle Lifecycle ====================

#[test]
fn test_every_particle_is_removed_exactly_once() {
    let mut surface = test_surface(150);
    run_frames(&mut surface, 600);
    let spawned_during_run = surface.spawned_total();
    assert!(spawned_during_run > 0);

    // Stop emission and let everything play out.
    surface.set_frequency(0);
    run_frames(&mut surface, 600);

    assert_eq!(surface.particle_count(), 0);
    assert_eq!(surface.removed_total(), surface.spawned_total());
}

#[test]
fn test_live_particles_never_report_removed() {
    let mut surface = test_surface(150);
    for _ in 0..600 {
        surface.tick(FRAME);
        for particle in surface.particles() {
            assert_ne!(particle.phase(), ParticlePhase::Removed);
        }
    }
}

#[test]
fn test_ambient_particles_grow_then_shrink() {
    let mut surface = test_surface(150);
    // Catch a spawn, then follow the oldest particle's scale over time.
    while surface.particle_count() == 0 {
        surface.tick(FRAME);
    }
    run_frames(&mut surface, 30); // 0.5s into the 1.0s grow
    let mid_growth = surface.particles()[0].scale.length();
    assert!(mid_growth > 0.0);

    run_frames(&mut surface, 60); // past the grow, into the shrink window
    if let Some(first) = surface.particles().first() {
        assert_eq!(first.phase(), ParticlePhase::Shrinking);
    }
}

#[test]
fn test_particle_colors_come_from_light_palette() {
    let mut surface = test_surface(150);
    run_frames(&mut surface, 300);
    assert!(surface.spawned_total() > 0);
    for particle in surface.particles() {
        let [r, g, b] = particle.color;
        assert!(r >= 0.9 && g >= 0.9 && b >= 0.9, "color {:?}", particle.color);
    }
}

// ==================== Bursts ====================

#[test]
fn test_click_burst_expands_outward() {
    let mut surface = test_surface(0);
    surface.clicked(0.0, 0.0);
    surface.tick(FRAME);
    assert_eq!(surface.particle_count(), 30);

    let origin = surface.particles()[0].position;
    run_frames(&mut surface, 30);
    let mean_distance: f32 = surface
        .particles()
        .iter()
        .map(|p| (p.position - origin).length())
        .sum::<f32>()
        / surface.particle_count().max(1) as f32;
    assert!(mean_distance > 0.1, "burst did not expand: {mean_distance}");
}

#[test]
fn test_burst_fades_to_removal() {
    let mut surface = test_surface(0);
    surface.clicked(0.3, -0.2);
    surface.tick(FRAME);

    // Full burst lifetime is 1.1s (0.3s delay + 0.8s fade); run well past it.
    run_frames(&mut surface, 180);
    assert_eq!(surface.particle_count(), 0);
    assert_eq!(surface.removed_total(), 30);
}

#[test]
fn test_rapid_clicks_each_spawn_a_burst() {
    let mut surface = test_surface(0);
    for _ in 0..5 {
        surface.clicked(0.0, 0.0);
    }
    surface.tick(FRAME);
    assert_eq!(surface.particle_count(), 5 * 30);
}

#[test]
fn test_burst_scale_holds_peak_then_settles_with_fade() {
    let mut surface = test_surface(0);
    surface.clicked(0.0, 0.0);
    surface.tick(FRAME);

    // Across the swell-to-settle handoff (0.3s) the scale curve is smooth:
    // the settle holds the peak for 0.2s before shrinking, so no frame may
    // show a visible drop.
    run_frames(&mut surface, 15); // age 0.25s
    let mut previous: Vec<f32> = surface.particles().iter().map(|p| p.scale.x).collect();
    for _ in 0..12 {
        // through age ~0.45s
        surface.tick(FRAME);
        for (p, prev) in surface.particles().iter().zip(&previous) {
            assert!(
                p.scale.x >= prev - 1e-3,
                "scale dropped across the handoff: {} -> {}",
                prev,
                p.scale.x
            );
        }
        previous = surface.particles().iter().map(|p| p.scale.x).collect();
    }

    // At age ~0.85s the shrink is mid-flight, not already bottomed out.
    run_frames(&mut surface, 24);
    assert!(!surface.particles().is_empty());
    for p in surface.particles() {
        assert!(
            p.scale.x > 0.1,
            "particle frozen at minimum scale too early: {}",
            p.scale.x
        );
    }

    // Shrink and fade finish together at 1.1s.
    run_frames(&mut surface, 30); // past age 1.1s
    assert!(surface.particles().is_empty());
}

#[test]
fn test_burst_opacity_decreases_monotonically() {
    let mut surface = test_surface(0);
    surface.clicked(0.0, 0.0);
    surface.tick(FRAME);

    let mut last = f32::MAX;
    while surface.particle_count() > 0 {
        let max_opacity = surface
            .particles()
            .iter()
            .map(|p| p.opacity)
            .fold(0.0f32, f32::max);
        assert!(max_opacity <= last + 1e-5);
        last = max_opacity;
        surface.tick(FRAME);
    }
}

// ==================== Starfield ====================

#[test]
fn test_starfield_vertices_present_without_particles() {
    let mut surface = starfield_surface();
    surface.tick(FRAME);
    assert_eq!(surface.particle_count(), 0);
    let vertices = surface.vertices();
    assert!(!vertices.is_empty());
    assert_eq!(vertices.len() % 6, 0);
}

#[test]
fn test_starfield_drifts_over_time() {
    let mut surface = starfield_surface();
    surface.tick(FRAME);
    let before = surface.vertices();
    run_frames(&mut surface, 60);
    let after = surface.vertices();
    assert_ne!(
        before.first().map(|v| v.position),
        after.first().map(|v| v.position)
    );
}
