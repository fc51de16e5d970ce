//! Camera and pointer state shared by the effect layers.

pub mod camera;
pub mod pointer;

pub use camera::Camera;
pub use pointer::PointerState;
