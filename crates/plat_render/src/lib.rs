pub mod camera;
pub mod surface;

pub use camera::Camera2D;
pub use surface::{Color, DrawCommand, DrawList, RenderSurface, Translated};
