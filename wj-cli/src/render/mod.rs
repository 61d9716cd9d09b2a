mod color_mode;
mod duration;
mod renderer;
mod theme;

pub use color_mode::ColorMode;
pub use duration::pretty_duration;
pub use renderer::{RenderOptions, Renderer};
