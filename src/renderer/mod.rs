//! Drawing: scene composition into abstract draw calls, and the terminal
//! backend that paints them with ratatui

mod scene;
mod surface;
mod terminal;

pub use scene::{GameRenderer, RenderView};
pub use surface::{Anchor, DisplayList, DrawCommand, Surface, TextSize, palette};
pub use terminal::Viewport;
