pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{LineStyle, RenderCommand, TextAlign};
pub use theme::{BAR_PALETTE, Theme, ThemeToken};
pub use types::{Point, Rect, Viewport};
