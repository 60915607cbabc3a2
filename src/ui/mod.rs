// ui/mod.rs - Terminal rendering: renderer, widgets and colors

pub mod renderer;
pub mod theme;
pub mod widgets;

pub use renderer::TuiRenderer;
pub use theme::Theme;
