// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod options_bar;
pub mod sidebar;
