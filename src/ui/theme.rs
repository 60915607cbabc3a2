// ui/theme.rs - Theme system for UI styling

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub divider: Color,
    pub shortcut_key_bg: Color,
    pub shortcut_key_fg: Color,
    pub status_fg: Color,
    pub error_fg: Color,
    pub prompt_label_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            divider: Color::DarkGray,
            shortcut_key_bg: Color::Gray,
            shortcut_key_fg: Color::Black,
            status_fg: Color::Cyan,
            error_fg: Color::Red,
            prompt_label_fg: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default()
            .fg(self.general.foreground)
            .bg(self.general.background)
    }

    /// The highlighted note name is drawn in reverse video.
    pub fn highlighted(&self) -> Style {
        self.text().add_modifier(Modifier::REVERSED)
    }

    pub fn shortcut_key(&self) -> Style {
        Style::default()
            .fg(self.ui.shortcut_key_fg)
            .bg(self.ui.shortcut_key_bg)
    }
}
