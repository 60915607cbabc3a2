// ui/widgets/options_bar.rs - Divider/prompt row and nano-style shortcut row

use ratatui::{buffer::Buffer, layout::Rect, style::Style, symbols, widgets::Widget};

use crate::editor::Editor;
use crate::keymap::{self, Shortcut};
use crate::ui::theme::Theme;

/// Two rows under the panes. The first is a divider that joins the sidebar's
/// vertical line, or the name prompt while adding/renaming. The second lists
/// the shortcuts of the current mode, or the prompt's validation error.
pub struct OptionsBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> OptionsBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn render_divider(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.ui.divider);
        for x in area.left()..area.right() {
            buf.get_mut(x, area.y)
                .set_symbol(symbols::line::HORIZONTAL)
                .set_style(style);
        }
        let junction = area.x + self.editor.layout.sidebar.width.saturating_sub(1);
        if self.editor.layout.sidebar.width > 0 && junction < area.right() {
            buf.get_mut(junction, area.y)
                .set_symbol(symbols::line::HORIZONTAL_UP);
        }
        if let Some(message) = &self.editor.status_message {
            let x = junction + 2;
            if x < area.right() {
                buf.set_stringn(
                    x,
                    area.y,
                    format!(" {} ", message),
                    (area.right() - x) as usize,
                    Style::default().fg(self.theme.ui.status_fg),
                );
            }
        }
    }

    fn render_shortcuts(&self, shortcuts: &[Shortcut], x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let Some(space) = keymap::shortcut_spacing(width, shortcuts) else {
            return;
        };
        let mut x = x;
        for shortcut in shortcuts {
            x += space;
            buf.set_string(x, y, shortcut.keys, self.theme.shortcut_key());
            x += shortcut.keys.len() as u16 + 1;
            buf.set_string(x, y, shortcut.description, self.theme.text());
            x += shortcut.description.len() as u16;
        }
    }
}

impl Widget for OptionsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, self.theme.text());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_symbol(" ");
            }
        }

        let prompt = self
            .editor
            .prompt
            .as_ref()
            .filter(|_| self.editor.mode.is_prompt());

        match prompt {
            Some(prompt) => {
                let (x, _) = buf.set_stringn(
                    area.x,
                    area.y,
                    prompt.label,
                    area.width as usize,
                    Style::default().fg(self.theme.ui.prompt_label_fg),
                );
                let field = area.right().saturating_sub(x) as usize;
                buf.set_stringn(x, area.y, prompt.visible(field), field, self.theme.text());
            }
            None => self.render_divider(area, buf),
        }

        if area.height < 2 {
            return;
        }
        let y = area.y + 1;
        match prompt.and_then(|p| p.error.as_ref()) {
            Some(error) => {
                buf.set_stringn(
                    area.x,
                    y,
                    error,
                    area.width as usize,
                    Style::default().fg(self.theme.ui.error_fg),
                );
            }
            None => self.render_shortcuts(
                keymap::shortcuts(self.editor.mode),
                area.x,
                y,
                area.width,
                buf,
            ),
        }
    }
}
