// ui/widgets/sidebar.rs - Note list with its divider

use ratatui::{buffer::Buffer, layout::Rect, symbols, style::Style, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Note names, one per row, starting at the selection's `shift`. The
/// highlighted name is drawn reversed and scrolled by the selection's
/// `scroll`. The last column is a vertical divider.
pub struct SidebarPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
    pub hidden: bool,
}

impl<'a> SidebarPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self {
            editor,
            theme,
            hidden: false,
        }
    }

    /// Draw only the divider, used for the focus flash.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Widget for SidebarPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.theme.text());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_symbol(" ");
            }
        }

        let list_width = area.width.saturating_sub(1) as usize;
        if !self.hidden {
            let selection = self.editor.selection;
            let rows = self
                .editor
                .notes
                .iter()
                .skip(selection.shift)
                .take(area.height as usize);
            for (row, name) in rows.enumerate() {
                let y = area.y + row as u16;
                if row == selection.cursor_pos {
                    let visible: String = name.chars().skip(selection.scroll).collect();
                    buf.set_stringn(area.x, y, visible, list_width, self.theme.highlighted());
                } else {
                    buf.set_stringn(area.x, y, name, list_width, self.theme.text());
                }
            }
        }

        let divider_x = area.right() - 1;
        for y in area.top()..area.bottom() {
            buf.get_mut(divider_x, y)
                .set_symbol(symbols::line::VERTICAL)
                .set_style(Style::default().fg(self.theme.ui.divider));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NoteStore;
    use std::fs;
    use tempfile::TempDir;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_names_and_divider() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("alpha"), "").unwrap();
        fs::write(temp_dir.path().join("a-very-long-note-name"), "").unwrap();
        let store = NoteStore::open(temp_dir.path()).unwrap();
        let mut editor = Editor::new(store, 100, 30).unwrap();
        editor.selection.scroll = 2;

        let theme = Theme::default();
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        SidebarPane::new(&editor, &theme).render(area, &mut buf);

        // Sorted: the long name comes first and is scrolled by 2
        assert_eq!(row_text(&buf, 0), "very-lo│");
        assert_eq!(row_text(&buf, 1), "alpha  │");
        assert_eq!(row_text(&buf, 2), "       │");
        assert!(buf.get(0, 0).modifier.contains(ratatui::style::Modifier::REVERSED));
    }

    #[test]
    fn test_hidden_draws_only_divider() {
        let temp_dir = TempDir::new().unwrap();
        let store = NoteStore::open(temp_dir.path()).unwrap();
        let editor = Editor::new(store, 100, 30).unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        SidebarPane::new(&editor, &theme)
            .hidden(true)
            .render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "         │");
    }
}
