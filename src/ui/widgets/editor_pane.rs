// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Editor pane widget that renders the visible window of the note, starting
/// at the cursor's `top_row` and `left_col`
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
    pub hidden: bool,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self {
            editor,
            theme,
            hidden: false,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear entire editor area so switching notes leaves no artifacts
        buf.set_style(area, self.theme.text());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_symbol(" ");
            }
        }
        if self.hidden {
            return;
        }

        let cursor = &self.editor.cursor;
        for i in 0..area.height {
            let Some(line) = self.editor.buffer.line(cursor.top_row + i as usize) else {
                break;
            };
            let visible: String = line
                .chars()
                .skip(cursor.left_col)
                .take(area.width as usize)
                .collect();
            buf.set_stringn(
                area.x,
                area.y + i,
                visible,
                area.width as usize,
                self.theme.text(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::store::NoteStore;
    use std::fs;
    use tempfile::TempDir;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_scrolled_window() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("n"), "line zero\nline one\nx\nline three").unwrap();
        let store = NoteStore::open(temp_dir.path()).unwrap();
        let mut editor = Editor::new(store, 100, 30).unwrap();
        editor.cursor = Cursor {
            y: 0,
            x: 0,
            top_row: 1,
            left_col: 5,
        };

        let theme = Theme::default();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&editor, &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "one ");
        assert_eq!(row_text(&buf, 1), "    ");
        assert_eq!(row_text(&buf, 2), "thre");
        assert_eq!(row_text(&buf, 3), "    ");
    }

    #[test]
    fn test_hidden_pane_is_blank() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("n"), "text").unwrap();
        let store = NoteStore::open(temp_dir.path()).unwrap();
        let editor = Editor::new(store, 100, 30).unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&editor, &theme)
            .hidden(true)
            .render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "      ");
    }
}
