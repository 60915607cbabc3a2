/// Highlighted entry in the note list.
///
/// The selected note is `cursor_pos + shift`: `cursor_pos` is the highlighted
/// row inside the sidebar, `shift` the number of notes scrolled off the top.
/// `scroll` shifts the highlighted name left when it is wider than the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarSelection {
    pub cursor_pos: usize,
    pub shift: usize,
    pub scroll: usize,
}

impl SidebarSelection {
    pub fn selected(&self) -> usize {
        self.cursor_pos + self.shift
    }

    /// Returns true when the selection changed.
    pub fn move_up(&mut self) -> bool {
        if self.selected() == 0 {
            return false;
        }
        if self.cursor_pos == 0 {
            self.shift -= 1;
        } else {
            self.cursor_pos -= 1;
        }
        // Reset even when landing on the first note
        self.scroll = 0;
        true
    }

    /// Returns true when the selection changed.
    pub fn move_down(&mut self, count: usize, rows: usize) -> bool {
        if self.selected() + 1 >= count {
            return false;
        }
        if self.cursor_pos + 1 >= rows {
            self.shift += 1;
        } else {
            self.cursor_pos += 1;
        }
        // Reset even when landing on the last note
        self.scroll = 0;
        true
    }

    /// Keep the highlighted row inside a sidebar of `rows` rows after a
    /// resize, shifting the list instead of changing the selected note.
    pub fn fit_to(&mut self, rows: usize) {
        if rows > 0 && self.cursor_pos >= rows {
            self.shift += self.cursor_pos - (rows - 1);
            self.cursor_pos = rows - 1;
        }
    }

    pub fn scroll_left(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_right(&mut self, name_len: usize, width: usize) {
        if name_len.saturating_sub(self.scroll) > width {
            self.scroll += 1;
        }
    }
}
