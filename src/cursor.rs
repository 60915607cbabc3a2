use crate::buffer::{Buffer, BufferError, Position};
use crate::viewport::Viewport;

/// Cursor inside the editor pane plus the pane's scroll offsets.
///
/// `y`/`x` are relative to the visible pane; `top_row`/`left_col` are the
/// first visible line and column. The absolute position in the buffer is
/// always `(y + top_row, x + left_col)`.
///
/// Lines wider than the pane are never split: the pane scrolls sideways by
/// moving `left_col`. Vertical scrolling only happens when the cursor is
/// pushed past the top or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub y: usize,
    pub x: usize,
    pub top_row: usize,
    pub left_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn absolute(&self) -> Position {
        Position::new(self.y + self.top_row, self.x + self.left_col)
    }

    /// Insert a printable character and step right.
    pub fn insert_char(
        &mut self,
        buffer: &mut Buffer,
        ch: char,
        viewport: &Viewport,
    ) -> Result<(), BufferError> {
        let pos = self.absolute();
        buffer.insert_char(ch, pos.line, pos.col)?;
        self.advance_col(viewport);
        Ok(())
    }

    /// Split the line at the cursor and move to the start of the new line.
    pub fn newline(&mut self, buffer: &mut Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        buffer.insert_char('\n', pos.line, pos.col)?;
        self.advance_row(viewport);
        self.line_start();
        Ok(())
    }

    /// Insert `width` spaces, one cursor step each.
    pub fn tab(
        &mut self,
        buffer: &mut Buffer,
        width: usize,
        viewport: &Viewport,
    ) -> Result<(), BufferError> {
        let pos = self.absolute();
        buffer.insert_text(&" ".repeat(width), pos.line, pos.col)?;
        for _ in 0..width {
            self.advance_col(viewport);
        }
        Ok(())
    }

    /// Re-split the absolute position after the pane changed size, so the
    /// cursor is drawn inside it again. The absolute position is unchanged.
    pub fn fit_to(&mut self, viewport: &Viewport) {
        let col = self.x + self.left_col;
        if self.y > viewport.last_row() {
            self.top_row += self.y - viewport.last_row();
            self.y = viewport.last_row();
        }
        self.place_col_keeping_scroll(col, viewport);
    }

    /// Delete the character before the cursor. At the start of a line this
    /// joins it onto the previous one.
    pub fn backspace(&mut self, buffer: &mut Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        if pos.line == 0 && pos.col == 0 {
            return Ok(());
        }
        buffer.index_of(pos.line, pos.col)?;
        self.step_back(buffer, viewport);
        buffer.delete_char(pos.line, pos.col)
    }

    pub fn move_left(&mut self, buffer: &Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        if pos.line == 0 && pos.col == 0 {
            return Ok(());
        }
        buffer.index_of(pos.line, pos.col)?;
        self.step_back(buffer, viewport);
        Ok(())
    }

    pub fn move_right(&mut self, buffer: &Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        let index = buffer.index_of(pos.line, pos.col)?;
        match buffer.char_at(index) {
            // End of buffer, empty buffer included
            None => {}
            Some('\n') => {
                self.advance_row(viewport);
                self.line_start();
            }
            Some(_) => self.advance_col(viewport),
        }
        Ok(())
    }

    pub fn move_up(&mut self, buffer: &Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        buffer.index_of(pos.line, pos.col)?;
        if pos.line == 0 {
            return Ok(());
        }
        let target = pos.col.min(buffer.line_len(pos.line - 1));
        self.retreat_row();
        self.place_col_keeping_scroll(target, viewport);
        Ok(())
    }

    pub fn move_down(&mut self, buffer: &Buffer, viewport: &Viewport) -> Result<(), BufferError> {
        let pos = self.absolute();
        buffer.index_of(pos.line, pos.col)?;
        if pos.line + 1 >= buffer.line_count() {
            return Ok(());
        }
        let target = pos.col.min(buffer.line_len(pos.line + 1));
        self.advance_row(viewport);
        self.place_col_keeping_scroll(target, viewport);
        Ok(())
    }

    // Caller guarantees the absolute position is not (0, 0).
    fn step_back(&mut self, buffer: &Buffer, viewport: &Viewport) {
        let pos = self.absolute();
        if pos.col == 0 {
            self.place_col(buffer.line_len(pos.line - 1), viewport);
            self.retreat_row();
        } else if self.x == 0 {
            self.left_col -= 1;
        } else {
            self.x -= 1;
        }
    }

    fn advance_col(&mut self, viewport: &Viewport) {
        if self.x >= viewport.last_col() {
            self.left_col += 1;
        } else {
            self.x += 1;
        }
    }

    fn advance_row(&mut self, viewport: &Viewport) {
        if self.y >= viewport.last_row() {
            self.top_row += 1;
        } else {
            self.y += 1;
        }
    }

    fn retreat_row(&mut self) {
        if self.y == 0 {
            self.top_row -= 1;
        } else {
            self.y -= 1;
        }
    }

    fn line_start(&mut self) {
        self.x = 0;
        self.left_col = 0;
    }

    /// Put the cursor on absolute column `col`, scrolling in whole pane widths
    /// when the column is past the right edge.
    fn place_col(&mut self, col: usize, viewport: &Viewport) {
        let width = viewport.cols.max(1);
        if col > width - 1 {
            self.left_col = col - col % width;
            self.x = col % width;
        } else {
            self.left_col = 0;
            self.x = col;
        }
    }

    fn place_col_keeping_scroll(&mut self, col: usize, viewport: &Viewport) {
        let width = viewport.cols.max(1);
        if col >= self.left_col && col < self.left_col + width {
            self.x = col - self.left_col;
        } else {
            self.place_col(col, viewport);
        }
    }
}
