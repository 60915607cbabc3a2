use ratatui::layout::Rect;

/// Visible size of the editor pane, in text cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.height as usize, area.width as usize)
    }

    pub fn last_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    pub fn last_col(&self) -> usize {
        self.cols.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new() {
        let viewport = Viewport::new(10, 20);
        assert_eq!(viewport.rows, 10);
        assert_eq!(viewport.cols, 20);
        assert_eq!(viewport.last_row(), 9);
        assert_eq!(viewport.last_col(), 19);
    }

    #[test]
    fn test_from_rect() {
        let viewport = Viewport::from_rect(Rect::new(5, 0, 30, 12));
        assert_eq!(viewport, Viewport::new(12, 30));
    }

    #[test]
    fn test_empty_viewport_edges() {
        let viewport = Viewport::new(0, 0);
        assert_eq!(viewport.last_row(), 0);
        assert_eq!(viewport.last_col(), 0);
    }
}
