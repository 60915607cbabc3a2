// src/layout.rs - Golden-ratio split of the terminal into panes

use ratatui::layout::Rect;

use crate::keymap;

pub const PHI: f64 = 1.61803398875;

/// Rows taken by the options bar: a divider (or prompt) and the shortcuts.
pub const OPTIONS_HEIGHT: u16 = 2;

/// Screen areas for the sidebar, the editor pane and the options bar.
///
/// The editor takes `width / PHI` columns on the right, the sidebar the
/// remaining `width - width / PHI` on the left. The sidebar's last column is a
/// divider line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub sidebar: Rect,
    pub editor: Rect,
    pub options: Rect,
}

impl PaneLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let total = width as f64;
        let sidebar_width = (total - total / PHI) as u16;
        let editor_width = (total / PHI) as u16;
        let pane_height = height.saturating_sub(OPTIONS_HEIGHT);

        Self {
            sidebar: Rect::new(0, 0, sidebar_width, pane_height),
            editor: Rect::new(width - editor_width, 0, editor_width, pane_height),
            options: Rect::new(0, pane_height, width, height.min(OPTIONS_HEIGHT)),
        }
    }

    /// Sidebar area available to note names, without the divider column.
    pub fn sidebar_list(&self) -> Rect {
        Rect {
            width: self.sidebar.width.saturating_sub(1),
            ..self.sidebar
        }
    }

    /// Whether every pane has room to draw, shortcut bars included.
    pub fn fits(&self) -> bool {
        self.sidebar_list().width >= 1
            && self.editor.width >= 2
            && self.editor.height >= 1
            && self.options.height == OPTIONS_HEIGHT
            && keymap::all_shortcut_sets()
                .iter()
                .all(|set| keymap::shortcut_spacing(self.options.width, set).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_split() {
        let layout = PaneLayout::compute(100, 30);
        assert_eq!(layout.editor.width, 61);
        assert_eq!(layout.sidebar.width, 38);
        assert_eq!(layout.editor.x, 39);
        assert_eq!(layout.sidebar.height, 28);
        assert_eq!(layout.editor.height, 28);
        assert_eq!(layout.options, Rect::new(0, 28, 100, 2));
        assert_eq!(layout.sidebar_list().width, 37);
        assert!(layout.fits());
    }

    #[test]
    fn test_panes_do_not_overlap() {
        for width in 0..200u16 {
            let layout = PaneLayout::compute(width, 10);
            assert!(layout.sidebar.right() <= layout.editor.x);
            assert_eq!(layout.editor.right(), width);
        }
    }

    #[test]
    fn test_too_small() {
        assert!(!PaneLayout::compute(100, 2).fits());
        assert!(!PaneLayout::compute(20, 30).fits());
        assert!(!PaneLayout::compute(0, 0).fits());
    }
}
