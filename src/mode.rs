/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sidebar,
    Editor,
    AddNote,
    RenameNote,
}

impl Mode {
    /// Add and rename run a single-line prompt in the options bar.
    pub fn is_prompt(self) -> bool {
        matches!(self, Mode::AddNote | Mode::RenameNote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_variants() {
        assert_eq!(Mode::Sidebar, Mode::Sidebar);
        assert_ne!(Mode::Sidebar, Mode::Editor);
    }

    #[test]
    fn test_prompt_modes() {
        assert!(Mode::AddNote.is_prompt());
        assert!(Mode::RenameNote.is_prompt());
        assert!(!Mode::Sidebar.is_prompt());
        assert!(!Mode::Editor.is_prompt());
    }
}
