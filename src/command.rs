/// An input action. What it does depends on the current `Mode`: `Enter` opens
/// a note from the sidebar, splits a line in the editor and confirms a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    InsertChar(char),
    DeleteChar,
    Tab,
    Enter,
    /// Quit from the sidebar, save and close from the editor, cancel a prompt
    Back,
    AddNote,
    RenameNote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_variants() {
        assert_eq!(Command::MoveLeft, Command::MoveLeft);
        assert_ne!(Command::MoveRight, Command::MoveUp);
        let cmd = Command::InsertChar('a');
        if let Command::InsertChar(c) = cmd {
            assert_eq!(c, 'a');
        } else {
            panic!("Expected InsertChar");
        }
    }

    #[test]
    fn test_insert_char_compares_by_char() {
        assert_eq!(Command::InsertChar('x'), Command::InsertChar('x'));
        assert_ne!(Command::InsertChar('x'), Command::InsertChar('y'));
    }
}
