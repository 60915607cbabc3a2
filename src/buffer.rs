use ropey::Rope;

/// A logical (line, column) coordinate into a buffer, independent of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BufferError {
    #[error("Rope error: {0}")]
    Rope(#[from] ropey::Error),
    #[error("position {line}:{col} is outside the buffer")]
    PositionOutOfRange { line: usize, col: usize },
    #[error("index {index} is outside the buffer (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("note text cannot contain NUL characters")]
    NulCharacter,
}

/// Text of the open note.
///
/// Lines are separated by `'\n'` only. A position `(line, col)` is valid when
/// `line < line_count()` and `col <= line_len(line)`; the matching index is in
/// `0..=len_chars()`.
pub struct Buffer {
    pub rope: Rope,
    pub modified: bool,
    pub version: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            modified: false,
            version: 0,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, BufferError> {
        if text.contains('\0') {
            return Err(BufferError::NulCharacter);
        }
        Ok(Self {
            rope: Rope::from_str(text),
            modified: false,
            version: 0,
        })
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Convert a position to a character index.
    ///
    /// Columns past the end of the line are rejected rather than clamped.
    pub fn index_of(&self, line: usize, col: usize) -> Result<usize, BufferError> {
        if line >= self.rope.len_lines() || col > self.line_len(line) {
            return Err(BufferError::PositionOutOfRange { line, col });
        }
        Ok(self.rope.line_to_char(line) + col)
    }

    /// Convert a character index to a position: the line is the number of
    /// newlines before `index`, the column the characters since the last one.
    pub fn position_of(&self, index: usize) -> Result<Position, BufferError> {
        let len = self.rope.len_chars();
        if index > len {
            return Err(BufferError::IndexOutOfRange { index, len });
        }
        let line = self.rope.char_to_line(index);
        Ok(Position::new(line, index - self.rope.line_to_char(line)))
    }

    pub fn insert_char(&mut self, ch: char, line: usize, col: usize) -> Result<(), BufferError> {
        if ch == '\0' {
            return Err(BufferError::NulCharacter);
        }
        let char_idx = self.index_of(line, col)?;
        self.rope.try_insert_char(char_idx, ch)?;
        self.touch();
        Ok(())
    }

    pub fn insert_text(&mut self, text: &str, line: usize, col: usize) -> Result<(), BufferError> {
        if text.contains('\0') {
            return Err(BufferError::NulCharacter);
        }
        let char_idx = self.index_of(line, col)?;
        self.rope.try_insert(char_idx, text)?;
        self.touch();
        Ok(())
    }

    /// Remove the character immediately before `(line, col)`. Does nothing at
    /// the start of the buffer.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Result<(), BufferError> {
        let char_idx = self.index_of(line, col)?;
        if char_idx == 0 {
            return Ok(());
        }
        self.rope.try_remove(char_idx - 1..char_idx)?;
        self.touch();
        Ok(())
    }

    pub fn count(&self, ch: char) -> usize {
        self.rope.chars().filter(|c| *c == ch).count()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.rope.get_char(index)
    }

    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            match line.strip_suffix('\n') {
                Some(stripped) => Some(stripped.to_string()),
                None => Some(line),
            }
        } else {
            None
        }
    }

    /// Length of a line without its newline; 0 for lines past the end.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    fn touch(&mut self) {
        self.modified = true;
        self.version += 1;
    }
}

#[test]
fn test_insert_char() {
    let mut buffer = Buffer::new();
    buffer.insert_char('a', 0, 0).unwrap();
    assert_eq!(buffer.line(0).unwrap(), "a");
    assert!(buffer.modified);
    assert_eq!(buffer.version, 1);
}

#[test]
fn test_insert_text_mid_line() {
    let mut buffer = Buffer::from_text("ab\ncd").unwrap();
    buffer.insert_text("xy\nz", 1, 1).unwrap();
    assert_eq!(buffer.text(), "ab\ncxy\nzd");
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.version, 1);
    assert!(buffer.insert_text("q", 0, 5).is_err());
    assert!(matches!(
        buffer.insert_text("a\0", 0, 0),
        Err(BufferError::NulCharacter)
    ));
    assert_eq!(buffer.version, 1);
}

#[test]
fn test_index_of_counts_newlines() {
    let buffer = Buffer::from_text("ab\ncde\n\nf").unwrap();
    assert_eq!(buffer.index_of(0, 0).unwrap(), 0);
    assert_eq!(buffer.index_of(0, 2).unwrap(), 2);
    assert_eq!(buffer.index_of(1, 0).unwrap(), 3);
    assert_eq!(buffer.index_of(1, 3).unwrap(), 6);
    assert_eq!(buffer.index_of(2, 0).unwrap(), 7);
    assert_eq!(buffer.index_of(3, 1).unwrap(), 9);
}

#[test]
fn test_index_of_rejects_out_of_range() {
    let buffer = Buffer::from_text("ab\ncd").unwrap();
    assert!(matches!(
        buffer.index_of(0, 3),
        Err(BufferError::PositionOutOfRange { line: 0, col: 3 })
    ));
    assert!(buffer.index_of(2, 0).is_err());
}

#[test]
fn test_position_of() {
    let buffer = Buffer::from_text("ab\ncde\n").unwrap();
    assert_eq!(buffer.position_of(0).unwrap(), Position::new(0, 0));
    assert_eq!(buffer.position_of(2).unwrap(), Position::new(0, 2));
    assert_eq!(buffer.position_of(3).unwrap(), Position::new(1, 0));
    assert_eq!(buffer.position_of(6).unwrap(), Position::new(1, 3));
    // Index one past a trailing newline starts an empty last line
    assert_eq!(buffer.position_of(7).unwrap(), Position::new(2, 0));
    assert!(matches!(
        buffer.position_of(8),
        Err(BufferError::IndexOutOfRange { index: 8, len: 7 })
    ));
}

#[test]
fn test_only_lf_breaks_lines() {
    let buffer = Buffer::from_text("a\rb\nc").unwrap();
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line_len(0), 3);
}

#[test]
fn test_delete_char_joins_lines() {
    let mut buffer = Buffer::from_text("abc\nxyz").unwrap();
    buffer.delete_char(1, 0).unwrap();
    assert_eq!(buffer.text(), "abcxyz");
}

#[test]
fn test_delete_at_start_is_noop() {
    let mut buffer = Buffer::from_text("abc").unwrap();
    buffer.delete_char(0, 0).unwrap();
    assert_eq!(buffer.text(), "abc");
    assert!(!buffer.modified);
}

#[test]
fn test_nul_rejected() {
    assert!(matches!(
        Buffer::from_text("a\0b"),
        Err(BufferError::NulCharacter)
    ));
    let mut buffer = Buffer::new();
    assert!(buffer.insert_char('\0', 0, 0).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_count() {
    let buffer = Buffer::from_text("a\nb\nc\n").unwrap();
    assert_eq!(buffer.count('\n'), 3);
    assert_eq!(buffer.count('z'), 0);
}
