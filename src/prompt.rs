// src/prompt.rs - Single-line input used to name notes

use crate::command::Command;
use crate::store::NameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Commit(String),
    Cancel,
}

/// A one-line text field with its own horizontal scroll.
///
/// Like the editor cursor, `x` is relative to the visible field and `scroll`
/// is the first visible character, so the insertion point is `x + scroll`.
#[derive(Debug, Clone, Default)]
pub struct LinePrompt {
    pub label: &'static str,
    pub input: String,
    pub x: usize,
    pub scroll: usize,
    pub error: Option<String>,
}

impl LinePrompt {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    /// Start with `text` already typed and the cursor after it.
    pub fn with_text(label: &'static str, text: &str, width: usize) -> Self {
        let mut prompt = Self::new(label);
        for ch in text.chars() {
            prompt.insert(ch, width);
        }
        prompt
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    fn position(&self) -> usize {
        self.x + self.scroll
    }

    fn len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(byte, _)| byte)
            .unwrap_or(self.input.len())
    }

    /// Characters currently visible in a field `width` cells wide.
    pub fn visible(&self, width: usize) -> String {
        self.input.chars().skip(self.scroll).take(width).collect()
    }

    pub fn insert(&mut self, ch: char, width: usize) {
        let offset = self.byte_offset(self.position());
        self.input.insert(offset, ch);
        self.advance(width);
    }

    pub fn backspace(&mut self) {
        if self.position() == 0 {
            return;
        }
        let offset = self.byte_offset(self.position() - 1);
        self.input.remove(offset);
        self.retreat();
    }

    pub fn move_left(&mut self) {
        if self.position() > 0 {
            self.retreat();
        }
    }

    pub fn move_right(&mut self, width: usize) {
        if self.position() < self.len() {
            self.advance(width);
        }
    }

    fn advance(&mut self, width: usize) {
        if self.x + 1 >= width {
            self.scroll += 1;
        } else {
            self.x += 1;
        }
    }

    fn retreat(&mut self) {
        if self.x == 0 {
            self.scroll -= 1;
        } else {
            self.x -= 1;
        }
    }

    /// Apply a command. `validate` is re-run after every edit so the error
    /// shown inline always matches the current input; a confirm commits only
    /// when it passes.
    pub fn handle<F>(&mut self, cmd: &Command, width: usize, validate: F) -> PromptOutcome
    where
        F: Fn(&str) -> Result<(), NameError>,
    {
        match cmd {
            Command::Back => return PromptOutcome::Cancel,
            Command::Enter => match validate(&self.input) {
                Ok(()) => return PromptOutcome::Commit(self.input.clone()),
                Err(e) => {
                    self.error = Some(e.to_string());
                    return PromptOutcome::Pending;
                }
            },
            Command::InsertChar(c) => self.insert(*c, width),
            Command::DeleteChar => self.backspace(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(width),
            _ => return PromptOutcome::Pending,
        }
        self.error = validate(&self.input).err().map(|e| e.to_string());
        PromptOutcome::Pending
    }
}
