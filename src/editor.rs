// src/editor.rs - Core editor coordinator

use log::{debug, error, info};

use crate::buffer::{Buffer, BufferError};
use crate::command::Command;
use crate::cursor::Cursor;
use crate::layout::PaneLayout;
use crate::mode::Mode;
use crate::prompt::{LinePrompt, PromptOutcome};
use crate::sidebar::SidebarSelection;
use crate::store::{NameError, NoteStore, StoreError};
use crate::viewport::Viewport;

pub const DEFAULT_TAB_WIDTH: usize = 4;

#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Pane to blank out briefly after a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCue {
    Sidebar,
    Editor,
}

pub struct Editor {
    pub store: NoteStore,
    pub notes: Vec<String>,
    pub selection: SidebarSelection,
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub mode: Mode,
    pub prompt: Option<LinePrompt>,
    pub layout: PaneLayout,
    pub viewport: Viewport,
    /// Input is ignored until a resize makes the layout fit again
    pub too_small: bool,
    pub tab_width: usize,
    pub status_message: Option<String>,
    flash: Option<FlashCue>,
}

impl Editor {
    /// Build the editor for a terminal of `width` x `height` cells. Seeds the
    /// store with the default note when it is empty and previews the first
    /// note.
    pub fn new(store: NoteStore, width: u16, height: u16) -> Result<Self, EditorError> {
        store.seed_if_empty()?;
        let notes = store.list()?;
        let layout = PaneLayout::compute(width, height);

        let mut editor = Self {
            store,
            notes,
            selection: SidebarSelection::default(),
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            mode: Mode::Sidebar,
            prompt: None,
            layout,
            viewport: Viewport::from_rect(layout.editor),
            too_small: !layout.fits(),
            tab_width: DEFAULT_TAB_WIDTH,
            status_message: None,
            flash: None,
        };
        editor.load_selected()?;
        Ok(editor)
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn selected_note(&self) -> Option<&str> {
        self.notes.get(self.selection.selected()).map(String::as_str)
    }

    /// Take the pending flash cue, if a focus change requested one.
    pub fn take_flash(&mut self) -> Option<FlashCue> {
        self.flash.take()
    }

    /// Width of the prompt's text field inside the options bar.
    pub fn prompt_width(&self) -> usize {
        self.field_width(self.prompt.as_ref().map_or("", |p| p.label))
    }

    fn field_width(&self, label: &str) -> usize {
        (self.layout.options.width as usize)
            .saturating_sub(label.len())
            .max(1)
    }

    /// Returns true if the program should quit.
    pub fn execute_command(&mut self, cmd: Command) -> Result<bool, EditorError> {
        if self.too_small {
            return Ok(false);
        }
        match self.mode {
            Mode::Sidebar => self.sidebar_command(cmd),
            Mode::Editor => {
                self.editor_command(cmd)?;
                Ok(false)
            }
            Mode::AddNote | Mode::RenameNote => {
                self.prompt_command(cmd)?;
                Ok(false)
            }
        }
    }

    /// Recompute pane geometry. The buffer, the cursor's absolute position and
    /// the selected note stay the same; only how they sit in the panes moves.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.layout = PaneLayout::compute(width, height);
        self.viewport = Viewport::from_rect(self.layout.editor);
        let was_too_small = self.too_small;
        self.too_small = !self.layout.fits();
        if !self.too_small {
            self.cursor.fit_to(&self.viewport);
            self.selection.fit_to(self.layout.sidebar.height as usize);
        }
        if self.too_small != was_too_small {
            info!(
                "Terminal {}x{} {}",
                width,
                height,
                if self.too_small { "too small, input paused" } else { "fits again" }
            );
        }
    }

    fn sidebar_command(&mut self, cmd: Command) -> Result<bool, EditorError> {
        self.status_message = None;
        match cmd {
            Command::Back => return Ok(true),
            Command::MoveUp => {
                if self.selection.move_up() {
                    self.load_selected()?;
                }
            }
            Command::MoveDown => {
                let rows = self.layout.sidebar.height as usize;
                if self.selection.move_down(self.notes.len(), rows) {
                    self.load_selected()?;
                }
            }
            Command::MoveLeft => self.selection.scroll_left(),
            Command::MoveRight => {
                let width = self.layout.sidebar_list().width as usize;
                if let Some(len) = self.selected_note().map(|name| name.chars().count()) {
                    self.selection.scroll_right(len, width);
                }
            }
            Command::Enter => self.open_selected()?,
            Command::AddNote => {
                self.prompt = Some(LinePrompt::new("New note: "));
                self.mode = Mode::AddNote;
            }
            Command::RenameNote => {
                if let Some(name) = self.selected_note().map(str::to_string) {
                    let label = "Rename to: ";
                    let width = self.field_width(label);
                    self.prompt = Some(LinePrompt::with_text(label, &name, width));
                    self.mode = Mode::RenameNote;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn editor_command(&mut self, cmd: Command) -> Result<(), EditorError> {
        let viewport = self.viewport;
        match cmd {
            Command::InsertChar(c) => self.cursor.insert_char(&mut self.buffer, c, &viewport)?,
            Command::Enter => self.cursor.newline(&mut self.buffer, &viewport)?,
            Command::DeleteChar => self.cursor.backspace(&mut self.buffer, &viewport)?,
            Command::Tab => self.cursor.tab(&mut self.buffer, self.tab_width, &viewport)?,
            Command::MoveLeft => self.cursor.move_left(&self.buffer, &viewport)?,
            Command::MoveRight => self.cursor.move_right(&self.buffer, &viewport)?,
            Command::MoveUp => self.cursor.move_up(&self.buffer, &viewport)?,
            Command::MoveDown => self.cursor.move_down(&self.buffer, &viewport)?,
            Command::Back => self.close_note(),
            _ => {}
        }
        Ok(())
    }

    fn prompt_command(&mut self, cmd: Command) -> Result<(), EditorError> {
        let width = self.prompt_width();
        let renaming = if self.mode == Mode::RenameNote {
            self.selected_note().map(str::to_string)
        } else {
            None
        };
        let Some(prompt) = self.prompt.as_mut() else {
            self.mode = Mode::Sidebar;
            return Ok(());
        };

        let store = &self.store;
        let outcome = prompt.handle(&cmd, width, |name| {
            if renaming.as_deref() == Some(name) {
                return Ok(());
            }
            store.check_available(name)
        });

        match outcome {
            PromptOutcome::Pending => {}
            PromptOutcome::Cancel => self.finish_prompt(),
            PromptOutcome::Commit(name) => match renaming {
                Some(old) => self.commit_rename(&old, name)?,
                None => self.commit_add(name)?,
            },
        }
        Ok(())
    }

    fn finish_prompt(&mut self) {
        self.prompt = None;
        self.mode = Mode::Sidebar;
    }

    fn commit_add(&mut self, name: String) -> Result<(), EditorError> {
        match self.store.create(&name) {
            Ok(()) => {
                self.status_message = Some(format!("Created '{}'", name));
                self.notes.push(name);
                self.finish_prompt();
                Ok(())
            }
            Err(StoreError::Name(e)) => {
                self.show_prompt_error(e);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn commit_rename(&mut self, old: &str, new: String) -> Result<(), EditorError> {
        if old == new {
            self.finish_prompt();
            return Ok(());
        }
        match self.store.rename(old, &new) {
            Ok(()) => {
                let selected = self.selection.selected();
                if let Some(entry) = self.notes.get_mut(selected) {
                    *entry = new.clone();
                }
                self.status_message = Some(format!("Renamed '{}' to '{}'", old, new));
                self.finish_prompt();
                Ok(())
            }
            Err(StoreError::Name(e)) => {
                self.show_prompt_error(e);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn show_prompt_error(&mut self, e: NameError) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.error = Some(e.to_string());
        }
    }

    /// Replace the buffer with the selected note's content from disk.
    fn load_selected(&mut self) -> Result<(), EditorError> {
        self.buffer = match self.selected_note() {
            Some(name) => Buffer::from_text(&self.store.read(name)?)?,
            None => Buffer::new(),
        };
        Ok(())
    }

    fn open_selected(&mut self) -> Result<(), EditorError> {
        if self.selected_note().is_none() {
            return Ok(());
        }
        self.load_selected()?;
        self.cursor.reset();
        self.mode = Mode::Editor;
        self.status_message = None;
        self.flash = Some(FlashCue::Editor);
        Ok(())
    }

    /// Persist the buffer and return to the sidebar. A failed write keeps the
    /// editor open so nothing is lost.
    fn close_note(&mut self) {
        let Some(name) = self.selected_note().map(str::to_string) else {
            self.mode = Mode::Sidebar;
            return;
        };
        if let Err(e) = self.store.write(&name, &self.buffer.text()) {
            error!("Failed to save '{}': {}", name, e);
            self.status_message = Some(format!("Save failed: {}", e));
            return;
        }
        if self.buffer.modified {
            info!("Saved '{}'", name);
        } else {
            debug!("Saved '{}' without changes", name);
        }
        self.buffer.modified = false;
        self.cursor.reset();
        self.mode = Mode::Sidebar;
        self.status_message = None;
        self.flash = Some(FlashCue::Sidebar);
    }
}
