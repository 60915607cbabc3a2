// src/store.rs - Note files on disk

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTE_NAME: &str = "Welcome";

pub const DEFAULT_NOTE_CONTENT: &str = concat!(
    "Welcome to terminote!\n",
    "\n",
    "Notes live as plain files in ~/.terminote/notes.\n",
    "\n",
    "In the sidebar:\n",
    "  Up/Down     choose a note\n",
    "  Left/Right  scroll a long name\n",
    "  Enter       edit the note\n",
    "  ^N          add a note\n",
    "  ^R          rename the note\n",
    "  ^X          quit\n",
    "\n",
    "In the editor, ^X saves and returns to the sidebar.\n",
);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,
    #[error("Name cannot contain '/' or be '.' or '..'")]
    Invalid,
    #[error("A note named '{0}' already exists")]
    Duplicate(String),
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Note '{0}' does not exist")]
    NotFound(String),
}

/// Check that `name` can be used as a file name inside the notes directory.
pub fn validate_note_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains('/') || name.contains('\0') || name == "." || name == ".." {
        return Err(NameError::Invalid);
    }
    Ok(())
}

/// A directory holding one regular file per note. The file name is the note
/// name and the file content is the raw note text.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Open the notes directory, creating it on first run.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        debug!("Opened note store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn io_error(&self, name: &str) -> impl FnOnce(io::Error) -> StoreError {
        let path = self.path(name);
        move |source| StoreError::Io { path, source }
    }

    /// Names of all regular files in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(self.io_error(""))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(self.io_error(""))?;
            let file_type = entry.file_type().map_err(self.io_error(""))?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn name_exists(&self, name: &str) -> bool {
        validate_note_name(name).is_ok() && self.path(name).exists()
    }

    /// Validate a name for a new note: well formed and not taken.
    pub fn check_available(&self, name: &str) -> Result<(), NameError> {
        validate_note_name(name)?;
        if self.name_exists(name) {
            return Err(NameError::Duplicate(name.to_string()));
        }
        Ok(())
    }

    /// Read a note. Invalid UTF-8 is replaced and NUL bytes are dropped so the
    /// result can always be loaded into a buffer.
    pub fn read(&self, name: &str) -> Result<String, StoreError> {
        validate_note_name(name)?;
        let bytes = fs::read(self.path(name)).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(name.to_string())
            } else {
                StoreError::Io {
                    path: self.path(name),
                    source,
                }
            }
        })?;
        let mut content = String::from_utf8_lossy(&bytes).into_owned();
        content.retain(|c| c != '\0');
        debug!("Read note '{}' ({} bytes)", name, bytes.len());
        Ok(content)
    }

    /// Replace the note's content on disk.
    pub fn write(&self, name: &str, content: &str) -> Result<(), StoreError> {
        validate_note_name(name)?;
        fs::write(self.path(name), content).map_err(self.io_error(name))?;
        debug!("Wrote note '{}' ({} bytes)", name, content.len());
        Ok(())
    }

    /// Create an empty note.
    pub fn create(&self, name: &str) -> Result<(), StoreError> {
        self.check_available(name)?;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path(name))
            .map_err(self.io_error(name))?;
        info!("Created note '{}'", name);
        Ok(())
    }

    pub fn rename(&self, old: &str, new: &str) -> Result<(), StoreError> {
        validate_note_name(old)?;
        if !self.name_exists(old) {
            return Err(StoreError::NotFound(old.to_string()));
        }
        self.check_available(new)?;
        fs::rename(self.path(old), self.path(new)).map_err(self.io_error(old))?;
        info!("Renamed note '{}' to '{}'", old, new);
        Ok(())
    }

    /// Write the introductory note when the directory has no notes yet.
    pub fn seed_if_empty(&self) -> Result<Option<String>, StoreError> {
        if !self.list()?.is_empty() {
            return Ok(None);
        }
        self.write(DEFAULT_NOTE_NAME, DEFAULT_NOTE_CONTENT)?;
        info!("Seeded default note '{}'", DEFAULT_NOTE_NAME);
        Ok(Some(DEFAULT_NOTE_NAME.to_string()))
    }
}
