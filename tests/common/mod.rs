// Common test utilities for driving the editor against a temporary notes directory

use std::fs;
use tempfile::TempDir;
use terminote::command::Command;
use terminote::editor::Editor;
use terminote::store::NoteStore;

/// Editor over an empty temporary directory, so the welcome note is seeded.
#[allow(dead_code)]
pub fn seeded_editor(width: u16, height: u16) -> (TempDir, Editor) {
    let temp_dir = TempDir::new().unwrap();
    let store = NoteStore::open(temp_dir.path()).unwrap();
    let editor = Editor::new(store, width, height).unwrap();
    (temp_dir, editor)
}

/// Editor over a directory pre-filled with `notes` as (name, content) pairs.
#[allow(dead_code)]
pub fn editor_with_notes(notes: &[(&str, &str)], width: u16, height: u16) -> (TempDir, Editor) {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in notes {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    let store = NoteStore::open(temp_dir.path()).unwrap();
    let editor = Editor::new(store, width, height).unwrap();
    (temp_dir, editor)
}

/// Type `text` key by key; '\n' becomes Enter.
#[allow(dead_code)]
pub fn type_text(editor: &mut Editor, text: &str) {
    for ch in text.chars() {
        let cmd = if ch == '\n' {
            Command::Enter
        } else {
            Command::InsertChar(ch)
        };
        editor.execute_command(cmd).unwrap();
    }
}

#[allow(dead_code)]
pub fn repeat(editor: &mut Editor, cmd: Command, times: usize) {
    for _ in 0..times {
        editor.execute_command(cmd).unwrap();
    }
}
