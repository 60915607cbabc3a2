// lib.rs - Library root for the terminote note editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod keymap;
pub mod layout;
pub mod mode;
pub mod prompt;
pub mod sidebar;
pub mod store;
pub mod ui;
pub mod viewport;
