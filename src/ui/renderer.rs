// ui/renderer.rs - Ratatui-based renderer for the note editor

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};
use std::io::{self, Stdout};

use crate::editor::{Editor, FlashCue};
use crate::mode::Mode;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::options_bar::OptionsBar;
use crate::ui::widgets::sidebar::SidebarPane;

/// Ratatui-based renderer for the note editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw the editor UI
    pub fn draw(&mut self, editor: &Editor) -> io::Result<()> {
        self.render(editor, None)
    }

    /// Draw the UI with one pane blanked and the cursor hidden.
    pub fn draw_flash(&mut self, editor: &Editor, cue: FlashCue) -> io::Result<()> {
        self.render(editor, Some(cue))
    }

    /// Resize the backing buffers and force a full repaint.
    pub fn handle_resize(&mut self) -> io::Result<()> {
        self.terminal.autoresize()?;
        self.terminal.clear()
    }

    fn render(&mut self, editor: &Editor, flash: Option<FlashCue>) -> io::Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| draw_frame(f, editor, theme, flash))?;
        Ok(())
    }
}

pub fn draw_frame(f: &mut Frame, editor: &Editor, theme: &Theme, flash: Option<FlashCue>) {
    let size = f.size();

    if editor.too_small {
        let message = Paragraph::new("Terminal too small, please resize")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, size);
        return;
    }

    // The layout follows the last resize event; never draw past the frame
    let layout = &editor.layout;
    f.render_widget(
        SidebarPane::new(editor, theme).hidden(flash == Some(FlashCue::Sidebar)),
        layout.sidebar.intersection(size),
    );
    f.render_widget(
        EditorPane::new(editor, theme).hidden(flash == Some(FlashCue::Editor)),
        layout.editor.intersection(size),
    );
    f.render_widget(OptionsBar::new(editor, theme), layout.options.intersection(size));

    if flash.is_some() {
        return;
    }
    if let Some((x, y)) = cursor_position(editor) {
        if x < size.right() && y < size.bottom() {
            f.set_cursor(x, y);
        }
    }
}

/// Screen cell of the terminal cursor for the focused pane. The sidebar shows
/// no cursor.
pub fn cursor_position(editor: &Editor) -> Option<(u16, u16)> {
    match editor.mode {
        Mode::Sidebar => None,
        Mode::Editor => {
            let area = editor.layout.editor;
            let (x, y) = (editor.cursor.x, editor.cursor.y);
            inside(area, x, y)
        }
        Mode::AddNote | Mode::RenameNote => {
            let prompt = editor.prompt.as_ref()?;
            let area = editor.layout.options;
            inside(area, prompt.label.len() + prompt.x, 0)
        }
    }
}

fn inside(area: Rect, x: usize, y: usize) -> Option<(u16, u16)> {
    if x < area.width as usize && y < area.height as usize {
        Some((area.x + x as u16, area.y + y as u16))
    } else {
        None
    }
}
