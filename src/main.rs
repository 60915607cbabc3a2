use anyhow::Context;
use crossterm::{
    event::{Event, KeyEventKind, read},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use terminote::cli;
use terminote::config::{self, TerminoteConfig};
use terminote::editor::Editor;
use terminote::keymap::key_to_command;
use terminote::store::NoteStore;
use terminote::ui::renderer::TuiRenderer;

const LOG_FILE: &str = "terminote.log";

/// Application entry point: load configuration, open the notes directory,
/// run the event loop on the alternate screen and restore the terminal on
/// exit, including when the loop fails.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    let mut config =
        TerminoteConfig::load(cli_args.config.as_deref()).context("Failed to load config")?;
    config.apply_cli(&cli_args);

    let base = config::base_dir()?;
    init_logging(&base)?;

    let notes_dir = config.resolve_notes_dir()?;
    let store = NoteStore::open(&notes_dir)
        .with_context(|| format!("Failed to open notes directory {}", notes_dir.display()))?;
    log::info!("Using notes directory {}", store.root().display());

    let (width, height) = terminal::size()?;
    let mut editor = Editor::new(store, width, height)
        .context("Failed to load notes")?
        .with_tab_width(config.tab_width);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&mut editor, &config);

    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    if let Err(e) = &result {
        log::error!("Exiting after error: {:#}", e);
    }
    result
}

/// Log to a file under the base directory so output never lands on the
/// editor's screen. `RUST_LOG` overrides the default `info` filter.
fn init_logging(base: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(base)
        .with_context(|| format!("Failed to create {}", base.display()))?;
    let log_path = base.join(LOG_FILE);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(editor: &mut Editor, config: &TerminoteConfig) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new()?;
    let flash = Duration::from_millis(config.flash_millis);

    loop {
        if let Some(cue) = editor.take_flash() {
            renderer.draw_flash(editor, cue)?;
            std::thread::sleep(flash);
        }
        renderer.draw(editor)?;

        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(cmd) = key_to_command(key, editor.mode) else {
                    continue;
                };
                match editor.execute_command(cmd) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => {
                        log::error!("Command failed: {}", e);
                        editor.status_message = Some(e.to_string());
                    }
                }
            }
            Event::Resize(width, height) => {
                renderer.handle_resize()?;
                editor.handle_resize(width, height);
            }
            _ => {}
        }
    }
    Ok(())
}
