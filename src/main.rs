mod app;
mod config;
mod error;
mod events;
mod log;
mod mover;
mod notification;
mod scroll;
mod source;
mod tui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use config::{CliOverrides, Config};
use error::MoverError;
use events::EventHandler;
use mover::DropLocation;
use notification::EventSink;
use source::ItemSet;

const USAGE: &str = "usage: mover [ITEMS_FILE] [--top|--bottom] [--no-normalize] \
[--events FILE] [--left-title TITLE] [--right-title TITLE]";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    items_file: Option<PathBuf>,
    overrides: CliOverrides,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--top" => parsed.overrides.moved_item_location = Some(DropLocation::Top),
            "--bottom" => parsed.overrides.moved_item_location = Some(DropLocation::Bottom),
            "--no-normalize" => parsed.overrides.normalize_lists = Some(false),
            flag @ ("--events" | "--left-title" | "--right-title") => {
                let value = args
                    .get(i + 1)
                    .with_context(|| format!("{} requires a value\n{}", flag, USAGE))?
                    .clone();
                match flag {
                    "--events" => parsed.overrides.events_file = Some(PathBuf::from(value)),
                    "--left-title" => parsed.overrides.left_title = Some(value),
                    _ => parsed.overrides.right_title = Some(value),
                }
                i += 1;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                parsed.items_file = Some(PathBuf::from(arg));
            }
            other => {
                eprintln!("Warning: ignoring unknown flag '{}'", other);
            }
        }
        i += 1;
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let raw_args: Vec<String> = std::env::args().collect();
    let args = parse_args(&raw_args)?;

    // Config precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(args.overrides);

    let items = match &args.items_file {
        Some(path) => ItemSet::load(path).map_err(MoverError::from)?,
        None => ItemSet::demo(),
    };
    log::log(&format!(
        "Loaded {} unselected, {} selected item(s)",
        items.unselected.len(),
        items.selected.len()
    ));

    let sink = match config.events_file() {
        Some(path) => EventSink::open(&path)
            .with_context(|| format!("Failed to open events file {}", path.display()))?,
        None => EventSink::disabled(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Without mouse capture there are no drag gestures; refuse to start
    if let Err(e) = execute!(stdout, EnableMouseCapture) {
        let _ = execute!(stdout, LeaveAlternateScreen);
        disable_raw_mode()?;
        return Err(MoverError::DragUnavailable(e.to_string()).into());
    }
    // Losing focus mid-drag cancels the gesture
    execute!(stdout, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(items, &config, sink);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;

    if app.accepted {
        let items = app.into_items();
        log::log(&format!(
            "Accepted with {} selected item(s)",
            items.selected.len()
        ));
        println!("{}", items.to_json()?);
    } else {
        log::log("Quit without accepting");
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        // The frame showing the last insertion is on screen: finish the moves
        if app.mover.has_pending() {
            app.settle();
            continue;
        }

        if app.should_quit {
            return Ok(());
        }

        // Handle events with timeout for responsiveness
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
    }
}
