//! timemask: a masked time field in the terminal.
#![allow(clippy::multiple_crate_versions)]

mod ui;

use clap::Parser;
use ratatui::crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use timemask::{config, Direction, HourFormat, Section, Session};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timemask")]
#[command(about = "Masked-input editing for time values", long_about = None)]
struct Args {
    /// Format template, e.g. "hh:mm:ss" or "hh:mm aa"
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<String>,

    /// Hour bound: 12 or 24
    #[arg(long, value_name = "HOURS")]
    hour_format: Option<HourFormat>,

    /// Paste this text into the field and print the result instead of opening the editor
    #[arg(long, short = 'i', value_name = "TEXT")]
    input: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Serialize)]
/// What the field holds when the session ends.
struct Report<'a> {
    format: &'a str,
    hour_format: HourFormat,
    value: &'a str,
    complete: bool,
    sections: &'a [Section],
}

impl<'a> Report<'a> {
    fn new(session: &'a Session) -> Self {
        Self {
            format: session.format(),
            hour_format: session.hour_format(),
            value: session.value(),
            complete: session.is_complete(),
            sections: session.sections(),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.log_file.as_deref(), args.input.is_some());
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(format) = args.format {
        cfg.format = format;
    }
    if let Some(hour_format) = args.hour_format {
        cfg.hour_format = hour_format.to_string();
    }

    let mut session = Session::from_config(&cfg);

    if session.sections().is_empty() {
        eprintln!("No time tokens found in format {:?}", cfg.format);
        return Ok(());
    }

    if let Some(text) = args.input {
        session.paste(&text);
        return print_report(&session);
    }

    run_tui(session)
}

/// Installs a subscriber when there is somewhere to write that will not garble the screen:
/// the given file, or stderr in one-shot mode.
fn init_logging(log_file: Option<&Path>, one_shot: bool) -> Option<WorkerGuard> {
    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name()?;
        let file_appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(writer)
            .try_init()
            .ok()?;
        return Some(guard);
    }

    if one_shot {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .try_init()
            .ok();
    }
    None
}

fn print_report(session: &Session) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&Report::new(session)).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_tui(mut session: Session) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Start with the caret on the first section so typing works straight away.
    session.select(Some(0), Some(0));

    let result = run_app(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        Ok(())
    } else {
        print_report(&session)
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, session))?;

        match event::read()? {
            Event::Paste(text) => {
                session.paste(&text);
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Left | KeyCode::BackTab => {
                    session.navigate(Direction::Previous);
                }
                KeyCode::Right | KeyCode::Tab => {
                    session.navigate(Direction::Next);
                }
                KeyCode::Home => {
                    session.select(Some(0), Some(0));
                }
                KeyCode::End => {
                    let end = session.sections().last().map(|s| s.selection_end);
                    session.select(end, end);
                }
                KeyCode::Backspace | KeyCode::Delete => {
                    session.clear_active();
                }
                KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                    session.type_char(c);
                }
                _ => {}
            },
            _ => {}
        }
    }
}
