//! pagekit - pagination controls in the terminal
//!
//! Pages one dataset through three independent views:
//! - Page buttons with a sliding window of page numbers
//! - A page list selector
//! - Infinite "load more" with optional auto load
//!
//! Usage: pagekit [--items N] [--per-page N] [--pages N] [--start N] [--snapshot]

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pagekit::app::App;
use pagekit::config::Config;
use pagekit::data::Dataset;
use pagekit::paging::Paging;
use pagekit::ui;
use ratatui::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("pagekit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging();

    let result = run(&args);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"pagekit - pagination controls in the terminal

USAGE:
    pagekit [OPTIONS]

OPTIONS:
    --items N        Number of demo records (default from config, 1000)
    --per-page N     Items per page
    --pages N        Page numbers shown at once (sliding window)
    --start N        Initial page
    --snapshot       Print the initial paging state as JSON and exit
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    1-4              Switch tabs
    h/l  ←/→         Previous/next page
    H/L  Home/End    First/last page
    Tab              Focus next page button (Buttons tab)
    Enter            Go to page / open page list / load more
    m                Load more (Infinite tab)
    a                Toggle auto load (Infinite tab)
    j/k              Move through items
    [ ]              Smaller/larger pages
    r                Refetch data (same rows, new order)
    + -              Add/remove 100 records
    q                Quit

CONFIG:
    ~/.config/pagekit/config.toml

LOGS:
    <cache dir>/pagekit/pagekit.log (level via PAGEKIT_LOG, default info)
"#
    );
}

/// Log to a file so the alternate screen stays clean. Without a writable
/// cache directory, logging is off.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("pagekit")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pagekit.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("PAGEKIT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Value following `name`, parsed as a number
fn flag_value(args: &[String], name: &str) -> Result<Option<usize>> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };

    let raw = args
        .get(pos + 1)
        .with_context(|| format!("Missing value for {}", name))?;

    let value = raw
        .parse::<usize>()
        .with_context(|| format!("Invalid value for {}: {:?}", name, raw))?;

    Ok(Some(value))
}

/// Apply command-line overrides on top of the loaded config (not saved)
fn apply_overrides(config: &mut Config, args: &[String]) -> Result<()> {
    if let Some(items) = flag_value(args, "--items")? {
        config.dataset_size = items;
    }
    if let Some(per_page) = flag_value(args, "--per-page")? {
        config.paging.items_per_page = per_page;
    }
    if let Some(pages) = flag_value(args, "--pages")? {
        config.paging.pages_to_show = Some(pages);
    }
    if let Some(start) = flag_value(args, "--start")? {
        config.paging.start_page = start;
    }

    config
        .paging
        .validate()
        .context("Invalid paging options")?;

    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    apply_overrides(&mut config, args)?;

    info!(?config, "starting");

    if args.iter().any(|a| a == "--snapshot") {
        return print_snapshot(&config);
    }

    let mut app = App::new(config).context("Failed to initialize application")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn print_snapshot(config: &Config) -> Result<()> {
    let dataset = Dataset::generate(config.dataset_size);
    let paging = Paging::new(dataset.records().to_vec(), config.paging.clone())?;

    let json = serde_json::to_string_pretty(&paging.snapshot())
        .context("Failed to serialize paging state")?;
    println!("{}", json);

    Ok(())
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Poll with a timeout so flash messages expire
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_flag_value() {
        let argv = args(&["pagekit", "--per-page", "13"]);
        assert_eq!(flag_value(&argv, "--per-page").unwrap(), Some(13));
        assert_eq!(flag_value(&argv, "--pages").unwrap(), None);
        assert!(flag_value(&args(&["pagekit", "--pages"]), "--pages").is_err());
        assert!(flag_value(&args(&["pagekit", "--pages", "x"]), "--pages").is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        apply_overrides(
            &mut config,
            &args(&["pagekit", "--items", "30", "--per-page", "15", "--start", "2"]),
        )
        .unwrap();
        assert_eq!(config.dataset_size, 30);
        assert_eq!(config.paging.items_per_page, 15);
        assert_eq!(config.paging.start_page, 2);

        let mut config = Config::default();
        assert!(apply_overrides(&mut config, &args(&["pagekit", "--per-page", "0"])).is_err());
    }
}
