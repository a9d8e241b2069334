//! Range slider TUI — drive the range refinement widget from a terminal.
//!
//! Filters a numeric dataset (the sample prices, or `values` from `--config`)
//! through an in-memory range connector. Logs go to `--log-file`, since the
//! terminal is in raw mode.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rangeslider_tui::{input, persistence, ui, AppState, HostConfig};

#[derive(Parser, Debug)]
#[command(name = "rangeslider", about = "Interactive numeric range refinement")]
struct Cli {
    /// TOML file with a [widget] table and optional `values`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where log output is written.
    #[arg(long, default_value = "rangeslider.log")]
    log_file: PathBuf,

    /// Do not restore or save the last refinement.
    #[arg(long)]
    no_persist: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    log::info!(
        "starting: attribute={} values={}",
        config.widget.attribute_name,
        config.values.as_ref().map_or(0, Vec::len)
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangeslider")
        .join("state.json");

    // Build app state and deliver the first render
    let mut app = AppState::new(config);
    if !cli.no_persist {
        persistence::apply(&mut app, persistence::load(&state_path));
    }
    app.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    if !cli.no_persist {
        if let Err(err) = persistence::save(&state_path, &persistence::extract(&app)) {
            log::warn!("could not save refinement: {err:#}");
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Deliver connector answers to refine requests from the last turn
        app.drain_commands();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
