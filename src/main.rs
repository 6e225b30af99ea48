use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use doniai::app::App;
use doniai::config::{self, ConfigResult};
use doniai::publish::{self, PublishClient};
use doniai::theme::{PreferenceFile, ThemeStore};

/// Terminal client for the Doniai blog
#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for the Doniai blog")]
struct Args {
    /// Blog server URL (overrides server.base_url in the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Open the publish screen at startup
    #[arg(long)]
    publish: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/doniai-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();
    if let Some(server) = args.server {
        config_result.config.server.base_url = server;
    }

    let client = PublishClient::new(&config_result.config.server.base_url)?;
    let (theme_store, theme_warning) = ThemeStore::load(PreferenceFile::default_location());

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config, theme_store);
    let result = run(terminal, app, client, config_result, theme_warning, args.publish);

    restore_terminal()?;
    result?;

    log::debug!("=== DONIAI DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/doniai-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== DONIAI DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode, alternate screen, mouse capture and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    client: PublishClient,
    config_result: ConfigResult,
    theme_warning: Option<String>,
    open_publish: bool,
) -> Result<()> {
    app.notifications.initialize();
    for warning in config_result.warning.iter().chain(theme_warning.iter()) {
        app.notifications.warning(warning);
    }

    app.theme
        .subscribe(|theme| log::info!("Theme changed to {}", theme.id()));

    setup_publish_worker(&mut app, client);

    if open_publish {
        app.open_publish();
    }

    let result = event_loop(&mut terminal, &mut app);

    // Abandon a publish still in flight
    app.publish.cancel();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Set up the publish worker thread and channels
fn setup_publish_worker(app: &mut App, client: PublishClient) {
    let (job_tx, job_rx) = std::sync::mpsc::channel();
    let (outcome_tx, outcome_rx) = std::sync::mpsc::channel();
    app.publish.set_channels(job_tx, outcome_rx);

    log::debug!("Publishing to {}", client.endpoint());
    publish::spawn_worker(client, job_rx, outcome_tx);
}
