use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, path::PathBuf, sync::atomic::Ordering, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

use homefiles::{
    catalog::Catalog,
    config::Config,
    handlers, log_debug,
    logic::errors::format_error_message,
    messages::Msg,
    model::Model,
    services::{UploadExpired, UploadScheduler},
    update::update,
    utils, DEBUG_MODE,
};

mod ui;

use ui::icons::{IconMode, IconRenderer, IconTheme};

/// Home server file manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/homefiles-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the files of a category as JSON and exit
    #[arg(long, value_name = "CATEGORY")]
    list: Option<String>,

    /// Year filter for --list
    #[arg(long, requires = "list")]
    year: Option<String>,

    /// Name filter for --list (case-insensitive substring)
    #[arg(long, requires = "list")]
    search: Option<String>,
}

pub struct App {
    pub model: Model,
    pub icon_renderer: IconRenderer,
    scheduler: UploadScheduler,
    upload_rx: UnboundedReceiver<UploadExpired>,
}

impl App {
    fn new(config: &Config, catalog: Catalog) -> Self {
        let mut model = Model::new(catalog, config.vim_mode);
        model.ui.toast_duration_ms = config.toast_ms as u128;

        let (scheduler, upload_rx) =
            UploadScheduler::new(Duration::from_millis(config.upload_delay_ms));

        let icon_renderer = IconRenderer::new(
            IconMode::from_config(&config.icon_mode),
            IconTheme::default(),
        );

        Self {
            model,
            icon_renderer,
            scheduler,
            upload_rx,
        }
    }

    /// Run a message through the reducer and carry out its effects
    fn dispatch(&mut self, msg: Msg) {
        for effect in update(&mut self.model, msg) {
            self.scheduler.apply(effect);
        }
    }

    fn handle_event(&mut self, event: Event, area: Rect) {
        let msg = match event {
            Event::Key(key) => handlers::key_to_msg(&self.model, key),
            Event::Mouse(mouse) => handlers::mouse_to_msg(&self.model, mouse, area),
            Event::Paste(text) => handlers::paste_to_msg(&self.model, &text),
            _ => None,
        };
        if let Some(msg) = msg {
            self.dispatch(msg);
        }
    }
}

/// Determine the config file path with fallback logic (None = built-in defaults)
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try <config_dir>/homefiles/config.yaml
    if let Some(config_path) = utils::get_default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Load the configured catalog, or the built-in one
///
/// A broken catalog file does not stop the app; the error comes back so it
/// can be shown once the UI is up.
fn load_catalog(config: &Config) -> (Catalog, Option<anyhow::Error>) {
    match &config.catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => {
                log_debug(&format!("Loaded catalog from {:?}", path));
                (catalog, None)
            }
            Err(e) => {
                log_debug(&format!("Catalog {:?} rejected: {:#}", path, e));
                (Catalog::builtin(), Some(e))
            }
        },
        None => {
            log_debug("Using built-in catalog");
            (Catalog::builtin(), None)
        }
    }
}

/// Print a category listing as JSON (for `--list`)
fn print_listing(catalog: &Catalog, category: &str, year: Option<&str>, search: &str) -> Result<()> {
    if !catalog.categories.iter().any(|c| c.id == category) {
        let known: Vec<&str> = catalog.categories.iter().map(|c| c.id.as_str()).collect();
        anyhow::bail!("Unknown category '{}' (known: {})", category, known.join(", "));
    }

    let listing = catalog.listing(category, year, search);
    let json = serde_json::to_string_pretty(&listing).context("Failed to serialize listing")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    log_debug("Debug mode enabled");

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let (catalog, catalog_error) = load_catalog(&config);

    if let Some(category) = args.list {
        // Listing mode is scripted; a bad catalog is fatal here
        if let Some(e) = catalog_error {
            return Err(e);
        }
        return print_listing(
            &catalog,
            &category,
            args.year.as_deref(),
            args.search.as_deref().unwrap_or(""),
        );
    }

    let mut app = App::new(&config, catalog);
    if let Some(e) = catalog_error {
        app.model
            .show_toast(format!("Error: {}", format_error_message(&e)));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        let frame = terminal.draw(|f| {
            ui::render(f, app);
        })?;
        let area = frame.area;

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process expired uploads (non-blocking)
        while let Ok(expired) = app.upload_rx.try_recv() {
            app.scheduler.acknowledge(expired.ticket);
            app.dispatch(Msg::UploadFinished {
                ticket: expired.ticket,
            });
        }

        // Short poll keeps upload expiry and toasts timely without a spinning loop
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event, area);
        }

        // Let timer tasks run between frames
        tokio::task::yield_now().await;
    }

    app.scheduler.cancel_all();
    Ok(())
}
