use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::catalog::Catalog;
use crate::config;
use crate::logging;
use crate::player::{IntervalTicker, PlayerTiming, TrackPlayerController};
use crate::scroll::SmoothScrollHandler;
use crate::shop::{CartWorker, ShopClient};

mod event_loop;
mod settings;

pub fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings();

    // Logging is best-effort; the page works without it.
    let _log_guard = match logging::init_logging(&settings.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("delus: logging disabled: {e}");
            None
        }
    };

    let client = ShopClient::new(&settings.shop)?;
    let catalog = load_catalog(&client, &settings.shop);
    let cart = CartWorker::spawn(client);

    let mut app = App::new(catalog, &settings);
    let mut controller = TrackPlayerController::new(PlayerTiming::from(&settings.player));
    controller.bind(&app);
    let mut ticker = IntervalTicker::new();
    let scroller = SmoothScrollHandler::new(settings.scroll.behavior.into());

    enable_raw_mode()?;
    let mut terminal = or_restore(enter_terminal(), restore_terminal)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &mut ticker,
        &scroller,
        &cart,
    );

    controller.shutdown(&mut ticker);
    cart.quit();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    run_result
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best-effort teardown for a setup that failed halfway.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Pass `result` through, running `restore` first when it is an error.
fn or_restore<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

fn load_catalog(client: &ShopClient, shop: &config::ShopSettings) -> Catalog {
    if !shop.load_catalog {
        return Catalog::sample();
    }
    match Catalog::fetch(client) {
        Ok(catalog) => {
            info!(
                products = catalog.products.len(),
                tracks = catalog.tracks.len(),
                "catalog loaded from {}",
                client.base_url()
            );
            catalog
        }
        Err(e) => {
            warn!(error = %e, "catalog fetch failed, using bundled catalog");
            Catalog::sample()
        }
    }
}
