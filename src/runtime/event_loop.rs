use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{Activation, App, NAV_ANCHORS};
use crate::config;
use crate::player::{IntervalTicker, PlayerEvent, TrackPlayerController};
use crate::scroll::SmoothScrollHandler;
use crate::shop::{CartWorker, apply_cart_outcome};
use crate::ui;

/// What a key press asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    SelectNext,
    SelectPrev,
    Activate,
    /// Index into `NAV_ANCHORS`.
    FollowAnchor(usize),
    DismissAlert,
}

/// Map a key press to an action. Releases and repeats are filtered by the caller.
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::SelectPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),
        KeyCode::Esc => Some(KeyAction::DismissAlert),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10).map(|d| d as usize - 1)?;
            (idx < NAV_ANCHORS.len()).then_some(KeyAction::FollowAnchor(idx))
        }
        _ => None,
    }
}

/// Main terminal event loop: fires due timers, applies cart results,
/// draws, and handles input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut TrackPlayerController,
    ticker: &mut IntervalTicker,
    scroller: &SmoothScrollHandler,
    cart: &CartWorker,
) -> anyhow::Result<()> {
    let frame = Duration::from_millis(settings.ui.frame_ms.max(1));
    let alert_ttl = Duration::from_millis(settings.ui.alert_ms);

    loop {
        let now = Instant::now();
        while let Some(handle) = ticker.poll(now) {
            controller.handle(PlayerEvent::Tick(handle), app, ticker);
        }

        while let Some(outcome) = cart.try_recv() {
            debug!(product_id = %outcome.product_id, "cart request finished");
            apply_cart_outcome(outcome.result, app);
        }

        app.advance_scroll();
        app.expire_alert(now, alert_ttl);
        app.set_viewport_rows(ui::page_rows(terminal.size()?.height));

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = key_action(&key) else {
                    continue;
                };
                if handle_action(action, app, controller, ticker, scroller, cart) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply `action`; returns `true` when the loop should exit.
fn handle_action(
    action: KeyAction,
    app: &mut App,
    controller: &mut TrackPlayerController,
    ticker: &mut IntervalTicker,
    scroller: &SmoothScrollHandler,
    cart: &CartWorker,
) -> bool {
    match action {
        KeyAction::Quit => return true,
        KeyAction::SelectNext => app.select_next(),
        KeyAction::SelectPrev => app.select_prev(),
        KeyAction::Activate => match app.activate_selected() {
            Activation::Control(control) => {
                controller.handle(PlayerEvent::ControlActivated(control), app, ticker);
            }
            Activation::AddToCart(product_id) => cart.add_to_cart(product_id),
            Activation::Nothing => {}
        },
        KeyAction::FollowAnchor(idx) => {
            if let Some(anchor) = NAV_ANCHORS.get(idx) {
                let click = scroller.on_anchor_click(anchor.href, app);
                debug!(href = anchor.href, ?click, "nav anchor");
            }
        }
        KeyAction::DismissAlert => app.dismiss_alert(),
    }
    false
}
