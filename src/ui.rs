//! UI rendering helpers for the terminal user interface.
//!
//! The page is drawn as a scrollable list of rows between a navbar and the
//! featured player.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Icon, NAV_ANCHORS, RegionKind, Row};
use crate::config::UiSettings;

const HEADER_HEIGHT: u16 = 3;
const PLAYER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter/space", "play/pause or add to cart");
    map.insert("1-6", "jump to section");
    map.insert("esc", "dismiss");
    map.insert("q", "quit");
    map
});

fn controls_text() -> String {
    let order = ["j/k", "enter/space", "1-6", "esc", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Number of page rows visible in a terminal `total_height` rows tall.
pub fn page_rows(total_height: u16) -> u16 {
    total_height
        .saturating_sub(HEADER_HEIGHT + PLAYER_HEIGHT + FOOTER_HEIGHT)
        .saturating_sub(2)
        .max(1)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn nav_line(app: &App) -> Line<'static> {
    let mut spans: Vec<Span> = NAV_ANCHORS
        .iter()
        .enumerate()
        .map(|(i, a)| Span::raw(format!(" {}:{} ", i + 1, a.label)))
        .collect();
    if let Some(count) = &app.cart_counter {
        spans.push(Span::raw(" • "));
        spans.push(Span::styled(
            format!("Cart ({count})"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn row_item(app: &App, row: &Row) -> ListItem<'static> {
    match row {
        Row::Heading { title, .. } => ListItem::new(Line::from(Span::styled(
            format!("# {title}"),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        ))),
        Row::Text(text) => ListItem::new(format!("  {text}")),
        Row::Blank => ListItem::new(""),
        Row::Track(r) => {
            let Some(region) = app.regions.get(r.0) else {
                return ListItem::new("");
            };
            let icon = match region.control.icon {
                Icon::Play => "▶",
                Icon::Pause => "⏸",
            };
            let title = app
                .catalog
                .tracks
                .get(region.track)
                .map(|t| t.display())
                .unwrap_or_default();
            let indent = match region.kind {
                RegionKind::Player => "",
                RegionKind::Card => "  ",
            };
            let line = format!("{indent}{icon} {title}");
            if region.control.playing {
                ListItem::new(line).fg(Color::Green)
            } else {
                ListItem::new(line)
            }
        }
        Row::Product(i) => {
            let Some(p) = app.catalog.products.get(*i) else {
                return ListItem::new("");
            };
            ListItem::new(format!(
                "  {}  {}  [add to cart]",
                p.name,
                p.price_label()
            ))
        }
    }
}

/// The focused row, if it should be highlighted in a window `rows` tall.
fn visible_selection(app: &App, rows: u16) -> Option<usize> {
    if app.smooth.is_some() {
        return None;
    }
    let top = usize::from(app.scroll);
    (top..top + usize::from(rows))
        .contains(&app.selected)
        .then_some(app.selected)
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    let header = Paragraph::new(nav_line(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ui_settings.header_text.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = app.rows.iter().map(|r| row_item(app, r)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    // The highlight is drawn only when the focused row is already inside the
    // window at `app.scroll`, otherwise ratatui would move the offset to it.
    let selected = visible_selection(app, chunks[1].height.saturating_sub(2));
    let mut state = ListState::default()
        .with_offset(app.scroll as usize)
        .with_selected(selected);
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let player_block = Block::default().borders(Borders::ALL).title(" player ");
    match &app.panel {
        Some(panel) => {
            let gauge = Gauge::default()
                .block(player_block)
                .gauge_style(Style::default().fg(Color::Green))
                .percent(u16::from(panel.progress))
                .label(panel.time_label.as_str());
            frame.render_widget(gauge, chunks[2]);
        }
        None => {
            let empty = Paragraph::new("no featured track")
                .alignment(Alignment::Center)
                .block(player_block);
            frame.render_widget(empty, chunks[2]);
        }
    }

    if let Some(alert) = &app.alert {
        let width = u16::try_from(alert.message.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(6);
        let popup_area = centered_rect_sized(width, 3, chunks[1]);
        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(alert.message.as_str())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" esc closes "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
