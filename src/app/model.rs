//! Page model types: `App` and the elements it lays out.
//!
//! `App` plays the part of the document: it owns every element the handlers
//! touch (play controls, the featured player's progress bar and time label,
//! the cart counter, section headings) and implements the surfaces they
//! drive. Missing elements turn the matching setters into no-ops.

use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::player::{self, ControlId, PlayerSurface, PlayerTiming, Progress, TrackRef};
use crate::scroll::{ScrollBehavior, ScrollSurface, SmoothScroll};
use crate::shop::{CartCounter, Notifier};

/// Icon shown on a play control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Play,
    Pause,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayControl {
    pub icon: Icon,
    pub playing: bool,
}

impl Default for PlayControl {
    fn default() -> Self {
        Self {
            icon: Icon::Play,
            playing: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// The featured player panel at the top of the music section.
    Player,
    /// A release or playlist card.
    Card,
}

/// A track's UI region: one track, one play control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRegion {
    /// Index into `Catalog::tracks`.
    pub track: usize,
    pub kind: RegionKind,
    pub control: PlayControl,
}

/// The featured player's progress bar and time label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerPanel {
    pub region: TrackRef,
    pub progress: u8,
    pub time_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Heading { id: &'static str, title: String },
    Text(String),
    Track(TrackRef),
    /// Index into `Catalog::products`.
    Product(usize),
    Blank,
}

impl Row {
    pub fn is_focusable(&self) -> bool {
        matches!(self, Row::Track(_) | Row::Product(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavAnchor {
    pub label: &'static str,
    pub href: &'static str,
}

/// Links in the navbar. The logo links to `#`; `#contact` has no target.
pub const NAV_ANCHORS: [NavAnchor; 6] = [
    NavAnchor { label: "DELUS", href: "#" },
    NavAnchor { label: "Home", href: "#home" },
    NavAnchor { label: "Music", href: "#music" },
    NavAnchor { label: "Shop", href: "#shop" },
    NavAnchor { label: "About", href: "#about" },
    NavAnchor { label: "Contact", href: "#contact" },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub shown_at: Instant,
}

/// What clicking the focused row asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Control(ControlId),
    AddToCart(String),
    Nothing,
}

/// The page model.
pub struct App {
    pub catalog: Catalog,
    pub rows: Vec<Row>,
    pub regions: Vec<TrackRegion>,
    pub panel: Option<PlayerPanel>,
    pub cart_counter: Option<String>,
    pub alert: Option<Alert>,

    /// Focused row.
    pub selected: usize,
    /// First visible row.
    pub scroll: u16,
    pub smooth: Option<SmoothScroll>,

    viewport_rows: u16,
    smooth_frames: u16,
}

impl App {
    /// Lay out `catalog` into a page.
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        let timing = PlayerTiming::from(&settings.player);

        let mut rows = Vec::new();
        let mut regions = Vec::new();
        let mut panel = None;

        let mut push_region = |rows: &mut Vec<Row>, track: usize, kind: RegionKind| {
            let r = TrackRef(regions.len());
            regions.push(TrackRegion {
                track,
                kind,
                control: PlayControl::default(),
            });
            rows.push(Row::Track(r));
            r
        };

        rows.push(Row::Heading {
            id: "home",
            title: "Delus".to_string(),
        });
        rows.push(Row::Text("Independent label and store.".to_string()));
        rows.push(Row::Blank);

        rows.push(Row::Heading {
            id: "music",
            title: "Music".to_string(),
        });
        if let Some(idx) = catalog.featured_index() {
            rows.push(Row::Text("Featured".to_string()));
            let region = push_region(&mut rows, idx, RegionKind::Player);
            panel = Some(PlayerPanel {
                region,
                progress: 0,
                time_label: player::time_label(Progress::default(), timing.total),
            });
        }
        let releases: Vec<usize> = catalog.releases().map(|(i, _)| i).collect();
        if !releases.is_empty() {
            rows.push(Row::Text("Releases".to_string()));
            for idx in releases {
                push_region(&mut rows, idx, RegionKind::Card);
            }
        }
        let playlist: Vec<usize> = catalog.playlist().map(|(i, _)| i).collect();
        if !playlist.is_empty() {
            rows.push(Row::Text("Playlist".to_string()));
            for idx in playlist {
                push_region(&mut rows, idx, RegionKind::Card);
            }
        }
        rows.push(Row::Blank);

        rows.push(Row::Heading {
            id: "shop",
            title: "Shop".to_string(),
        });
        let shown = catalog.featured_products().len();
        if shown == 0 {
            rows.push(Row::Text("Nothing in stock right now.".to_string()));
        }
        rows.extend((0..shown).map(Row::Product));
        rows.push(Row::Blank);

        rows.push(Row::Heading {
            id: "about",
            title: "About".to_string(),
        });
        rows.push(Row::Text(
            "Delus releases and merch, straight from the label.".to_string(),
        ));

        let selected = rows.iter().position(Row::is_focusable).unwrap_or(0);

        Self {
            catalog,
            rows,
            regions,
            panel,
            cart_counter: Some("0".to_string()),
            alert: None,
            selected,
            scroll: 0,
            smooth: None,
            viewport_rows: u16::MAX,
            smooth_frames: settings.scroll.smooth_frames,
        }
    }

    /// Record how many page rows fit on screen.
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    fn max_scroll(&self) -> u16 {
        let len = u16::try_from(self.rows.len()).unwrap_or(u16::MAX);
        len.saturating_sub(self.viewport_rows)
    }

    /// Move focus to the next focusable row.
    pub fn select_next(&mut self) {
        if let Some(i) = (self.selected + 1..self.rows.len()).find(|&i| self.rows[i].is_focusable()) {
            self.selected = i;
        }
        self.ensure_selected_visible();
    }

    /// Move focus to the previous focusable row.
    pub fn select_prev(&mut self) {
        if let Some(i) = (0..self.selected).rev().find(|&i| self.rows[i].is_focusable()) {
            self.selected = i;
        }
        self.ensure_selected_visible();
    }

    /// Scroll just enough for the focused row to be on screen.
    fn ensure_selected_visible(&mut self) {
        self.smooth = None;
        let sel = u16::try_from(self.selected).unwrap_or(u16::MAX);
        if sel < self.scroll {
            self.scroll = sel;
        } else if sel >= self.scroll.saturating_add(self.viewport_rows) {
            self.scroll = sel - self.viewport_rows + 1;
        }
    }

    /// Click the focused row.
    pub fn activate_selected(&self) -> Activation {
        match self.rows.get(self.selected) {
            Some(Row::Track(track)) => Activation::Control(ControlId(track.0)),
            Some(Row::Product(i)) => self
                .catalog
                .products
                .get(*i)
                .map(|p| Activation::AddToCart(p.id.to_string()))
                .unwrap_or(Activation::Nothing),
            _ => Activation::Nothing,
        }
    }

    /// Advance a running smooth scroll by one frame.
    pub fn advance_scroll(&mut self) {
        if let Some(anim) = self.smooth.as_mut() {
            if let Some(offset) = anim.step() {
                self.scroll = offset;
            }
            if anim.is_done() {
                self.smooth = None;
            }
        }
    }

    /// Drop the alert once it has been visible for `ttl`. A zero `ttl` keeps it.
    pub fn expire_alert(&mut self, now: Instant, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        if self
            .alert
            .as_ref()
            .is_some_and(|a| now.saturating_duration_since(a.shown_at) >= ttl)
        {
            self.alert = None;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The region playing right now, judged by control state.
    pub fn playing_region(&self) -> Option<TrackRef> {
        self.regions
            .iter()
            .position(|r| r.control.playing)
            .map(TrackRef)
    }

    /// Row index of the heading with `id`.
    pub fn heading_row(&self, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| matches!(r, Row::Heading { id: hid, .. } if *hid == id))
    }
}

impl PlayerSurface for App {
    fn play_controls(&self) -> Vec<ControlId> {
        (0..self.regions.len()).map(ControlId).collect()
    }

    fn track_region(&self, control: ControlId) -> Option<TrackRef> {
        self.regions.get(control.0).map(|_| TrackRef(control.0))
    }

    fn control_is_playing(&self, control: ControlId) -> bool {
        self.regions
            .get(control.0)
            .is_some_and(|r| r.control.playing)
    }

    fn set_track_playing(&mut self, track: TrackRef, playing: bool) {
        if let Some(region) = self.regions.get_mut(track.0) {
            region.control = PlayControl {
                icon: if playing { Icon::Pause } else { Icon::Play },
                playing,
            };
        }
    }

    fn set_progress_width(&mut self, percent: u8) {
        if let Some(panel) = self.panel.as_mut() {
            panel.progress = percent.min(Progress::MAX);
        }
    }

    fn set_time_label(&mut self, text: &str) {
        if let Some(panel) = self.panel.as_mut() {
            panel.time_label = text.to_string();
        }
    }
}

impl ScrollSurface for App {
    fn element_offset(&self, id: &str) -> Option<u16> {
        self.heading_row(id)
            .map(|row| u16::try_from(row).unwrap_or(u16::MAX))
    }

    fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior) {
        let target = offset.min(self.max_scroll());

        // Keyboard focus follows the jump, staying on the target page: the
        // first focusable row at or after the element, else the nearest one
        // above it.
        let start = usize::from(offset).min(self.rows.len());
        let page_start = usize::from(target);
        let page_end = (page_start + usize::from(self.viewport_rows)).min(self.rows.len());
        let below = (start..page_end).find(|&i| self.rows[i].is_focusable());
        let above = || (page_start..start).rev().find(|&i| self.rows[i].is_focusable());
        if let Some(i) = below.or_else(above) {
            self.selected = i;
        }

        match behavior {
            ScrollBehavior::Smooth => {
                self.smooth = Some(SmoothScroll::new(self.scroll, target, self.smooth_frames));
            }
            ScrollBehavior::Instant => {
                self.smooth = None;
                self.scroll = target;
            }
        }
    }
}

impl Notifier for App {
    fn alert(&mut self, message: &str) {
        self.alert = Some(Alert {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }
}

impl CartCounter for App {
    fn set_cart_count(&mut self, count: u32) {
        if let Some(counter) = self.cart_counter.as_mut() {
            *counter = count.to_string();
        }
    }
}
