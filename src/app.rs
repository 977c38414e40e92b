// 🧭 Navigation shell
//
// Owns the current location and page, the theme, and the host services.
// Hosts translate their key events into `Input` and call `handle`; nothing
// in here knows about terminals.

use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::listeners::{ListenerKind, Listeners};
use crate::pages::{MountContext, Page};
use crate::routing::{Link, Location, NavItem, Route};
use crate::services::Services;
use crate::share::{ShareOutcome, SHARE_FEEDBACK_DURATION};
use crate::theme::{Palette, Theme, ThemeContext};

/// Width assumed until the host reports a real one
const DEFAULT_WIDTH: u16 = 120;

/// Host-independent input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// One-line message in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusMessage {
    text: String,
    error: bool,
    /// Cleared by `tick` once passed; `None` lasts until the next key
    expires_at: Option<Instant>,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            error: false,
            expires_at: None,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            error: true,
            expires_at: None,
        }
    }

    fn expiring(mut self, at: Instant) -> Self {
        self.expires_at = Some(at);
        self
    }
}

pub struct App {
    catalog: Catalog,
    services: Services,
    config: Config,
    listeners: Listeners,
    theme: ThemeContext,
    location: Location,
    page: Page,
    search_focused: bool,
    status: Option<StatusMessage>,
    width: u16,
}

impl App {
    pub fn new(catalog: Catalog, services: Services, config: Config, start: Location) -> Self {
        let listeners = Listeners::new();
        let theme = ThemeContext::init(&services.prefs, config.theme_hint);
        let page = Page::mount(&MountContext {
            catalog: &catalog,
            prefs: &services.prefs,
            listeners: &listeners,
            location: &start,
            base_url: &config.base_url,
            width: DEFAULT_WIDTH,
        });
        tracing::info!(location = %start, theme = theme.theme().as_str(), "app started");

        App {
            catalog,
            services,
            config,
            listeners,
            theme,
            location: start,
            page,
            search_focused: false,
            status: None,
            width: DEFAULT_WIDTH,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn route(&self) -> Route {
        self.location.route()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Whether the current status reports a failure
    pub fn status_is_error(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.error)
    }

    /// Highlighted navbar entry; none on unrouted paths
    pub fn nav_item(&self) -> Option<NavItem> {
        self.route().nav_item()
    }

    // ========================================================================
    // NAVIGATION
    // ========================================================================

    /// Unmount the current page and mount the one for `location`
    pub fn navigate(&mut self, location: Location) {
        tracing::debug!(from = %self.location, to = %location, "navigate");
        self.search_focused = false;
        self.page = Page::mount(&MountContext {
            catalog: &self.catalog,
            prefs: &self.services.prefs,
            listeners: &self.listeners,
            location: &location,
            base_url: &self.config.base_url,
            width: self.width,
        });
        self.location = location;
    }

    /// Internal links navigate; external ones go to the host opener
    pub fn follow_link(&mut self, link: Link) {
        match link {
            Link::Internal(location) => self.navigate(location),
            Link::External(url) => match self.services.opener.open(&url) {
                Ok(()) => {
                    tracing::info!(url = %url, "opened external link");
                    self.status = Some(StatusMessage::info(format!("Opened {}", url)));
                }
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "failed to open external link");
                    self.status = Some(StatusMessage::error(format!("Could not open {}", url)));
                }
            },
        }
    }

    fn navigate_nav(&mut self, item: NavItem) {
        self.navigate(Location::for_route(&item.route()));
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    pub fn handle(&mut self, input: Input, now: Instant) -> Control {
        if let Input::Resize { width, .. } = input {
            self.resize(width);
            return Control::Continue;
        }

        self.status = None;

        if self.search_focused && self.handle_search(input) {
            return Control::Continue;
        }

        match input {
            Input::Char('q') => return Control::Quit,
            Input::Tab => {
                let current = self.nav_item().unwrap_or(NavItem::Home);
                self.navigate_nav(current.next());
            }
            Input::BackTab => {
                let current = self.nav_item().unwrap_or(NavItem::Home);
                self.navigate_nav(current.previous());
            }
            Input::Char('t') => {
                let theme = self.theme.toggle(&mut self.services.prefs);
                self.status = Some(StatusMessage::info(format!("Theme: {}", theme.as_str())));
            }
            Input::Char('/') => {
                if self.page.has_search() {
                    self.search_focused = true;
                }
            }
            Input::Up | Input::Char('k') => self.page.up(),
            Input::Down | Input::Char('j') => self.page.down(),
            Input::Left => self.page.left(),
            Input::Right => self.page.right(),
            Input::Home => self.page.first(),
            Input::End => self.page.last(),
            Input::Enter => {
                if let Some(link) = self.page.primary() {
                    self.follow_link(link);
                }
            }
            Input::Char('o') => {
                if let Some(link) = self.page.secondary() {
                    self.follow_link(link);
                }
            }
            Input::Esc => {
                if let Some(link) = self.page.escape() {
                    self.follow_link(link);
                }
            }
            Input::Char('c') => {
                if let Some(value) = self.page.cycle_category(&mut self.services.prefs) {
                    self.status = Some(StatusMessage::info(format!("Category: {}", value)));
                }
            }
            Input::Char('i') => {
                if let Some(value) = self.page.cycle_issuer(&mut self.services.prefs) {
                    self.status = Some(StatusMessage::info(format!("Issuer: {}", value)));
                }
            }
            Input::Char('r') => {
                if self.page.reset(&mut self.services.prefs) {
                    self.status = Some(StatusMessage::info("Filters reset"));
                }
            }
            Input::Char('f') => {
                if let Page::Certifications(page) = &mut self.page {
                    page.toggle_filters();
                }
            }
            Input::Char('s') => self.share(now),
            _ => {}
        }

        Control::Continue
    }

    /// Keys consumed by a focused search box
    fn handle_search(&mut self, input: Input) -> bool {
        let Some(search) = self.page.search_box() else {
            self.search_focused = false;
            return false;
        };
        match input {
            Input::Char(c) => search.push_char(c),
            Input::Backspace => search.pop_char(),
            Input::Enter | Input::Esc => self.search_focused = false,
            _ => return false,
        }
        true
    }

    fn share(&mut self, now: Instant) {
        let Page::Certifications(page) = &mut self.page else {
            return;
        };
        let outcome = page.share_active(
            self.services.clipboard.as_mut(),
            &self.location,
            &self.config.base_url,
            now,
        );
        if let Some(outcome) = outcome {
            let message = match outcome {
                ShareOutcome::Copied => StatusMessage::info(outcome.message()),
                ShareOutcome::Failed => StatusMessage::error(outcome.message()),
            };
            self.status = Some(message.expiring(now + SHARE_FEEDBACK_DURATION));
        }
    }

    fn resize(&mut self, width: u16) {
        self.width = width;
        if self.listeners.is_registered(ListenerKind::Resize) {
            self.page.resize(width);
        }
    }

    /// Periodic housekeeping: expires share feedback and timed status messages
    pub fn tick(&mut self, now: Instant) {
        if let Page::Certifications(page) = &mut self.page {
            page.expire_feedback(now);
        }
        if self
            .status
            .as_ref()
            .and_then(|s| s.expires_at)
            .is_some_and(|at| now >= at)
        {
            self.status = None;
        }
    }
}
