// 🎓 Certifications page
//
// Search, issuer and category chips (remembered across sessions), a keyboard
// cursor, `?cert=<id>` deep links, and a share action that copies a link.

use std::collections::HashMap;
use std::time::Instant;

use crate::catalog::{distinct_values, facet_counts, Catalog, Certification};
use crate::filter::{is_all, Facet, FilterState, ALL};
use crate::listeners::{ListenerGuard, ListenerKind, Listeners};
use crate::pages::listing::Listing;
use crate::preferences::{Preferences, CERT_CATEGORY_KEY, CERT_ISSUER_KEY};
use crate::routing::{Link, Location};
use crate::services::Clipboard;
use crate::share::{self, ShareFeedback, ShareOutcome};

pub struct CertificationsPage {
    pub listing: Listing<Certification>,
    pub issuer_options: Vec<String>,
    pub category_options: Vec<String>,
    pub issuer_counts: HashMap<String, usize>,
    pub category_counts: HashMap<String, usize>,
    pub filters_open: bool,
    pub feedback: ShareFeedback,
    _keydown: ListenerGuard,
}

impl CertificationsPage {
    pub fn mount(
        catalog: &Catalog,
        prefs: &Preferences,
        location: &Location,
        listeners: &Listeners,
    ) -> Self {
        let certs = &catalog.certifications;
        let issuer_options = distinct_values(certs, Facet::Issuer);
        let category_options = distinct_values(certs, Facet::Category);

        let issuer = restore(prefs, CERT_ISSUER_KEY, &issuer_options);
        let category = restore(prefs, CERT_CATEGORY_KEY, &category_options);

        let state = FilterState::neutral()
            .with_selection(Facet::Issuer, &issuer)
            .with_selection(Facet::Category, &category);

        let mut page = CertificationsPage {
            listing: Listing::with_state(certs.clone(), state),
            issuer_counts: facet_counts(certs, Facet::Issuer),
            category_counts: facet_counts(certs, Facet::Category),
            issuer_options,
            category_options,
            filters_open: false,
            feedback: ShareFeedback::new(),
            _keydown: listeners.register(ListenerKind::KeyDown),
        };
        page.apply_deep_link(catalog, location);
        page
    }

    /// Best effort: activate the linked certification if it is visible
    fn apply_deep_link(&mut self, catalog: &Catalog, location: &Location) {
        let Some(id) = share::deep_link_target(location) else {
            return;
        };
        let Some(cert) = catalog.certification(id) else {
            tracing::debug!(id, "deep link names an unknown certification");
            return;
        };
        match self.listing.engine().position(|c| c.id == cert.id) {
            Some(index) => {
                self.listing.set_active(index);
                tracing::debug!(id, index, title = %cert.title, "deep link activated certification");
            }
            None => tracing::debug!(id, title = %cert.title, "deep-linked certification filtered out"),
        }
    }

    pub fn issuer(&self) -> &str {
        self.listing.selection(Facet::Issuer)
    }

    pub fn category(&self) -> &str {
        self.listing.selection(Facet::Category)
    }

    pub fn set_issuer(&mut self, issuer: &str, prefs: &mut Preferences) {
        self.listing.select(Facet::Issuer, issuer);
        self.persist(prefs);
    }

    pub fn set_category(&mut self, category: &str, prefs: &mut Preferences) {
        self.listing.select(Facet::Category, category);
        self.persist(prefs);
    }

    pub fn cycle_issuer(&mut self, prefs: &mut Preferences) -> String {
        let next = self.listing.cycle(Facet::Issuer, &self.issuer_options);
        self.persist(prefs);
        next
    }

    pub fn cycle_category(&mut self, prefs: &mut Preferences) -> String {
        let next = self.listing.cycle(Facet::Category, &self.category_options);
        self.persist(prefs);
        next
    }

    /// Issuer "All", category "All", empty search
    pub fn reset(&mut self, prefs: &mut Preferences) {
        self.listing.reset();
        self.persist(prefs);
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    fn persist(&self, prefs: &mut Preferences) {
        prefs.save(CERT_ISSUER_KEY, self.issuer());
        prefs.save(CERT_CATEGORY_KEY, self.category());
    }

    /// Chip count for a value; `None` for "All"
    pub fn count(&self, facet: Facet, value: &str) -> Option<usize> {
        if is_all(value) {
            return None;
        }
        let counts = match facet {
            Facet::Issuer => &self.issuer_counts,
            Facet::Category => &self.category_counts,
        };
        Some(counts.get(value).copied().unwrap_or(0))
    }

    /// "Showing X of Y certifications"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} certifications",
            self.listing.engine().len(),
            self.listing.engine().total()
        )
    }

    // ------------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------------

    /// Certificate link of the active entry
    pub fn open_active(&self) -> Option<Link> {
        self.listing.primary_link()
    }

    pub fn pdf_active(&self) -> Option<Link> {
        self.listing.secondary_link()
    }

    // ------------------------------------------------------------------------
    // Share
    // ------------------------------------------------------------------------

    /// Copy a deep link to the active certification. Failures are reported, never retried.
    pub fn share_active(
        &mut self,
        clipboard: &mut dyn Clipboard,
        location: &Location,
        base_url: &str,
        now: Instant,
    ) -> Option<ShareOutcome> {
        let id = self.listing.selected()?.id;
        let url = share::share_url(location, base_url, id);

        let outcome = match clipboard.write_text(&url) {
            Ok(()) => {
                tracing::info!(id, url = %url, "share link copied");
                ShareOutcome::Copied
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to copy share link");
                ShareOutcome::Failed
            }
        };
        self.feedback.record(id, outcome, now);
        Some(outcome)
    }

    pub fn expire_feedback(&mut self, now: Instant) {
        self.feedback.expire(now);
    }
}

/// Stored chip value if it is still one of the options, otherwise "All"
fn restore(prefs: &Preferences, key: &str, options: &[String]) -> String {
    let stored = prefs.load(key, ALL);
    match options.iter().find(|o| o.eq_ignore_ascii_case(&stored)) {
        Some(option) => option.clone(),
        None => {
            tracing::debug!(key, value = %stored, "stored filter no longer offered");
            ALL.to_string()
        }
    }
}
