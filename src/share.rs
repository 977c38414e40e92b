// 🔗 Deep links and the "share" button (certifications page)
//
// `?cert=<id>` addresses one certification. Sharing copies the current
// location with that parameter set and shows a short-lived outcome badge.

use std::time::{Duration, Instant};

use crate::routing::Location;

pub const CERT_QUERY_PARAM: &str = "cert";

/// How long "Link copied!" / "Failed to copy" stays visible
pub const SHARE_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Numeric `cert` parameter, if present and well-formed
pub fn deep_link_target(location: &Location) -> Option<u32> {
    let raw = location.query_param(CERT_QUERY_PARAM)?;
    match raw.trim().parse::<u32>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(value = raw, "ignoring malformed cert parameter");
            None
        }
    }
}

/// Absolute URL of `location` with `cert=<id>`
pub fn share_url(location: &Location, base_url: &str, id: u32) -> String {
    location
        .with_query_param(CERT_QUERY_PARAM, &id.to_string())
        .href(base_url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied,
    Failed,
}

impl ShareOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Copied => "Link copied!",
            ShareOutcome::Failed => "Failed to copy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShareStatus {
    entry_id: u32,
    outcome: ShareOutcome,
    expires_at: Instant,
}

/// At most one visible outcome; a newer share replaces the older one
#[derive(Debug, Clone, Default)]
pub struct ShareFeedback {
    current: Option<ShareStatus>,
}

impl ShareFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry_id: u32, outcome: ShareOutcome, now: Instant) {
        self.current = Some(ShareStatus {
            entry_id,
            outcome,
            expires_at: now + SHARE_FEEDBACK_DURATION,
        });
    }

    /// Outcome badge to show on an entry, if any
    pub fn status_for(&self, entry_id: u32) -> Option<ShareOutcome> {
        self.current
            .filter(|s| s.entry_id == entry_id)
            .map(|s| s.outcome)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Back to neutral once the display window has passed
    pub fn expire(&mut self, now: Instant) {
        if matches!(self.current, Some(s) if now >= s.expires_at) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_link_target() {
        assert_eq!(deep_link_target(&Location::parse("/certifications?cert=3")), Some(3));
        assert_eq!(deep_link_target(&Location::parse("/certifications?cert=abc")), None);
        assert_eq!(deep_link_target(&Location::parse("/certifications?cert=-1")), None);
        assert_eq!(deep_link_target(&Location::parse("/certifications")), None);
    }

    #[test]
    fn test_share_url_sets_param() {
        let loc = Location::parse("/certifications");
        assert_eq!(
            share_url(&loc, "http://localhost:3000", 2),
            "http://localhost:3000/certifications?cert=2"
        );

        let loc = Location::parse("/certifications?cert=1");
        assert_eq!(
            share_url(&loc, "https://me.dev", 4),
            "https://me.dev/certifications?cert=4"
        );
    }

    #[test]
    fn test_feedback_expires_after_two_seconds() {
        let start = Instant::now();
        let mut feedback = ShareFeedback::new();
        feedback.record(2, ShareOutcome::Copied, start);

        assert_eq!(feedback.status_for(2), Some(ShareOutcome::Copied));
        assert_eq!(feedback.status_for(1), None);

        feedback.expire(start + Duration::from_millis(1999));
        assert_eq!(feedback.status_for(2), Some(ShareOutcome::Copied));

        feedback.expire(start + SHARE_FEEDBACK_DURATION);
        assert_eq!(feedback.status_for(2), None);
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_newer_share_replaces_older() {
        let start = Instant::now();
        let mut feedback = ShareFeedback::new();
        feedback.record(1, ShareOutcome::Copied, start);
        feedback.record(3, ShareOutcome::Failed, start + Duration::from_millis(500));

        assert_eq!(feedback.status_for(1), None);
        assert_eq!(feedback.status_for(3), Some(ShareOutcome::Failed));
        assert_eq!(ShareOutcome::Failed.message(), "Failed to copy");
    }
}
