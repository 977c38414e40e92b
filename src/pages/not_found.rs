// 404

use crate::routing::{Link, Route};

pub struct NotFoundPage {
    pub path: String,
}

impl NotFoundPage {
    pub fn mount(path: &str) -> Self {
        tracing::debug!(path, "no route matched");
        NotFoundPage {
            path: path.to_string(),
        }
    }

    /// "Back to Home"
    pub fn primary(&self) -> Link {
        Link::to_route(Route::Home)
    }
}
