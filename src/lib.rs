// Folio - Portfolio Site Core Library
// Page state, filtering, preferences and routing, independent of the host UI

pub mod catalog;
pub mod filter;
pub mod preferences;
pub mod theme;
pub mod routing;
pub mod share;
pub mod cursor;
pub mod carousel;    // Home testimonials
pub mod listeners;
pub mod card;        // View models for every catalog record
pub mod services;    // Clipboard + external opener
pub mod pages;
pub mod config;
pub mod app;         // Navigation shell

// Re-export commonly used types
pub use app::{App, Control, Input};
pub use catalog::{
    BlogPost, Catalog, Certification, DocEntry, Profile, Project, ProjectDetails, Testimonial,
};
pub use card::{Accent, Card, CardLink, Presentable};
pub use config::Config;
pub use filter::{Facet, FilterEngine, FilterState, Searchable, ALL};
pub use preferences::{
    KeyValueStore, MemoryStore, Preferences, SqliteStore, StorageError, UnavailableStore,
};
pub use routing::{Link, Location, NavItem, Route};
pub use services::{Clipboard, MemoryClipboard, Opener, RecordingOpener, Services};
pub use share::{ShareFeedback, ShareOutcome};
pub use theme::{Palette, Rgb, Theme, ThemeContext};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Route table as printed by `folio routes`
pub const ROUTE_TABLE: [(&str, &str); 9] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/certifications", "Certifications (?cert=<id> deep link)"),
    ("/projects", "Projects"),
    ("/projects/:id", "Project details"),
    ("/documentations", "Documentations"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
    ("*", "Not found"),
];
