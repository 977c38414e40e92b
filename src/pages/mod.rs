// Page containers
//
// One state struct per route. A page is built when the shell navigates to
// its route and dropped when the shell navigates away; listener guards held
// by a page are released with it.

pub mod about;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod docs;
pub mod home;
pub mod listing;
pub mod not_found;
pub mod project_details;
pub mod projects;

pub use about::{AboutPage, AboutTab};
pub use blog::BlogPage;
pub use certifications::CertificationsPage;
pub use contact::{ContactEntry, ContactPage};
pub use docs::DocumentationsPage;
pub use home::HomePage;
pub use listing::{Listing, SearchBox};
pub use not_found::NotFoundPage;
pub use project_details::ProjectDetailsPage;
pub use projects::ProjectsPage;

use crate::catalog::Catalog;
use crate::listeners::Listeners;
use crate::preferences::Preferences;
use crate::routing::{Link, Location, Route};

/// What a page needs at mount time
pub struct MountContext<'a> {
    pub catalog: &'a Catalog,
    pub prefs: &'a Preferences,
    pub listeners: &'a Listeners,
    pub location: &'a Location,
    pub base_url: &'a str,
    pub width: u16,
}

pub enum Page {
    Home(HomePage),
    About(AboutPage),
    Projects(ProjectsPage),
    ProjectDetails(ProjectDetailsPage),
    Certifications(CertificationsPage),
    Documentations(DocumentationsPage),
    Blog(BlogPage),
    Contact(ContactPage),
    NotFound(NotFoundPage),
}

impl Page {
    pub fn mount(ctx: &MountContext<'_>) -> Page {
        match ctx.location.route() {
            Route::Home => Page::Home(HomePage::mount(ctx.catalog, ctx.listeners, ctx.width)),
            Route::About => Page::About(AboutPage::mount(ctx.catalog, ctx.base_url)),
            Route::Projects => Page::Projects(ProjectsPage::mount(ctx.catalog)),
            Route::ProjectDetails(id) => {
                Page::ProjectDetails(ProjectDetailsPage::mount(ctx.catalog, &id))
            }
            Route::Certifications => Page::Certifications(CertificationsPage::mount(
                ctx.catalog,
                ctx.prefs,
                ctx.location,
                ctx.listeners,
            )),
            Route::Documentations => Page::Documentations(DocumentationsPage::mount(ctx.catalog)),
            Route::Blog => Page::Blog(BlogPage::mount(ctx.catalog)),
            Route::Contact => Page::Contact(ContactPage::mount(ctx.catalog)),
            Route::NotFound(path) => Page::NotFound(NotFoundPage::mount(&path)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home(_) => "Home",
            Page::About(_) => "About",
            Page::Projects(_) => "Projects",
            Page::ProjectDetails(ProjectDetailsPage::Found { .. }) => "Project Details",
            Page::ProjectDetails(ProjectDetailsPage::NotFound { .. }) => "Project Not Found",
            Page::Certifications(_) => "Certifications",
            Page::Documentations(_) => "Documentations",
            Page::Blog(_) => "Blog",
            Page::Contact(_) => "Contact",
            Page::NotFound(_) => "Page Not Found",
        }
    }

    /// Search field of pages that have one
    pub fn search_box(&mut self) -> Option<&mut dyn SearchBox> {
        match self {
            Page::Projects(p) => Some(&mut p.listing),
            Page::Certifications(p) => Some(&mut p.listing),
            Page::Documentations(p) => Some(&mut p.listing),
            Page::Blog(p) => Some(&mut p.listing),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Page::Projects(p) => Some(p.listing.query()),
            Page::Certifications(p) => Some(p.listing.query()),
            Page::Documentations(p) => Some(p.listing.query()),
            Page::Blog(p) => Some(p.listing.query()),
            _ => None,
        }
    }

    pub fn has_search(&self) -> bool {
        self.query().is_some()
    }

    // ------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------

    pub fn down(&mut self) {
        match self {
            Page::Home(p) => p.down(),
            Page::Projects(p) => p.listing.down(),
            Page::ProjectDetails(p) => p.down(),
            Page::Certifications(p) => p.listing.down(),
            Page::Documentations(p) => p.listing.down(),
            Page::Blog(p) => p.listing.down(),
            Page::Contact(p) => p.down(),
            Page::About(_) | Page::NotFound(_) => {}
        }
    }

    pub fn up(&mut self) {
        match self {
            Page::Home(p) => p.up(),
            Page::Projects(p) => p.listing.up(),
            Page::ProjectDetails(p) => p.up(),
            Page::Certifications(p) => p.listing.up(),
            Page::Documentations(p) => p.listing.up(),
            Page::Blog(p) => p.listing.up(),
            Page::Contact(p) => p.up(),
            Page::About(_) | Page::NotFound(_) => {}
        }
    }

    /// Home: first entry of a filtered listing
    pub fn first(&mut self) {
        match self {
            Page::Projects(p) => p.listing.first(),
            Page::Certifications(p) => p.listing.first(),
            Page::Documentations(p) => p.listing.first(),
            Page::Blog(p) => p.listing.first(),
            _ => {}
        }
    }

    /// End: last entry of a filtered listing
    pub fn last(&mut self) {
        match self {
            Page::Projects(p) => p.listing.last(),
            Page::Certifications(p) => p.listing.last(),
            Page::Documentations(p) => p.listing.last(),
            Page::Blog(p) => p.listing.last(),
            _ => {}
        }
    }

    pub fn active(&self) -> Option<usize> {
        match self {
            Page::Home(p) => p.active(),
            Page::Projects(p) => p.listing.active(),
            Page::ProjectDetails(p) => p.active(),
            Page::Certifications(p) => p.listing.active(),
            Page::Documentations(p) => p.listing.active(),
            Page::Blog(p) => p.listing.active(),
            Page::Contact(p) => p.active(),
            Page::About(_) | Page::NotFound(_) => None,
        }
    }

    /// Escape: clear the cursor if one is active, otherwise the page's "back" link
    pub fn escape(&mut self) -> Option<Link> {
        if self.active().is_none() {
            return match self {
                Page::ProjectDetails(_) => Some(ProjectDetailsPage::back_link()),
                _ => None,
            };
        }
        match self {
            Page::Home(p) => p.clear(),
            Page::Projects(p) => p.listing.clear_active(),
            Page::ProjectDetails(p) => {
                p.clear();
            }
            Page::Certifications(p) => p.listing.clear_active(),
            Page::Documentations(p) => p.listing.clear_active(),
            Page::Blog(p) => p.listing.clear_active(),
            Page::Contact(p) => p.clear(),
            Page::About(_) | Page::NotFound(_) => {}
        }
        None
    }

    // ------------------------------------------------------------------------
    // Links
    // ------------------------------------------------------------------------

    /// Enter
    pub fn primary(&self) -> Option<Link> {
        match self {
            Page::Home(p) => Some(p.primary()),
            Page::About(p) => Some(p.resume_link()),
            Page::Projects(p) => p.primary(),
            Page::ProjectDetails(p) => Some(p.primary()),
            Page::Certifications(p) => p.open_active(),
            Page::Documentations(p) => p.primary(),
            Page::Blog(p) => p.primary(),
            Page::Contact(p) => p.primary(),
            Page::NotFound(p) => Some(p.primary()),
        }
    }

    /// `o`
    pub fn secondary(&self) -> Option<Link> {
        match self {
            Page::Home(p) => p.secondary(),
            Page::Projects(p) => p.secondary(),
            Page::ProjectDetails(p) => p.secondary(),
            Page::Certifications(p) => p.pdf_active(),
            Page::Documentations(p) => p.secondary(),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Facets
    // ------------------------------------------------------------------------

    /// `c`: next category chip, if the page has category chips
    pub fn cycle_category(&mut self, prefs: &mut Preferences) -> Option<String> {
        match self {
            Page::Projects(p) => Some(p.cycle_category()),
            Page::Certifications(p) => Some(p.cycle_category(prefs)),
            Page::Blog(p) => Some(p.cycle_category()),
            _ => None,
        }
    }

    /// `i`: next issuer chip (certifications only)
    pub fn cycle_issuer(&mut self, prefs: &mut Preferences) -> Option<String> {
        match self {
            Page::Certifications(p) => Some(p.cycle_issuer(prefs)),
            _ => None,
        }
    }

    /// `r`: back to the neutral filter state
    pub fn reset(&mut self, prefs: &mut Preferences) -> bool {
        match self {
            Page::Projects(p) => p.listing.reset(),
            Page::Certifications(p) => p.reset(prefs),
            Page::Documentations(p) => p.listing.reset(),
            Page::Blog(p) => p.listing.reset(),
            _ => return false,
        }
        true
    }

    // ------------------------------------------------------------------------
    // Left / right
    // ------------------------------------------------------------------------

    pub fn left(&mut self) {
        match self {
            Page::Home(p) => p.carousel.previous(),
            Page::About(p) => p.previous_tab(),
            _ => {}
        }
    }

    pub fn right(&mut self) {
        match self {
            Page::Home(p) => p.carousel.next(),
            Page::About(p) => p.next_tab(),
            _ => {}
        }
    }

    pub fn resize(&mut self, width: u16) {
        if let Page::Home(p) = self {
            p.resize(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(path: &str, listeners: &Listeners) -> Page {
        let catalog = Catalog::sample();
        let prefs = Preferences::in_memory();
        let location = Location::parse(path);
        Page::mount(&MountContext {
            catalog: &catalog,
            prefs: &prefs,
            listeners,
            location: &location,
            base_url: "http://localhost:3000",
            width: 120,
        })
    }

    #[test]
    fn test_route_table_mounts_matching_page() {
        let listeners = Listeners::new();
        assert!(matches!(mount("/", &listeners), Page::Home(_)));
        assert!(matches!(mount("/about", &listeners), Page::About(_)));
        assert!(matches!(mount("/projects", &listeners), Page::Projects(_)));
        assert!(matches!(
            mount("/projects/weather-app", &listeners),
            Page::ProjectDetails(ProjectDetailsPage::Found { .. })
        ));
        assert!(matches!(mount("/certifications", &listeners), Page::Certifications(_)));
        assert!(matches!(mount("/documentations", &listeners), Page::Documentations(_)));
        assert!(matches!(mount("/blog", &listeners), Page::Blog(_)));
        assert!(matches!(mount("/contact", &listeners), Page::Contact(_)));
        assert!(matches!(mount("/nope", &listeners), Page::NotFound(_)));
    }

    #[test]
    fn test_search_box_only_on_listing_pages() {
        let listeners = Listeners::new();
        assert!(mount("/blog", &listeners).search_box().is_some());
        assert!(mount("/contact", &listeners).search_box().is_none());
        assert!(!mount("/about", &listeners).has_search());
    }

    #[test]
    fn test_escape_clears_then_goes_back() {
        let listeners = Listeners::new();
        let mut page = mount("/projects/weather-app", &listeners);
        page.down();
        assert_eq!(page.escape(), None);
        assert_eq!(page.active(), None);
        assert_eq!(page.escape(), Some(ProjectDetailsPage::back_link()));
    }
}
