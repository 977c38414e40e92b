// 💼 Projects page - category chips and search over the project grid

use crate::catalog::{distinct_values, Catalog, Project};
use crate::filter::Facet;
use crate::pages::listing::Listing;
use crate::routing::Link;

pub struct ProjectsPage {
    pub listing: Listing<Project>,
    pub category_options: Vec<String>,
}

impl ProjectsPage {
    pub fn mount(catalog: &Catalog) -> Self {
        ProjectsPage {
            category_options: distinct_values(&catalog.projects, Facet::Category),
            listing: Listing::new(catalog.projects.clone()),
        }
    }

    pub fn cycle_category(&mut self) -> String {
        self.listing.cycle(Facet::Category, &self.category_options)
    }

    /// Enter: the project's detail page
    pub fn primary(&self) -> Option<Link> {
        self.listing.primary_link()
    }

    /// `o`: source repository (live demo when there is no repository)
    pub fn secondary(&self) -> Option<Link> {
        self.listing.secondary_link()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::listing::SearchBox;
    use crate::routing::Location;

    #[test]
    fn test_category_options_from_catalog() {
        let page = ProjectsPage::mount(&Catalog::sample());
        assert_eq!(page.category_options, vec!["All", "web", "mobile"]);
    }

    #[test]
    fn test_enter_targets_detail_page() {
        let mut page = ProjectsPage::mount(&Catalog::sample());
        assert_eq!(page.primary(), None);

        page.cycle_category();
        page.cycle_category();
        page.listing.down();
        assert_eq!(
            page.primary(),
            Some(Link::Internal(Location::parse("/projects/recipe-app")))
        );
        assert_eq!(
            page.secondary(),
            Some(Link::External("https://github.com/yourusername/recipe-app".to_string()))
        );
    }

    #[test]
    fn test_search_matches_tags() {
        let mut page = ProjectsPage::mount(&Catalog::sample());
        for c in "socket".chars() {
            page.listing.push_char(c);
        }
        let ids: Vec<&str> = page.listing.results().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["chat-application"]);
    }
}
