// 📝 Blog page - search and category chips over posts

use crate::catalog::{distinct_values, BlogPost, Catalog};
use crate::filter::Facet;
use crate::pages::listing::Listing;
use crate::routing::Link;

pub struct BlogPage {
    pub listing: Listing<BlogPost>,
    pub category_options: Vec<String>,
}

impl BlogPage {
    pub fn mount(catalog: &Catalog) -> Self {
        BlogPage {
            category_options: distinct_values(&catalog.posts, Facet::Category),
            listing: Listing::new(catalog.posts.clone()),
        }
    }

    pub fn cycle_category(&mut self) -> String {
        self.listing.cycle(Facet::Category, &self.category_options)
    }

    /// Enter: "Read More"
    pub fn primary(&self) -> Option<Link> {
        self.listing.primary_link()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::listing::SearchBox;
    use crate::routing::Route;

    #[test]
    fn test_query_and_category_combine() {
        let mut page = BlogPage::mount(&Catalog::sample());
        for c in "react hooks".chars() {
            page.listing.push_char(c);
        }
        assert_eq!(page.listing.results().len(), 1);

        page.listing.clear_query();
        page.listing.select(Facet::Category, "React");
        assert!(page
            .listing
            .results()
            .iter()
            .all(|p| p.categories.iter().any(|c| c == "React")));
    }

    #[test]
    fn test_read_more_is_unrouted() {
        let mut page = BlogPage::mount(&Catalog::sample());
        page.listing.down();
        match page.primary() {
            Some(Link::Internal(location)) => {
                assert!(matches!(location.route(), Route::NotFound(_)))
            }
            other => panic!("unexpected link {:?}", other),
        }
    }
}
