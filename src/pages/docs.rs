// 📚 Documentations page - searchable guides

use crate::catalog::{Catalog, DocEntry};
use crate::pages::listing::Listing;
use crate::routing::Link;

pub struct DocumentationsPage {
    pub listing: Listing<DocEntry>,
}

impl DocumentationsPage {
    pub fn mount(catalog: &Catalog) -> Self {
        DocumentationsPage {
            listing: Listing::new(catalog.docs.clone()),
        }
    }

    /// Enter: hosted guide
    pub fn primary(&self) -> Option<Link> {
        self.listing.primary_link()
    }

    /// `o`: repository
    pub fn secondary(&self) -> Option<Link> {
        self.listing.secondary_link()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::listing::SearchBox;

    #[test]
    fn test_links_follow_active_entry() {
        let mut page = DocumentationsPage::mount(&Catalog::sample());
        assert_eq!(page.primary(), None);

        page.listing.down();
        let doc = page.listing.selected().unwrap().clone();
        assert_eq!(page.primary(), Some(Link::External(doc.demo)));
        assert_eq!(page.secondary(), Some(Link::External(doc.github)));
    }

    #[test]
    fn test_search_without_match() {
        let mut page = DocumentationsPage::mount(&Catalog::sample());
        for c in "zzz".chars() {
            page.listing.push_char(c);
        }
        assert!(page.listing.engine().is_empty());
        page.listing.down();
        assert_eq!(page.listing.active(), None);
    }
}
