// 🃏 Cards - stateless view models for one catalog entry
//
// Every listing renders its entries through `Card`; the renderer never looks
// at catalog types directly.

use crate::catalog::{BlogPost, Certification, DocEntry, Project, Testimonial};
use crate::routing::Link;

/// Accent colors cycled by position on the projects grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Teal,
    Cyan,
    Green,
    Orange,
    Pink,
    Indigo,
    Red,
}

impl Accent {
    pub const CYCLE: [Accent; 9] = [
        Accent::Blue,
        Accent::Purple,
        Accent::Teal,
        Accent::Cyan,
        Accent::Green,
        Accent::Orange,
        Accent::Pink,
        Accent::Indigo,
        Accent::Red,
    ];

    pub fn for_index(index: usize) -> Accent {
        Accent::CYCLE[index % Accent::CYCLE.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: String,
    pub link: Link,
}

impl CardLink {
    fn new(label: &str, href: &str) -> Self {
        CardLink {
            label: label.to_string(),
            link: Link::from_href(href),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    pub badges: Vec<String>,

    /// First link is the primary action (Enter), second the secondary one
    pub links: Vec<CardLink>,

    pub accent: Accent,
}

impl Card {
    pub fn primary_link(&self) -> Option<&Link> {
        self.links.first().map(|l| &l.link)
    }

    pub fn secondary_link(&self) -> Option<&Link> {
        self.links.get(1).map(|l| &l.link)
    }
}

/// Anything shown as a card. `index` is the entry's position in the rendered list.
pub trait Presentable {
    fn card(&self, index: usize) -> Card;
}

impl Presentable for Project {
    fn card(&self, index: usize) -> Card {
        let mut links = vec![CardLink::new("View Details", &self.detail_path())];
        if let Some(url) = &self.github_url {
            links.push(CardLink::new("Code", url));
        }
        if let Some(url) = &self.live_url {
            links.push(CardLink::new("Live Demo", url));
        }

        Card {
            title: self.title.clone(),
            subtitle: Some(self.category_label()),
            body: self.description.clone(),
            badges: self.tags.clone(),
            links,
            accent: Accent::for_index(index),
        }
    }
}

impl Presentable for Certification {
    fn card(&self, _index: usize) -> Card {
        Card {
            title: self.title.clone(),
            subtitle: Some(format!("{} · {}", self.issuer, self.date)),
            body: self.description.clone(),
            badges: vec![self.category.clone(), self.issuer.clone()],
            links: vec![
                CardLink::new("View", &self.certificate_url),
                CardLink::new("PDF", &self.pdf_url),
            ],
            accent: Accent::Blue,
        }
    }
}

impl Presentable for BlogPost {
    fn card(&self, _index: usize) -> Card {
        Card {
            title: self.title.clone(),
            subtitle: Some(format!("{} · {}", self.date, self.author)),
            body: self.excerpt.clone(),
            badges: self.categories.clone(),
            links: vec![CardLink::new("Read More", &self.read_more_path())],
            accent: Accent::Purple,
        }
    }
}

impl Presentable for DocEntry {
    fn card(&self, _index: usize) -> Card {
        Card {
            title: self.title.clone(),
            subtitle: None,
            body: self.description.clone(),
            badges: self.tags.clone(),
            links: vec![
                CardLink::new("Read Doc", &self.demo),
                CardLink::new("View Repo", &self.github),
            ],
            accent: Accent::Teal,
        }
    }
}

impl Presentable for Testimonial {
    fn card(&self, index: usize) -> Card {
        Card {
            title: self.name.clone(),
            subtitle: Some(format!("{}, {}", self.position, self.company)),
            body: format!("\u{201c}{}\u{201d}", self.text),
            badges: Vec::new(),
            links: Vec::new(),
            accent: Accent::for_index(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::routing::Location;

    #[test]
    fn test_project_card_links() {
        let catalog = Catalog::sample();
        let card = catalog.projects[0].card(0);

        assert_eq!(
            card.primary_link(),
            Some(&Link::Internal(Location::parse("/projects/ecommerce-website")))
        );
        assert_eq!(
            card.secondary_link(),
            Some(&Link::External("https://github.com/yourusername/ecommerce".to_string()))
        );
        assert_eq!(card.subtitle.as_deref(), Some("Web"));
    }

    #[test]
    fn test_accent_cycles_every_nine() {
        assert_eq!(Accent::for_index(0), Accent::Blue);
        assert_eq!(Accent::for_index(8), Accent::Red);
        assert_eq!(Accent::for_index(9), Accent::Blue);
    }

    #[test]
    fn test_certification_card_links_are_external() {
        let catalog = Catalog::sample();
        let card = catalog.certifications[0].card(0);
        assert!(card.links.iter().all(|l| l.link.is_external()));
        assert_eq!(card.links[0].label, "View");
        assert_eq!(card.links[1].label, "PDF");
    }

    #[test]
    fn test_blog_card_links_internally() {
        let catalog = Catalog::sample();
        let card = catalog.posts[0].card(0);
        assert!(!card.primary_link().unwrap().is_external());
    }
}
