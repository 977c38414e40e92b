// 🏠 Home page - hero, featured projects, testimonial carousel

use crate::carousel::Carousel;
use crate::catalog::{Catalog, Project, Testimonial};
use crate::cursor::GridCursor;
use crate::listeners::{ListenerGuard, ListenerKind, Listeners};
use crate::routing::{Link, Route};

pub struct HomePage {
    pub name: String,
    pub headline: String,
    pub featured: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub carousel: Carousel,
    cursor: GridCursor,
    _resize: ListenerGuard,
}

impl HomePage {
    pub fn mount(catalog: &Catalog, listeners: &Listeners, width: u16) -> Self {
        HomePage {
            name: catalog.profile.name.clone(),
            headline: catalog.profile.headline.clone(),
            featured: catalog.featured_projects().into_iter().cloned().collect(),
            testimonials: catalog.testimonials.clone(),
            carousel: Carousel::new(catalog.testimonials.len(), width),
            cursor: GridCursor::new(),
            _resize: listeners.register(ListenerKind::Resize),
        }
    }

    /// Hero call-to-action buttons
    pub fn hero_links() -> [(&'static str, Link); 2] {
        [
            ("View My Work", Link::to_route(Route::Projects)),
            ("Contact Me", Link::to_route(Route::Contact)),
        ]
    }

    pub fn active(&self) -> Option<usize> {
        self.cursor.active()
    }

    pub fn down(&mut self) {
        self.cursor.down(self.featured.len());
    }

    pub fn up(&mut self) {
        self.cursor.up(self.featured.len());
    }

    pub fn clear(&mut self) {
        self.cursor.clear();
    }

    /// Selected featured project's detail page, else the first hero button
    pub fn primary(&self) -> Link {
        match self.cursor.active().and_then(|i| self.featured.get(i)) {
            Some(project) => Link::from_href(&project.detail_path()),
            None => Link::to_route(Route::Projects),
        }
    }

    pub fn secondary(&self) -> Option<Link> {
        let project = self.cursor.active().and_then(|i| self.featured.get(i))?;
        project.live_url.as_deref().map(Link::from_href)
    }

    pub fn visible_testimonials(&self) -> Vec<&Testimonial> {
        self.carousel
            .visible_indices()
            .into_iter()
            .filter_map(|i| self.testimonials.get(i))
            .collect()
    }

    pub fn resize(&mut self, width: u16) {
        self.carousel.resize(width);
        tracing::debug!(width, visible = self.carousel.visible(), "carousel resized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Location;

    #[test]
    fn test_featured_projects_and_primary_link() {
        let listeners = Listeners::new();
        let mut home = HomePage::mount(&Catalog::sample(), &listeners, 120);
        assert_eq!(home.featured.len(), 2);
        assert_eq!(home.primary(), Link::to_route(Route::Projects));

        home.down();
        home.down();
        assert_eq!(
            home.primary(),
            Link::Internal(Location::parse("/projects/portfolio-website"))
        );
        assert_eq!(
            home.secondary(),
            Some(Link::External("https://portfolio-demo.com".to_string()))
        );
    }

    #[test]
    fn test_resize_changes_visible_testimonials() {
        let listeners = Listeners::new();
        let mut home = HomePage::mount(&Catalog::sample(), &listeners, 120);
        assert_eq!(home.visible_testimonials().len(), 2);

        home.resize(80);
        assert_eq!(home.visible_testimonials().len(), 1);
    }

    #[test]
    fn test_resize_listener_follows_page_lifetime() {
        let listeners = Listeners::new();
        let home = HomePage::mount(&Catalog::sample(), &listeners, 120);
        assert!(listeners.is_registered(ListenerKind::Resize));
        drop(home);
        assert!(!listeners.is_registered(ListenerKind::Resize));
    }
}
