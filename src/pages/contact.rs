// ✉️ Contact page - contact details and social links

use crate::catalog::Catalog;
use crate::cursor::GridCursor;
use crate::routing::Link;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    pub link: Option<Link>,
}

pub struct ContactPage {
    pub entries: Vec<ContactEntry>,
    pub services: Vec<String>,
    cursor: GridCursor,
}

impl ContactPage {
    pub fn mount(catalog: &Catalog) -> Self {
        let profile = &catalog.profile;
        let mut entries = vec![
            ContactEntry {
                label: "Email".to_string(),
                value: profile.email.clone(),
                link: Some(Link::External(format!("mailto:{}", profile.email))),
            },
            ContactEntry {
                label: "Phone".to_string(),
                value: profile.phone.clone(),
                link: Some(Link::External(format!("tel:{}", profile.phone.replace(' ', "")))),
            },
            ContactEntry {
                label: "Location".to_string(),
                value: profile.location.clone(),
                link: None,
            },
        ];
        entries.extend(profile.social_links.iter().map(|s| ContactEntry {
            label: s.name.clone(),
            value: s.url.clone(),
            link: Some(Link::from_href(&s.url)),
        }));

        ContactPage {
            entries,
            services: profile.services.clone(),
            cursor: GridCursor::new(),
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.cursor.active()
    }

    pub fn down(&mut self) {
        self.cursor.down(self.entries.len());
    }

    pub fn up(&mut self) {
        self.cursor.up(self.entries.len());
    }

    pub fn clear(&mut self) {
        self.cursor.clear();
    }

    pub fn primary(&self) -> Option<Link> {
        self.cursor
            .active()
            .and_then(|i| self.entries.get(i))
            .and_then(|e| e.link.clone())
    }
}
