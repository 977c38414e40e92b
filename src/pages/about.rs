// 👤 About page - tabbed profile

use crate::catalog::{Catalog, Profile};
use crate::routing::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    About,
    Education,
    Skills,
    Experience,
}

impl AboutTab {
    pub const ALL: [AboutTab; 4] = [
        AboutTab::About,
        AboutTab::Education,
        AboutTab::Skills,
        AboutTab::Experience,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AboutTab::About => "About Me",
            AboutTab::Education => "Education",
            AboutTab::Skills => "Skills",
            AboutTab::Experience => "Experience",
        }
    }

    fn index(&self) -> usize {
        AboutTab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        AboutTab::ALL[(self.index() + 1) % AboutTab::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        AboutTab::ALL[(self.index() + AboutTab::ALL.len() - 1) % AboutTab::ALL.len()]
    }
}

pub struct AboutPage {
    pub profile: Profile,
    pub tab: AboutTab,
    resume: Link,
}

impl AboutPage {
    pub fn mount(catalog: &Catalog, base_url: &str) -> Self {
        // The resume is a static file served next to the site, not an app route
        let resume = Link::External(format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            catalog.profile.resume_url
        ));
        AboutPage {
            profile: catalog.profile.clone(),
            tab: AboutTab::About,
            resume,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    /// "Download Resume"
    pub fn resume_link(&self) -> Link {
        self.resume.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cycle() {
        let mut page = AboutPage::mount(&Catalog::sample(), "http://localhost:3000");
        assert_eq!(page.tab, AboutTab::About);
        page.previous_tab();
        assert_eq!(page.tab, AboutTab::Experience);
        page.next_tab();
        page.next_tab();
        assert_eq!(page.tab, AboutTab::Education);
    }

    #[test]
    fn test_resume_link_is_absolute() {
        let page = AboutPage::mount(&Catalog::sample(), "http://localhost:3000/");
        assert_eq!(
            page.resume_link(),
            Link::External("http://localhost:3000/resume.pdf".to_string())
        );
    }
}
