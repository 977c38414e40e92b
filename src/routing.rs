// 🧭 Routing - route table, locations with query strings, and links
//
// Route table:
//   /                  Home
//   /about             About
//   /certifications    Certifications
//   /projects          Projects
//   /projects/:id      ProjectDetails (id matched by exact equality)
//   /documentations    Documentations
//   /blog              Blog
//   /contact           Contact
//   *                  NotFound

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Certifications,
    Projects,
    ProjectDetails(String),
    Documentations,
    Blog,
    Contact,
    NotFound(String),
}

impl Route {
    /// Match a path (no query string) against the route table
    pub fn parse(path: &str) -> Route {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            "" | "/" => Route::Home,
            "/about" => Route::About,
            "/certifications" => Route::Certifications,
            "/projects" => Route::Projects,
            "/documentations" => Route::Documentations,
            "/blog" => Route::Blog,
            "/contact" => Route::Contact,
            other => match other.strip_prefix("/projects/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::ProjectDetails(decode(id))
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Certifications => "/certifications".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetails(id) => format!("/projects/{}", urlencoding::encode(id)),
            Route::Documentations => "/documentations".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Navbar entry this route highlights, if any
    pub fn nav_item(&self) -> Option<NavItem> {
        match self {
            Route::Home => Some(NavItem::Home),
            Route::About => Some(NavItem::About),
            Route::Projects | Route::ProjectDetails(_) => Some(NavItem::Projects),
            Route::Certifications => Some(NavItem::Certifications),
            Route::Documentations => Some(NavItem::Documentations),
            Route::Blog => Some(NavItem::Blog),
            Route::Contact => Some(NavItem::Contact),
            Route::NotFound(_) => None,
        }
    }
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

// ============================================================================
// NAVBAR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Projects,
    Certifications,
    Documentations,
    Blog,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 7] = [
        NavItem::Home,
        NavItem::About,
        NavItem::Projects,
        NavItem::Certifications,
        NavItem::Documentations,
        NavItem::Blog,
        NavItem::Contact,
    ];

    pub fn next(&self) -> Self {
        let i = self.index();
        NavItem::ALL[(i + 1) % NavItem::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let i = self.index();
        NavItem::ALL[(i + NavItem::ALL.len() - 1) % NavItem::ALL.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::About => "About",
            NavItem::Projects => "Projects",
            NavItem::Certifications => "Certifications",
            NavItem::Documentations => "Docs",
            NavItem::Blog => "Blog",
            NavItem::Contact => "Contact",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavItem::Home => Route::Home,
            NavItem::About => Route::About,
            NavItem::Projects => Route::Projects,
            NavItem::Certifications => Route::Certifications,
            NavItem::Documentations => Route::Documentations,
            NavItem::Blog => Route::Blog,
            NavItem::Contact => Route::Contact,
        }
    }

    fn index(&self) -> usize {
        NavItem::ALL
            .iter()
            .position(|item| item == self)
            .unwrap_or(0)
    }
}

// ============================================================================
// LOCATION
// ============================================================================

/// Current path plus decoded query parameters, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    /// Parse "/path?a=1&b=2". A leading "/" is added when missing.
    pub fn parse(input: &str) -> Location {
        let input = input.split('#').next().unwrap_or("");
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, q),
            None => (input, ""),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (decode_component(k), decode_component(v)),
                None => (decode_component(pair), String::new()),
            })
            .collect();

        Location { path, query }
    }

    pub fn for_route(route: &Route) -> Location {
        Location {
            path: route.path(),
            query: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }

    /// First value of a query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Copy with `name` set to `value` (replaces the first occurrence, drops the rest)
    pub fn with_query_param(&self, name: &str, value: &str) -> Location {
        let mut query = Vec::with_capacity(self.query.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.query {
            if k == name {
                if !replaced {
                    query.push((k.clone(), value.to_string()));
                    replaced = true;
                }
            } else {
                query.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            query.push((name.to_string(), value.to_string()));
        }

        Location {
            path: self.path.clone(),
            query,
        }
    }

    /// Absolute URL under `base_url` (e.g. "http://localhost:3000")
    pub fn href(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, urlencoding::encode(k), urlencoding::encode(v))?;
        }
        Ok(())
    }
}

fn decode_component(s: &str) -> String {
    decode(&s.replace('+', " "))
}

// ============================================================================
// LINKS
// ============================================================================

/// A link-like affordance: routes internally or leaves the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Internal(Location),
    External(String),
}

impl Link {
    /// Hrefs starting with "/" stay in the app; anything else passes through untouched
    pub fn from_href(href: &str) -> Link {
        if href.starts_with('/') && !href.starts_with("//") {
            Link::Internal(Location::parse(href))
        } else {
            Link::External(href.to_string())
        }
    }

    pub fn to_route(route: Route) -> Link {
        Link::Internal(Location::for_route(&route))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Link::External(_))
    }

    /// Human-readable target for status lines
    pub fn target(&self) -> String {
        match self {
            Link::Internal(location) => location.to_string(),
            Link::External(url) => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/certifications"), Route::Certifications);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(
            Route::parse("/projects/weather-app"),
            Route::ProjectDetails("weather-app".to_string())
        );
        assert_eq!(Route::parse("/documentations"), Route::Documentations);
        assert_eq!(Route::parse("/blog"), Route::Blog);
        assert_eq!(Route::parse("/contact"), Route::Contact);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/blog/getting-started"),
            Route::NotFound("/blog/getting-started".to_string())
        );
        assert_eq!(Route::parse("/privacy"), Route::NotFound("/privacy".to_string()));
        assert_eq!(
            Route::parse("/projects/a/b"),
            Route::NotFound("/projects/a/b".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
    }

    #[test]
    fn test_route_path_roundtrip() {
        for route in [
            Route::Home,
            Route::About,
            Route::Projects,
            Route::ProjectDetails("task-manager".to_string()),
            Route::Contact,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_location_parse_query() {
        let loc = Location::parse("/certifications?cert=3&ref=share");
        assert_eq!(loc.path, "/certifications");
        assert_eq!(loc.query_param("cert"), Some("3"));
        assert_eq!(loc.query_param("ref"), Some("share"));
        assert_eq!(loc.query_param("missing"), None);
        assert_eq!(loc.route(), Route::Certifications);
    }

    #[test]
    fn test_location_parse_without_leading_slash() {
        let loc = Location::parse("about");
        assert_eq!(loc.path, "/about");
        assert!(loc.query.is_empty());
    }

    #[test]
    fn test_with_query_param_replaces_existing() {
        let loc = Location::parse("/certifications?cert=1&x=y");
        let updated = loc.with_query_param("cert", "4");
        assert_eq!(updated.to_string(), "/certifications?cert=4&x=y");

        let appended = Location::parse("/certifications").with_query_param("cert", "2");
        assert_eq!(appended.to_string(), "/certifications?cert=2");
    }

    #[test]
    fn test_href_encodes_query() {
        let loc = Location::parse("/blog").with_query_param("q", "react hooks");
        assert_eq!(
            loc.href("http://localhost:3000/"),
            "http://localhost:3000/blog?q=react%20hooks"
        );
        assert_eq!(Location::parse("/blog?q=react%20hooks").query_param("q"), Some("react hooks"));
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(
            Link::from_href("/projects/weather-app"),
            Link::Internal(Location::parse("/projects/weather-app"))
        );
        assert!(Link::from_href("https://github.com/yourusername").is_external());
        assert!(Link::from_href("//cdn.example.com/x").is_external());
        assert_eq!(Link::from_href("#"), Link::External("#".to_string()));
    }

    #[test]
    fn test_nav_cycles() {
        assert_eq!(NavItem::Home.next(), NavItem::About);
        assert_eq!(NavItem::Contact.next(), NavItem::Home);
        assert_eq!(NavItem::Home.previous(), NavItem::Contact);
        assert_eq!(
            Route::ProjectDetails("x".to_string()).nav_item(),
            Some(NavItem::Projects)
        );
        assert_eq!(Route::NotFound("/x".to_string()).nav_item(), None);
    }
}
