// 🧩 Project Entity - portfolio work samples
//
// The listing page shows the short form; `/projects/:id` shows `details`
// when a project has them.

use crate::filter::{Facet, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Slug used in `/projects/:id` (matched by exact equality)
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,

    /// Lowercase category key: "web", "mobile", ...
    pub category: String,

    pub github_url: Option<String>,
    pub live_url: Option<String>,

    /// Long-form content for the detail page
    pub details: Option<ProjectDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub long_description: Vec<String>,
    pub technologies: Vec<String>,
    pub challenges: String,
    pub solution: String,
    pub additional_images: Vec<String>,
    pub date: String,
}

impl Project {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        tags: &[&str],
        category: &str,
        github_url: &str,
        live_url: &str,
    ) -> Self {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: format!(
                "https://via.placeholder.com/600x400?text={}",
                title.replace(' ', "+")
            ),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.to_string(),
            github_url: Some(github_url.to_string()),
            live_url: Some(live_url.to_string()),
            details: None,
        }
    }

    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Internal path of the detail page
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Category label as shown on the chips ("web" -> "Web")
    pub fn category_label(&self) -> String {
        capitalize(&self.category)
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Category => vec![self.category.as_str()],
            Facet::Issuer => vec![],
        }
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample projects, in display order
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            "ecommerce-website",
            "E-Commerce Website",
            "A full-featured e-commerce platform built with React, Node.js, and MongoDB, featuring product listings, cart functionality, user authentication, and payment processing.",
            &["React", "Node.js", "MongoDB", "Express"],
            "web",
            "https://github.com/yourusername/ecommerce",
            "https://ecommerce-demo.com",
        )
        .with_details(ProjectDetails {
            long_description: lines(&[
                "This e-commerce platform was built to provide a seamless shopping experience for users. The project includes features such as:",
                "• Responsive product catalog with filtering and search",
                "• User authentication and profile management",
                "• Shopping cart with persistent storage",
                "• Checkout process with Stripe payment integration",
                "• Admin dashboard for product and order management",
                "• Reviews and ratings system",
            ]),
            technologies: lines(&["React", "Node.js", "Express", "MongoDB", "Redux", "Stripe API"]),
            challenges: "The main challenge was implementing a secure payment system and ensuring a smooth user experience across different devices and screen sizes.".to_string(),
            solution: "Stripe's API handles payment processing, and the layout is responsive with CSS Grid and Flexbox. Redux keeps state consistent across the checkout flow.".to_string(),
            additional_images: lines(&[
                "https://via.placeholder.com/800x600?text=E-Commerce+Screenshot+1",
                "https://via.placeholder.com/800x600?text=E-Commerce+Screenshot+2",
                "https://via.placeholder.com/800x600?text=E-Commerce+Screenshot+3",
            ]),
            date: "June 2023".to_string(),
        }),
        Project::new(
            "weather-app",
            "Weather App",
            "A weather application that shows current weather and forecasts using OpenWeatherMap API.",
            &["React", "API", "CSS"],
            "web",
            "https://github.com/yourusername/weather-app",
            "https://weather-app-demo.com",
        )
        .with_details(ProjectDetails {
            long_description: lines(&[
                "This weather application provides real-time weather information and forecasts for any location around the world. The project features:",
                "• Current weather conditions display",
                "• 5-day weather forecast",
                "• Location search functionality",
                "• Geolocation API integration",
                "• Weather alerts and notifications",
                "• Responsive design for all devices",
            ]),
            technologies: lines(&["React", "CSS3", "OpenWeatherMap API", "Geolocation API"]),
            challenges: "The main challenge was handling API rate limits and implementing accurate location-based weather data with fallback options.".to_string(),
            solution: "Responses are cached to reduce API calls, and the browser's Geolocation API falls back to IP-based location.".to_string(),
            additional_images: lines(&[
                "https://via.placeholder.com/800x600?text=Weather+App+Screenshot+1",
                "https://via.placeholder.com/800x600?text=Weather+App+Screenshot+2",
            ]),
            date: "April 2023".to_string(),
        }),
        Project::new(
            "task-manager",
            "Task Manager",
            "A task management application with features like drag-and-drop, categories, priorities, and notifications.",
            &["React", "Redux", "Firebase"],
            "web",
            "https://github.com/yourusername/task-manager",
            "https://task-manager-demo.com",
        ),
        Project::new(
            "portfolio-website",
            "Portfolio Website",
            "A responsive portfolio website built with React and styled-components, featuring dark mode and animations.",
            &["React", "Styled Components", "Framer Motion"],
            "web",
            "https://github.com/yourusername/portfolio",
            "https://portfolio-demo.com",
        ),
        Project::new(
            "recipe-app",
            "Recipe App",
            "A recipe application that allows users to search, save, and share recipes. Features include user authentication and a favorites system.",
            &["React Native", "Firebase", "API"],
            "mobile",
            "https://github.com/yourusername/recipe-app",
            "https://recipe-app-demo.com",
        ),
        Project::new(
            "chat-application",
            "Chat Application",
            "A real-time chat application with features like private messaging, group chats, and file sharing.",
            &["React", "Socket.io", "Node.js", "MongoDB"],
            "web",
            "https://github.com/yourusername/chat-app",
            "https://chat-app-demo.com",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("web"), "Web");
        assert_eq!(capitalize("mobile"), "Mobile");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_project_search_fields_include_tags() {
        let project = &sample_projects()[4];
        assert_eq!(project.id, "recipe-app");
        let fields = project.search_fields();
        assert!(fields.contains(&"React Native"));
        assert!(fields.contains(&"Recipe App"));
    }

    #[test]
    fn test_detail_path() {
        let project = &sample_projects()[0];
        assert_eq!(project.detail_path(), "/projects/ecommerce-website");
        assert!(project.details.is_some());
    }
}
