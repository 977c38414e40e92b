// 📝 Blog Post Entity

use crate::filter::{Facet, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub slug: String,
    pub date: String,
    pub author: String,
    pub categories: Vec<String>,
}

impl BlogPost {
    pub fn new(id: u32, title: &str, excerpt: &str, date: &str, categories: &[&str]) -> Self {
        let slug: String = title
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        BlogPost {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            image: "https://via.placeholder.com/800x450".to_string(),
            slug,
            date: date.to_string(),
            author: "Sajib Bhattacharjee".to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// "Read More" target. There is no post route, so this lands on Not Found.
    pub fn read_more_path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.categories.iter().map(String::as_str));
        fields
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Category => self.categories.iter().map(String::as_str).collect(),
            Facet::Issuer => vec![],
        }
    }
}

pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost::new(
            1,
            "Getting Started with React Hooks",
            "Learn how to use React Hooks to simplify your functional components and manage state.",
            "June 15, 2023",
            &["React", "JavaScript", "Web Development"],
        ),
        BlogPost::new(
            2,
            "CSS Grid vs Flexbox: When to Use Which",
            "A practical comparison of the two layout systems with real-world examples.",
            "May 28, 2023",
            &["CSS", "Web Design"],
        ),
        BlogPost::new(
            3,
            "TypeScript Generics Explained",
            "Write reusable, type-safe utilities with generics, constraints, and inference.",
            "May 2, 2023",
            &["TypeScript", "JavaScript"],
        ),
        BlogPost::new(
            4,
            "Optimizing React Performance",
            "Memoization, code splitting, and profiling techniques for faster React apps.",
            "April 10, 2023",
            &["React", "Performance"],
        ),
    ]
}
