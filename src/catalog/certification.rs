// 🎓 Certification Entity
//
// Numeric ids are what the `cert` deep-link query parameter refers to.

use crate::filter::{Facet, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub image: String,
    pub certificate_url: String,
    pub pdf_url: String,
    pub category: String,
}

impl Certification {
    pub fn new(
        id: u32,
        title: &str,
        issuer: &str,
        date: &str,
        description: &str,
        category: &str,
    ) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        Certification {
            id,
            title: title.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            image: "https://via.placeholder.com/600x400?text=Certificate".to_string(),
            certificate_url: format!("https://certificates.example.com/{}", slug),
            pdf_url: format!("https://certificates.example.com/{}.pdf", slug),
            category: category.to_string(),
        }
    }
}

impl Searchable for Certification {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.issuer.as_str(),
            self.category.as_str(),
        ]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Category => vec![self.category.as_str()],
            Facet::Issuer => vec![self.issuer.as_str()],
        }
    }
}

pub fn sample_certifications() -> Vec<Certification> {
    vec![
        Certification::new(
            1,
            "Full Stack Web Development",
            "Udemy",
            "June 2023",
            "A comprehensive course covering Node.js, Express, MongoDB, React, and Redux.",
            "Web Development",
        ),
        Certification::new(
            2,
            "JavaScript Algorithms and Data Structures",
            "freeCodeCamp",
            "May 2023",
            "In-depth understanding of JavaScript fundamentals, algorithms, and data structures.",
            "Programming",
        ),
        Certification::new(
            3,
            "React - The Complete Guide",
            "Udemy",
            "April 2023",
            "Master React, Redux, React Router, and modern React development practices.",
            "Web Development",
        ),
        Certification::new(
            4,
            "Responsive Web Design",
            "freeCodeCamp",
            "March 2023",
            "Create responsive web designs using HTML, CSS, and various frameworks.",
            "Web Design",
        ),
    ]
}
