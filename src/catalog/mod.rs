// Static content catalogs
//
// Every page reads from one immutable `Catalog`, built once at startup.
// Records are never mutated; pages filter or copy them.

pub mod blog;
pub mod certification;
pub mod documentation;
pub mod profile;
pub mod project;
pub mod testimonial;

pub use blog::BlogPost;
pub use certification::Certification;
pub use documentation::DocEntry;
pub use profile::{ExpertiseArea, Profile, Skill, SocialLink, TimelineItem};
pub use project::{Project, ProjectDetails};
pub use testimonial::Testimonial;

use std::collections::HashMap;

use crate::filter::{Facet, Searchable, ALL};

/// Projects highlighted on the home page
const FEATURED_PROJECTS: [&str; 2] = ["ecommerce-website", "portfolio-website"];

#[derive(Debug, Clone)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub posts: Vec<BlogPost>,
    pub docs: Vec<DocEntry>,
    pub testimonials: Vec<Testimonial>,
    pub profile: Profile,
}

impl Catalog {
    pub fn sample() -> Self {
        Catalog {
            projects: project::sample_projects(),
            certifications: certification::sample_certifications(),
            posts: blog::sample_posts(),
            docs: documentation::sample_docs(),
            testimonials: testimonial::sample_testimonials(),
            profile: Profile::sample(),
        }
    }

    /// Exact-equality lookup on the project slug
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn certification(&self, id: u32) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    /// First `n` projects other than `id` ("Other Projects" on the detail page)
    pub fn related_projects(&self, id: &str, n: usize) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.id != id).take(n).collect()
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        FEATURED_PROJECTS
            .iter()
            .filter_map(|id| self.project(id))
            .collect()
    }
}

/// `["All", ...distinct facet values in first-seen order]`
pub fn distinct_values<T: Searchable>(entries: &[T], facet: Facet) -> Vec<String> {
    let mut values = vec![ALL.to_string()];
    for entry in entries {
        for value in entry.facet_values(facet) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// How many entries carry each facet value, over the full catalog
pub fn facet_counts<T: Searchable>(entries: &[T], facet: Facet) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        for value in entry.facet_values(facet) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
