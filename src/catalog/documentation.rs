// 📚 Documentation Entry

use crate::filter::{Facet, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,

    /// Repository with the guide's sources
    pub github: String,

    /// Hosted guide
    pub demo: String,
}

impl Searchable for DocEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_values(&self, _facet: Facet) -> Vec<&str> {
        vec![]
    }
}

fn doc(id: u32, title: &str, description: &str, image_text: &str, tags: &[&str], slug: &str) -> DocEntry {
    DocEntry {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: format!("https://via.placeholder.com/800x450?text={}", image_text),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        github: format!("https://github.com/yourusername/{}", slug),
        demo: format!("https://{}.example.com", slug),
    }
}

pub fn sample_docs() -> Vec<DocEntry> {
    vec![
        doc(
            1,
            "React Router DOM v6 Guide",
            "A comprehensive guide to using React Router DOM v6 for navigation in React applications.",
            "React+Router",
            &["React", "Routing", "Frontend"],
            "react-router-guide",
        ),
        doc(
            2,
            "State Management with Redux Toolkit",
            "Learn how to manage state efficiently in React applications using Redux Toolkit.",
            "Redux+Toolkit",
            &["React", "Redux", "State Management"],
            "redux-toolkit-guide",
        ),
        doc(
            3,
            "CSS Grid Layout System",
            "A documentation on creating responsive layouts using CSS Grid with examples and use cases.",
            "CSS+Grid",
            &["CSS", "Layout", "Frontend"],
            "css-grid-guide",
        ),
        doc(
            4,
            "Custom React Hooks Collection",
            "A collection of useful custom React hooks to enhance your applications with reusable functionality.",
            "React+Hooks",
            &["React", "Hooks", "JavaScript"],
            "react-hooks-collection",
        ),
    ]
}
