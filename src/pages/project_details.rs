// 🔍 Project details page (/projects/:id)

use crate::catalog::{Catalog, Project};
use crate::cursor::GridCursor;
use crate::routing::{Link, Route};

/// "Other Projects" shown under the details
const RELATED_COUNT: usize = 2;

pub enum ProjectDetailsPage {
    Found {
        project: Project,
        related: Vec<Project>,
        cursor: GridCursor,
    },
    NotFound {
        id: String,
    },
}

impl ProjectDetailsPage {
    pub fn mount(catalog: &Catalog, id: &str) -> Self {
        match catalog.project(id) {
            Some(project) => ProjectDetailsPage::Found {
                project: project.clone(),
                related: catalog
                    .related_projects(id, RELATED_COUNT)
                    .into_iter()
                    .cloned()
                    .collect(),
                cursor: GridCursor::new(),
            },
            None => {
                tracing::debug!(id, "unknown project id");
                ProjectDetailsPage::NotFound { id: id.to_string() }
            }
        }
    }

    pub fn back_link() -> Link {
        Link::to_route(Route::Projects)
    }

    pub fn down(&mut self) {
        if let ProjectDetailsPage::Found { related, cursor, .. } = self {
            cursor.down(related.len());
        }
    }

    pub fn up(&mut self) {
        if let ProjectDetailsPage::Found { related, cursor, .. } = self {
            cursor.up(related.len());
        }
    }

    pub fn active(&self) -> Option<usize> {
        match self {
            ProjectDetailsPage::Found { cursor, .. } => cursor.active(),
            ProjectDetailsPage::NotFound { .. } => None,
        }
    }

    /// Clears the related-project cursor; `false` if there was nothing to clear
    pub fn clear(&mut self) -> bool {
        match self {
            ProjectDetailsPage::Found { cursor, .. } if cursor.active().is_some() => {
                cursor.clear();
                true
            }
            _ => false,
        }
    }

    /// Enter: a selected related project, else the live demo, else back to the list
    pub fn primary(&self) -> Link {
        match self {
            ProjectDetailsPage::Found {
                project,
                related,
                cursor,
            } => {
                if let Some(other) = cursor.active().and_then(|i| related.get(i)) {
                    return Link::from_href(&other.detail_path());
                }
                project
                    .live_url
                    .as_deref()
                    .map(Link::from_href)
                    .unwrap_or_else(Self::back_link)
            }
            ProjectDetailsPage::NotFound { .. } => Self::back_link(),
        }
    }

    /// `o`: source code
    pub fn secondary(&self) -> Option<Link> {
        match self {
            ProjectDetailsPage::Found { project, .. } => {
                project.github_url.as_deref().map(Link::from_href)
            }
            ProjectDetailsPage::NotFound { .. } => None,
        }
    }
}
