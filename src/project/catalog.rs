//! Project entries and category filters.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
}

impl Category {
    /// Display order of filters.
    pub const ALL: [Category; 3] = [Self::Frontend, Self::Backend, Self::Fullstack];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Full Stack",
        }
    }
}

/// Catalog filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Frontend,
    Backend,
    Fullstack,
}

impl Filter {
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Frontend => Some(Category::Frontend),
            Self::Backend => Some(Category::Backend),
            Self::Fullstack => Some(Category::Fullstack),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self.category() {
            None => "all",
            Some(category) => category.as_str(),
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self.category() {
            None => "All",
            Some(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        self.category().is_none_or(|c| c == project.category)
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        match category {
            Category::Frontend => Self::Frontend,
            Category::Backend => Self::Backend,
            Category::Fullstack => Self::Fullstack,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "fullstack" | "full-stack" | "full stack" => Ok(Self::Fullstack),
            other => Err(format!(
                "unknown filter `{other}` (expected all, frontend, backend or fullstack)"
            )),
        }
    }
}

/// A catalog entry (`[[projects]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_link: Option<String>,
}

/// `All` followed by every category that has at least one project.
pub fn available_filters(projects: &[Project]) -> Vec<Filter> {
    let present: FxHashSet<Category> = projects.iter().map(|p| p.category).collect();

    std::iter::once(Filter::All)
        .chain(
            Category::ALL
                .into_iter()
                .filter(|c| present.contains(c))
                .map(Filter::from),
        )
        .collect()
}

/// Projects matching `filter`, in catalog order.
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Check ids are unique and titles non-empty.
pub fn validate_catalog(projects: &[Project], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (index, project) in projects.iter().enumerate() {
        if !seen.insert(project.id) {
            diag.error(
                FieldPath::dynamic(format!("projects[{index}].id")),
                format!("project id {} is used more than once", project.id),
            );
        }
        if project.title.trim().is_empty() {
            diag.error(
                FieldPath::dynamic(format!("projects[{index}].title")),
                "project title must not be empty",
            );
        }
    }
}
