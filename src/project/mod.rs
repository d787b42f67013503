//! Project catalog (`[[projects]]`) and its category filters.

mod catalog;

pub use catalog::{Filter, Project, available_filters, filter_projects, validate_catalog};
