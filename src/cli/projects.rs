//! `folio projects`: list the catalog.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;
use crate::project::{Filter, available_filters, filter_projects};

pub fn list(config: &SiteConfig, filter: Filter, json: bool) -> Result<String> {
    let filters = available_filters(&config.projects);
    if !filters.contains(&filter) {
        log!("warning"; "no projects in category `{}`", filter);
    }

    let projects = filter_projects(&config.projects, filter);
    if json {
        return Ok(serde_json::to_string_pretty(&projects)?);
    }

    let labels: Vec<_> = filters
        .iter()
        .map(|f| {
            if *f == filter {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();

    let mut out = format!("{}\n", labels.join(" | "));
    for project in projects {
        out.push_str(&format!("{:>3}  {}", project.id, project.title));
        if !project.tags.is_empty() {
            out.push_str(&format!(" ({})", project.tags.join(", ")));
        }
        out.push('\n');
    }
    Ok(out)
}
