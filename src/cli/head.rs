//! `folio head`: render the document head for one section.

use anyhow::Result;

use super::HeadArgs;
use crate::config::SiteConfig;
use crate::core::SectionId;
use crate::log;
use crate::seo::{MetadataOverride, synchronizer_from_config};

impl HeadArgs {
    fn metadata_override(&self) -> MetadataOverride {
        MetadataOverride {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            og_image: self.image.clone(),
            canonical_url: self.canonical.clone(),
            ..Default::default()
        }
    }
}

/// Head markup (or merged record as JSON) for the requested section.
pub fn render(config: &SiteConfig, args: &HeadArgs) -> Result<String> {
    let home = config
        .spy
        .home()
        .cloned()
        .unwrap_or_else(|| SectionId::new(crate::core::DEFAULT_SECTIONS[0]));
    let section = args.section.as_deref().map_or_else(|| home.clone(), SectionId::from);

    if !config.spy.sections.contains(&section) {
        log!("warning"; "section `{}` is not tracked, showing its metadata anyway", section);
    }

    let mut sync = synchronizer_from_config(config, home);
    let over = args.metadata_override();
    let record = sync.apply(&section, Some(&over));

    if args.json {
        return Ok(serde_json::to_string_pretty(&record)?);
    }
    Ok(sync.head().render())
}
