//! Page metadata: per-section records, the `<head>` model and its synchronizer.
//!
//! | Module       | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `record`     | `MetadataRecord` and partial overrides          |
//! | `table`      | Section → record lookup with default fallback   |
//! | `head`       | `DocumentHead`, upsert-only element model       |
//! | `structured` | JSON-LD `Person` description                    |
//! | `sync`       | `MetadataSynchronizer`, sole head writer        |

mod head;
mod record;
mod structured;
mod sync;
mod table;

pub use head::{DocumentHead, HeadNode, MetaAttr};
pub use record::{MetadataOverride, MetadataRecord};
pub use structured::{LD_JSON, Person};
pub use sync::MetadataSynchronizer;
pub use table::MetadataTable;

use crate::config::SiteConfig;
use crate::core::SectionId;

/// Build the synchronizer for one page view from config.
///
/// `home` is the section that carries the structured site description.
pub fn synchronizer_from_config(config: &SiteConfig, home: SectionId) -> MetadataSynchronizer {
    let location = config.site.url.clone().unwrap_or_default();
    MetadataSynchronizer::new(
        MetadataTable::from_config(config),
        home,
        DocumentHead::new(location),
    )
    .with_structured_data(config.seo.person.clone())
}
