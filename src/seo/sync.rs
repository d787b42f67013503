//! Metadata synchronizer: keeps the document head in step with the active section.

use super::head::{DocumentHead, MetaAttr};
use super::record::{MetadataOverride, MetadataRecord};
use super::structured::{LD_JSON, Person};
use super::table::MetadataTable;
use crate::core::SectionId;
use crate::debug;

/// Sole writer of a page's [`DocumentHead`].
#[derive(Debug, Clone)]
pub struct MetadataSynchronizer {
    table: MetadataTable,
    /// Section that triggers structured-data injection (the first section).
    home: SectionId,
    person: Option<Person>,
    head: DocumentHead,
    structured_injected: bool,
    writes: usize,
}

impl MetadataSynchronizer {
    pub fn new(table: MetadataTable, home: SectionId, head: DocumentHead) -> Self {
        Self {
            table,
            home,
            person: None,
            head,
            structured_injected: false,
            writes: 0,
        }
    }

    /// Attach the structured site description injected on the home section.
    pub fn with_structured_data(mut self, person: Option<Person>) -> Self {
        self.person = person;
        self
    }

    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// Tear down and hand back the final head.
    pub fn into_head(self) -> DocumentHead {
        self.head
    }

    /// Number of `apply` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn structured_injected(&self) -> bool {
        self.structured_injected
    }

    /// Table record for `section`, default record for unknown ids.
    pub fn metadata_for(&self, section: &str) -> &MetadataRecord {
        self.table.get(section)
    }

    /// Write the (optionally overridden) record of `section` into the head.
    ///
    /// Returns the merged record that was applied.
    pub fn apply(&mut self, section: &SectionId, over: Option<&MetadataOverride>) -> MetadataRecord {
        let record = self.table.resolve(section.as_str(), over).into_owned();
        self.write_record(&record);
        self.writes += 1;

        if *section == self.home {
            self.inject_structured_data();
        }

        debug!("seo"; "applied metadata for `{}`", section);
        record
    }

    fn write_record(&mut self, record: &MetadataRecord) {
        let head = &mut self.head;
        head.set_title(record.title.as_str());

        head.upsert_meta(MetaAttr::Name, "description", &record.description);
        head.upsert_meta(MetaAttr::Name, "keywords", &record.keywords);

        // Open Graph
        head.upsert_meta(MetaAttr::Property, "og:title", record.og_title());
        head.upsert_meta(MetaAttr::Property, "og:description", record.og_description());
        head.upsert_meta(MetaAttr::Property, "og:type", "website");
        let og_url = record
            .canonical_url
            .clone()
            .unwrap_or_else(|| head.location().to_string());
        head.upsert_meta(MetaAttr::Property, "og:url", &og_url);

        if let Some(image) = &record.og_image {
            head.upsert_meta(MetaAttr::Property, "og:image", image);
            head.upsert_meta(MetaAttr::Property, "og:image:alt", record.og_title());
        }

        // Twitter card
        head.upsert_meta(MetaAttr::Name, "twitter:card", "summary_large_image");
        head.upsert_meta(MetaAttr::Name, "twitter:title", record.twitter_title());
        head.upsert_meta(MetaAttr::Name, "twitter:description", record.twitter_description());

        if let Some(url) = &record.canonical_url {
            head.upsert_link("canonical", url);
        }
    }

    /// Insert the JSON-LD payload once per page lifetime.
    ///
    /// Any payload already in the head is replaced. Returns `true` if a
    /// payload was written by this call.
    pub fn inject_structured_data(&mut self) -> bool {
        if self.structured_injected {
            return false;
        }
        let Some(person) = &self.person else {
            return false;
        };

        self.head.replace_script(LD_JSON, person.render());
        self.structured_injected = true;
        true
    }
}
