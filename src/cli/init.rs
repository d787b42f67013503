//! `folio init`: write a commented `folio.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::section::{ContactConfig, ServeConfig, SiteInfoConfig, SpyConfig};
use crate::core::DEFAULT_SECTIONS;
use crate::log;

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Folio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');
    out.push_str(&SpyConfig::template_with_header());
    out.push('\n');
    out.push_str(&seo_template());
    out.push('\n');
    out.push_str(&ContactConfig::template_with_header());
    out.push('\n');
    out.push_str(&ServeConfig::template_with_header());
    out.push('\n');
    out.push_str(PROJECTS_TEMPLATE);

    out
}

/// Metadata table with one entry per default section.
fn seo_template() -> String {
    let mut out = String::from(
        "# Metadata for sections without their own entry\n\
         [seo.default]\n\
         title = \"\"\n\
         description = \"\"\n\
         # og_image = \"/images/preview.png\"\n\
         # canonical_url = \"https://example.com\"\n",
    );

    for id in DEFAULT_SECTIONS.iter().skip(1) {
        let mut title = id.to_string();
        if let Some(first) = title.get_mut(..1) {
            first.make_ascii_uppercase();
        }
        out.push_str(&format!(
            "\n[seo.sections.{id}]\ntitle = \"{title}\"\ndescription = \"\"\n# canonical_url = \"https://example.com/#{id}\"\n"
        ));
    }

    out.push_str(
        "\n# JSON-LD description injected on the first section\n\
         # [seo.person]\n\
         # name = \"\"\n\
         # job_title = \"\"\n\
         # same_as = []\n",
    );
    out
}

const PROJECTS_TEMPLATE: &str = "\
# Project catalog, category is one of: frontend, backend, fullstack
# [[projects]]
# id = 1
# title = \"\"
# description = \"\"
# tags = []
# category = \"fullstack\"
# code_link = \"\"
";

/// Write `folio.toml` into `root`, refusing to overwrite an existing one.
pub fn write_config(root: &Path, file_name: &Path) -> Result<()> {
    let path = root.join(file_name);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or pass a different directory.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
