//! `folio spy`: replay scroll offsets against a page layout.
//!
//! # Layout file
//!
//! ```toml
//! viewport_height = 800
//!
//! [sections]          # id = [top, bottom) in document coordinates
//! home = [0, 700]
//! about = [700, 1500]
//! ```

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fs, path::Path};

use super::SpyArgs;
use crate::config::SiteConfig;
use crate::core::SectionGeometry;
use crate::seo::synchronizer_from_config;
use crate::spy::{ScrollSpy, SimulatedPage, StaticLayout, tracker_from_config};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    viewport_height: f64,
    #[serde(default)]
    sections: FxHashMap<String, [f64; 2]>,
}

/// Parse a layout file into a page.
pub fn load_page(path: &Path) -> Result<SimulatedPage> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout '{}'", path.display()))?;
    parse_page(&content).with_context(|| format!("Invalid layout '{}'", path.display()))
}

fn parse_page(content: &str) -> Result<SimulatedPage> {
    let file: LayoutFile = toml::from_str(content)?;
    if !(file.viewport_height.is_finite() && file.viewport_height > 0.0) {
        bail!("viewport_height must be a positive number");
    }

    let mut layout = StaticLayout::new();
    for (id, [top, bottom]) in file.sections {
        if !(top.is_finite() && bottom.is_finite()) || bottom < top {
            bail!("section `{id}` has an invalid range [{top}, {bottom})");
        }
        layout.mount(id, SectionGeometry::new(top, bottom));
    }
    Ok(SimulatedPage::new(layout, file.viewport_height))
}

/// Replay `args.scroll` and report every section change.
pub fn replay(config: &SiteConfig, page: SimulatedPage, args: &SpyArgs) -> Result<String> {
    let tracker = tracker_from_config(config)?;
    let home = tracker.current().clone();
    let sync = synchronizer_from_config(config, home);

    let mut spy = ScrollSpy::mount(page, tracker, sync);
    let mut out = format!("start -> {}\n", spy.current_section());
    if args.head {
        out.push_str(&spy.head().render());
    }

    for &y in &args.scroll {
        spy.host_mut().scroll_to(y);
        match spy.on_scroll() {
            Some(section) => {
                out.push_str(&format!("{y} -> {section}\n"));
                if args.head {
                    out.push_str(&spy.head().render());
                }
            }
            None => out.push_str(&format!("{y} -- {}\n", spy.current_section())),
        }
    }

    spy.unmount();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::config::test_parse_config;
    use clap::Parser;

    const LAYOUT: &str = r#"
viewport_height = 800

[sections]
home = [0, 700]
about = [700, 1500]
resume = [1500, 2400]
projects = [2400, 3400]
contact = [3400, 4000]
"#;

    fn args(argv: &[&str]) -> SpyArgs {
        let mut full = vec!["folio", "spy"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Spy { args } => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_replay_reports_changes() {
        let config = test_parse_config("");
        let page = parse_page(LAYOUT).unwrap();
        let out = replay(&config, page, &args(&["0", "750", "800", "2500"])).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            ["start -> home", "0 -- home", "750 -> about", "800 -- about", "2500 -> projects"]
        );
    }

    #[test]
    fn test_replay_with_head() {
        let config = test_parse_config("[seo.sections.about]\ntitle = \"About Jane\"");
        let page = parse_page(LAYOUT).unwrap();
        let out = replay(&config, page, &args(&["--head", "750"])).unwrap();
        assert!(out.contains("<title>About Jane</title>"));
    }

    #[test]
    fn test_invalid_layouts() {
        assert!(parse_page("viewport_height = 0").is_err());
        assert!(parse_page("viewport_height = 800\n[sections]\nhome = [700, 0]").is_err());
        assert!(parse_page("viewport_height = 800\nextra = 1").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_page(Path::new("/nonexistent/layout.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read layout"));
    }
}
