//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section  | Purpose                              |
//! |-----------|---------------|--------------------------------------|
//! | `site`    | `[site]`      | Title, author, public URL            |
//! | `spy`     | `[spy]`       | Tracked sections, offset, threshold  |
//! | `seo`     | `[seo]`       | Metadata table, structured data      |
//! | `contact` | `[contact]`   | Contact form relay                   |
//! | `serve`   | `[serve]`     | Local server                         |

mod contact;
mod seo;
mod serve;
pub mod site;
mod spy;

// Re-export section configs
pub use contact::{ContactConfig, Credentials};
pub use seo::SeoConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
pub use spy::SpyConfig;
