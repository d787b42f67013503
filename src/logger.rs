//! Terminal output with colored `[module]` prefixes.
//!
//! ```ignore
//! log!("spy"; "active section: {}", section);
//! debug!("contact"; "outbox entry {}", id);  // only with --verbose
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable `debug!` output.
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but silent unless `--verbose` is set.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one prefixed line to stdout.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut out = stdout().lock();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Colored only when stdout supports it, honoring `--color`.
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let out = Stream::Stdout;
    match module.to_ascii_lowercase().as_str() {
        "serve" => prefix.if_supports_color(out, |p| p.bright_blue().bold().to_string()).to_string(),
        "spy" => prefix.if_supports_color(out, |p| p.bright_green().bold().to_string()).to_string(),
        "contact" => prefix.if_supports_color(out, |p| p.bright_cyan().bold().to_string()).to_string(),
        "error" => prefix.if_supports_color(out, |p| p.bright_red().bold().to_string()).to_string(),
        _ => prefix.if_supports_color(out, |p| p.bright_yellow().bold().to_string()).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("serve"), "[serve]");
        assert_eq!(colorize_prefix("Contact"), "[Contact]");
        assert_eq!(colorize_prefix("anything"), "[anything]");
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
