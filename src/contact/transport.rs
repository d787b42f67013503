//! Mail delivery backends.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use super::Email;
use crate::log;

/// Something that can deliver an [`Email`].
///
/// Returns an identifier for the delivered message.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &Email) -> Result<String>;
}

/// Writes every email as a JSON file into a directory.
///
/// File names hash the content together with the queue time and a sequence
/// number, so identical emails sent twice land in two files.
#[derive(Debug, Clone)]
pub struct OutboxMailer {
    dir: PathBuf,
}

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

impl OutboxMailer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_id(json: &[u8]) -> String {
        let queued = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);

        let mut hasher = blake3::Hasher::new();
        hasher.update(json);
        hasher.update(&queued.to_le_bytes());
        hasher.update(&seq.to_le_bytes());
        hex::encode(&hasher.finalize().as_bytes()[..8])
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Mailer for OutboxMailer {
    fn send(&self, email: &Email) -> Result<String> {
        let json = serde_json::to_vec_pretty(email).context("Failed to serialize email")?;
        let id = Self::entry_id(&json);

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create outbox '{}'", self.dir.display()))?;
        let path = self.dir.join(format!("{id}.json"));
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        file.write_all(&json)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;

        crate::debug!("contact"; "queued {} -> {}", email.subject, path.display());
        Ok(id)
    }
}

/// Logs emails instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: &Email) -> Result<String> {
        log!("contact"; "dry run: `{}` to {}", email.subject, email.to);
        Ok(hex::encode(&blake3::hash(email.html.as_bytes()).as_bytes()[..8]))
    }
}
