//! Minimum interval between accepted submissions, per client.
//!
//! A submission reserves its slot before sending. The reservation blocks
//! concurrent submissions from the same client and is rolled back unless the
//! mail went out, so failed attempts never lock a visitor out.

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::ContactError;

#[derive(Debug)]
pub struct SubmissionLimiter {
    interval: Duration,
    last: Mutex<FxHashMap<String, Instant>>,
}

/// Slot held by an in-flight submission.
///
/// Dropping it without [`Reservation::commit`] frees the slot again.
#[must_use = "an uncommitted reservation is rolled back on drop"]
pub struct Reservation<'a> {
    limiter: &'a SubmissionLimiter,
    client: String,
    at: Instant,
    committed: bool,
}

impl SubmissionLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Claim the slot for `client`, or fail with the remaining wait.
    ///
    /// Check and insert happen under one lock.
    pub fn try_reserve(&self, client: &str, now: Instant) -> Result<Reservation<'_>, ContactError> {
        let mut last = self.last.lock();

        if let Some(previous) = last.get(client) {
            let elapsed = now.saturating_duration_since(*previous);
            if elapsed < self.interval {
                let remaining = self.interval - elapsed;
                // Round up so the client never retries a moment too early
                let retry_after = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
                return Err(ContactError::RateLimited { retry_after });
            }
        }

        // Drop entries that can no longer limit anyone, including an expired one for `client`
        last.retain(|_, at| now.saturating_duration_since(*at) < self.interval);
        last.insert(client.to_owned(), now);

        Ok(Reservation {
            limiter: self,
            client: client.to_owned(),
            at: now,
            committed: false,
        })
    }

    /// Number of clients currently limited or in flight.
    pub fn tracked(&self) -> usize {
        self.last.lock().len()
    }
}

impl Reservation<'_> {
    /// Keep the slot: the submission was accepted.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut last = self.limiter.last.lock();
        // Only undo our own marker
        if last.get(&self.client) == Some(&self.at) {
            last.remove(&self.client);
        }
    }
}
