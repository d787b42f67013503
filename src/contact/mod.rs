//! Contact form relay.
//!
//! ```text
//! POST body ─► ContactForm::validate ─► SubmissionLimiter::try_reserve
//!                                             │
//!                     notification + confirmation emails ─► Mailer
//!                                             │
//!                                    Reservation::commit
//! ```

mod error;
mod form;
mod limiter;
mod mail;
mod relay;
mod transport;

pub use error::ContactError;
pub use form::ContactForm;
pub use limiter::SubmissionLimiter;
pub use mail::{Email, confirmation, notification};
pub use relay::{ContactRelay, MAX_BODY_BYTES};
pub use transport::{LogMailer, Mailer, OutboxMailer};
