//! Request handling for the contact endpoint.
//!
//! Independent of the HTTP server: takes a method, client key and body,
//! returns a status and JSON body. CORS headers apply to every response.

use std::time::{Duration, Instant};

use serde_json::{Value, json};

use super::{
    ContactError, ContactForm, LogMailer, Mailer, OutboxMailer, SubmissionLimiter, confirmation,
    notification,
};
use crate::config::section::{ContactConfig, Credentials};
use crate::{debug, log};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Response produced by [`ContactRelay::handle`].
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

impl RelayResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(err: &ContactError) -> Self {
        Self {
            status: err.status(),
            body: err.to_json(),
        }
    }
}

pub struct ContactRelay {
    mailer: Box<dyn Mailer>,
    limiter: SubmissionLimiter,
    credentials: Option<Credentials>,
    signature: String,
    allow_origin: String,
}

impl ContactRelay {
    pub fn new(mailer: Box<dyn Mailer>, credentials: Option<Credentials>) -> Self {
        let defaults = ContactConfig::default();
        Self {
            mailer,
            limiter: SubmissionLimiter::new(Duration::from_secs(defaults.min_interval)),
            credentials,
            signature: defaults.signature,
            allow_origin: defaults.allow_origin,
        }
    }

    /// Build the relay described by `[contact]`, resolving credentials now.
    pub fn from_config(config: &ContactConfig) -> Self {
        let mailer: Box<dyn Mailer> = if config.dry_run {
            Box::new(LogMailer)
        } else {
            Box::new(OutboxMailer::new(&config.outbox))
        };
        let credentials = config.credentials();
        if credentials.is_none() {
            log!("warning"; "contact credentials missing, submissions will fail");
        }

        Self::new(mailer, credentials)
            .with_interval(Duration::from_secs(config.min_interval))
            .with_signature(&config.signature)
            .with_allow_origin(&config.allow_origin)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.limiter = SubmissionLimiter::new(interval);
        self
    }

    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = signature.to_owned();
        self
    }

    pub fn with_allow_origin(mut self, origin: &str) -> Self {
        self.allow_origin = origin.to_owned();
        self
    }

    pub fn limiter(&self) -> &SubmissionLimiter {
        &self.limiter
    }

    /// Headers attached to every response.
    pub fn cors_headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Access-Control-Allow-Origin", self.allow_origin.as_str()),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ]
    }

    pub fn handle(&self, method: &str, client: &str, body: &[u8]) -> RelayResponse {
        self.handle_at(method, client, body, Instant::now())
    }

    /// Handle one request as if it arrived at `now`.
    pub fn handle_at(&self, method: &str, client: &str, body: &[u8], now: Instant) -> RelayResponse {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return RelayResponse::ok(json!({ "success": true }));
        }
        if !method.eq_ignore_ascii_case("POST") {
            return RelayResponse {
                status: 405,
                body: json!({ "error": "Method not allowed" }),
            };
        }

        if body.len() > MAX_BODY_BYTES {
            return RelayResponse::error(&ContactError::PayloadTooLarge {
                limit: MAX_BODY_BYTES,
            });
        }

        match self.submit(client, body, now) {
            Ok(()) => RelayResponse::ok(json!({
                "success": true,
                "message": "Email sent successfully!",
            })),
            Err(err) => {
                debug!("contact"; "rejected submission from {}: {}", client, err);
                RelayResponse::error(&err)
            }
        }
    }

    fn submit(&self, client: &str, body: &[u8], now: Instant) -> Result<(), ContactError> {
        let form = ContactForm::from_json(body)?.validate()?;
        let slot = self.limiter.try_reserve(client, now)?;
        let creds = self
            .credentials
            .as_ref()
            .ok_or(ContactError::MissingCredentials)?;

        for email in [
            notification(&form, creds),
            confirmation(&form, creds, &self.signature),
        ] {
            self.mailer.send(&email).map_err(|err| {
                log!("error"; "sending `{}` failed: {:#}", email.subject, err);
                ContactError::Transport(format!("{err:#}"))
            })?;
        }

        slot.commit();
        log!("contact"; "message from {} <{}>", form.name, form.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Email;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};

    #[derive(Default, Clone)]
    struct Recorder {
        sent: Arc<Mutex<Vec<Email>>>,
        fail: bool,
    }

    impl Mailer for Recorder {
        fn send(&self, email: &Email) -> anyhow::Result<String> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            self.sent.lock().push(email.clone());
            Ok("id".into())
        }
    }

    fn creds() -> Option<Credentials> {
        Some(Credentials {
            sender: "mailer@jane.dev".into(),
            recipient: "jane@jane.dev".into(),
        })
    }

    const BODY: &[u8] =
        br#"{"name":"Sam","email":"sam@example.com","subject":"Hello","message":"Hi"}"#;

    #[test]
    fn test_preflight_and_method() {
        let relay = ContactRelay::new(Box::new(Recorder::default()), creds());
        let res = relay.handle("OPTIONS", "c", b"");
        assert_eq!(res, RelayResponse::ok(json!({ "success": true })));

        let res = relay.handle("GET", "c", b"");
        assert_eq!(res.status, 405);
        assert_eq!(res.body["error"], "Method not allowed");
    }

    #[test]
    fn test_successful_submission_sends_both_emails() {
        let recorder = Recorder::default();
        let relay = ContactRelay::new(Box::new(recorder.clone()), creds());

        let res = relay.handle("POST", "c", BODY);
        assert_eq!(res.status, 200);
        assert_eq!(res.body["message"], "Email sent successfully!");

        let sent = recorder.sent.lock();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "jane@jane.dev");
        assert_eq!(sent[1].to, "sam@example.com");
    }

    #[test]
    fn test_validation_errors() {
        let relay = ContactRelay::new(Box::new(Recorder::default()), creds());

        let res = relay.handle("POST", "c", b"not json");
        assert_eq!((res.status, res.body["error"].as_str()), (400, Some("Invalid request body")));

        let res = relay.handle("POST", "c", br#"{"name":"Sam"}"#);
        assert_eq!(res.body["error"], "Missing required fields");

        let res = relay.handle(
            "POST",
            "c",
            br#"{"name":"Sam","email":"nope","subject":"s","message":"m"}"#,
        );
        assert_eq!(res.body["error"], "Invalid email address");
    }

    #[test]
    fn test_rate_limit_after_success_only() {
        let recorder = Recorder::default();
        let relay = ContactRelay::new(Box::new(recorder), creds());
        let start = Instant::now();

        // A rejected submission does not count
        relay.handle_at("POST", "c", b"{}", start);
        assert_eq!(relay.handle_at("POST", "c", BODY, start).status, 200);

        let res = relay.handle_at("POST", "c", BODY, start + Duration::from_secs(10));
        assert_eq!(res.status, 429);
        assert_eq!(res.body["retry_after"], 50);

        let res = relay.handle_at("POST", "c", BODY, start + Duration::from_secs(60));
        assert_eq!(res.status, 200);
    }

    /// Holds the first send until released.
    struct Gate {
        entered: Arc<Barrier>,
        release: Arc<Barrier>,
        held: AtomicBool,
    }

    impl Mailer for Gate {
        fn send(&self, _email: &Email) -> anyhow::Result<String> {
            if !self.held.swap(true, Ordering::SeqCst) {
                self.entered.wait();
                self.release.wait();
            }
            Ok("id".into())
        }
    }

    #[test]
    fn test_concurrent_submissions_from_one_client() {
        let entered = Arc::new(Barrier::new(2));
        let release = Arc::new(Barrier::new(2));
        let gate = Gate {
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
            held: AtomicBool::new(false),
        };
        let relay = ContactRelay::new(Box::new(gate), creds());
        let now = Instant::now();

        let statuses = std::thread::scope(|scope| {
            let first = scope.spawn(|| relay.handle_at("POST", "1.2.3.4", BODY, now).status);
            entered.wait();
            let second = relay.handle_at("POST", "1.2.3.4", BODY, now).status;
            release.wait();
            [first.join().unwrap(), second]
        });
        assert_eq!(statuses, [200, 429]);
    }

    #[test]
    fn test_missing_credentials_not_recorded() {
        let relay = ContactRelay::new(Box::new(Recorder::default()), None);
        relay.handle("POST", "c", BODY);
        assert_eq!(relay.limiter().tracked(), 0);
    }

    #[test]
    fn test_oversized_body() {
        let relay = ContactRelay::new(Box::new(Recorder::default()), creds());
        let body = vec![b' '; MAX_BODY_BYTES + 1];
        let res = relay.handle("POST", "c", &body);
        assert_eq!(res.status, 413);
        assert_eq!(res.body["error"], "Request body exceeds 65536 bytes");
        assert_eq!(relay.limiter().tracked(), 0);
    }

    #[test]
    fn test_missing_credentials() {
        let relay = ContactRelay::new(Box::new(Recorder::default()), None);
        let res = relay.handle("POST", "c", BODY);
        assert_eq!(res.status, 500);
        assert_eq!(
            res.body["error"],
            "Server configuration error: Missing email credentials"
        );
    }

    #[test]
    fn test_transport_failure_not_recorded() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let relay = ContactRelay::new(Box::new(recorder), creds());
        let res = relay.handle("POST", "c", BODY);
        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Failed to send email");
        assert_eq!(res.body["details"], "connection refused");
        assert_eq!(relay.limiter().tracked(), 0);
    }

    #[test]
    fn test_cors_headers() {
        let relay = ContactRelay::new(Box::new(LogMailer), creds()).with_allow_origin("https://jane.dev");
        let headers = relay.cors_headers();
        assert_eq!(headers[0], ("Access-Control-Allow-Origin", "https://jane.dev"));
        assert_eq!(headers[1].1, "POST, OPTIONS");
    }
}
