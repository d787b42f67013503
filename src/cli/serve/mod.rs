//! Local server: static portfolio files plus the contact endpoint.

mod lifecycle;
mod response;

use crate::{
    config::SiteConfig,
    contact::{ContactRelay, MAX_BODY_BYTES},
    debug, log,
    utils::path::resolve_url_path,
};
use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Shared by every request worker.
struct ServeState {
    config: Arc<SiteConfig>,
    relay: Option<ContactRelay>,
}

/// Where a request goes.
#[derive(Debug, PartialEq, Eq)]
enum Route {
    Contact,
    File(PathBuf),
    NotFound,
}

/// Bind the server and run the request loop until shutdown.
pub fn serve(config: Arc<SiteConfig>) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    let relay = config
        .contact
        .enable
        .then(|| ContactRelay::from_config(&config.contact));
    if relay.is_some() {
        debug!("serve"; "contact endpoint at {}", config.contact.endpoint);
    }
    if !config.serve.root.is_dir() {
        log!("warning"; "{} does not exist, only the contact endpoint will answer", config.serve.root.display());
    }

    log!("serve"; "http://{}", addr);

    let state = Arc::new(ServeState { config, relay });
    run_request_loop(&server, state)
}

fn run_request_loop(server: &Server, state: Arc<ServeState>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(state.config.serve.workers)
        .build()
        .context("Failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let state = Arc::clone(&state);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &state) {
                log!("serve"; "request error: {e:#}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, state: &ServeState) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match route(state, request.url()) {
        Route::Contact => handle_contact(request, state),
        Route::File(path) => response::respond_file(request, &path),
        Route::NotFound => response::respond_not_found(request, &state.config.serve.root),
    }
}

fn route(state: &ServeState, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    if state.relay.is_some() && path == state.config.contact.endpoint {
        return Route::Contact;
    }

    let Ok(decoded) = percent_decode_str(path).decode_utf8() else {
        return Route::NotFound;
    };
    match resolve_url_path(&state.config.serve.root, &decoded) {
        Some(file) if file.is_file() => Route::File(file),
        _ => Route::NotFound,
    }
}

fn handle_contact(mut request: Request, state: &ServeState) -> Result<()> {
    let Some(relay) = &state.relay else {
        return response::respond_not_found(request, &state.config.serve.root);
    };

    let client = request
        .remote_addr()
        .map_or_else(|| "unknown".to_string(), |addr| addr.ip().to_string());
    let method = request.method().to_string();

    // One byte past the limit is enough for the relay to reject the body
    let mut body = Vec::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .context("Failed to read request body")?;

    let reply = relay.handle(&method, &client, &body);
    response::respond_json(request, reply.status, &reply.body, &relay.cors_headers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn state(root: &std::path::Path, contact: bool) -> ServeState {
        let mut config = test_parse_config(&format!("[contact]\nenable = {contact}\ndry_run = true"));
        config.serve.root = root.to_path_buf();
        let relay = contact.then(|| ContactRelay::from_config(&config.contact));
        ServeState {
            config: Arc::new(config),
            relay,
        }
    }

    #[test]
    fn test_route_contact_endpoint() {
        let temp = TempDir::new().unwrap();
        let state = state(temp.path(), true);
        assert_eq!(route(&state, "/api/send-email"), Route::Contact);
        assert_eq!(route(&state, "/api/send-email?x=1"), Route::Contact);
        assert_eq!(route(&state, "/api/send-email/extra"), Route::NotFound);
    }

    #[test]
    fn test_route_disabled_contact() {
        let temp = TempDir::new().unwrap();
        let state = state(temp.path(), false);
        assert_eq!(route(&state, "/api/send-email"), Route::NotFound);
    }

    #[test]
    fn test_route_static_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir(temp.path().join("my docs")).unwrap();
        fs::write(temp.path().join("my docs/resume.pdf"), "%PDF").unwrap();
        let state = state(temp.path(), true);

        assert_eq!(
            route(&state, "/#about"),
            Route::File(temp.path().join("index.html"))
        );
        assert_eq!(
            route(&state, "/my%20docs/resume.pdf"),
            Route::File(temp.path().join("my docs/resume.pdf"))
        );
        assert_eq!(route(&state, "/missing.css"), Route::NotFound);
        assert_eq!(route(&state, "/../secret"), Route::NotFound);
    }
}
