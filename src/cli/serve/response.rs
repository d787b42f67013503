//! HTTP response handlers.

use crate::utils::mime::types::{HTML, JSON, PLAIN};
use anyhow::{Context, Result, anyhow, bail};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with 404 page (`404.html` under the served root, or plain text).
pub fn respond_not_found(request: Request, root: &Path) -> Result<()> {
    let custom_404 = root.join("404.html");
    let has_custom = custom_404.is_file();

    if is_head_request(&request) {
        let mime = if has_custom { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_custom && let Ok(body) = fs::read(&custom_404) {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with a JSON body and extra headers.
pub fn respond_json(
    request: Request,
    status: u16,
    body: &serde_json::Value,
    headers: &[(&'static str, &str)],
) -> Result<()> {
    let mut response = Response::from_data(serde_json::to_vec(body)?)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", JSON)?);
    for (key, value) in headers {
        response.add_header(make_header(key, value)?);
    }
    request.respond(response)?;
    Ok(())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

/// Build a header, rejecting names that are not HTTP tokens and values with
/// control characters. `tiny_http` writes both out unchecked.
fn make_header(key: &str, value: &str) -> Result<Header> {
    let valid_name = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b));
    let valid_value = value.bytes().all(|b| b == b'\t' || !b.is_ascii_control());
    if !(valid_name && valid_value) {
        bail!("invalid header `{}: {}`", key.escape_debug(), value.escape_debug());
    }

    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header `{key}: {value}`"))
}
