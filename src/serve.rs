//! HTTP server for shell documents and static assets.
//!
//! A lightweight server built on `tiny_http`:
//!
//! - Static file serving from the client build output directory
//! - A catch-all route that renders the shell document for any other
//!   path (the static route is consulted first)
//! - Graceful shutdown on Ctrl+C
//!
//! # Request Resolution
//!
//! ```text
//! request ──► file exists under assets root? ──► serve file
//!                         │ no
//!                         ▼
//!                  render pipeline ──► 200 text/html
//!                         │ error
//!                         ▼
//!                  500 text/plain (error detail), logged with the URL
//! ```
//!
//! Requests are handled sequentially on the accept thread; the render
//! pipeline holds no shared mutable state.

use crate::{config::SiteConfig, log, metadata::MetadataService, render::render_page};
use anyhow::{Context, Result};
use std::{fs, io::Cursor, net::SocketAddr, path::Path, sync::Arc};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the shell server.
///
/// This function:
/// 1. Binds to the configured interface and port (with auto-retry on port conflict)
/// 2. Sets up Ctrl+C handler for graceful shutdown
/// 3. Enters the main request handling loop
///
/// The server blocks until Ctrl+C is received.
pub fn serve_site(service: &dyn MetadataService, config: &'static SiteConfig) -> Result<()> {
    let interface: std::net::IpAddr = config.serve.interface.parse()?;
    let base_port = config.serve.resolve_port();

    let (server, addr) = try_bind_port(interface, base_port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    // Handle requests in main thread (blocks until Ctrl+C)
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, service, config) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: std::net::IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => {
                // Will retry silently
                continue;
            }
            Err(e) => {
                // Last attempt failed
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request.
///
/// The static-asset route runs before the catch-all: an existing file
/// under the assets root is served as-is, everything else gets a
/// rendered shell document. A pipeline failure answers 500 with the
/// error detail and logs the offending URL.
fn handle_request(
    request: Request,
    service: &dyn MetadataService,
    config: &'static SiteConfig,
) -> Result<()> {
    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| request.url().to_owned());

    // Strip query string (e.g., ?t=123456) before resolving a file path
    let path_without_query = url_path.split('?').next().unwrap_or(&url_path);
    let local_path = config
        .assets
        .root
        .join(path_without_query.trim_matches('/'));

    // Static assets win over the catch-all
    if local_path.is_file() {
        return serve_file(request, &local_path);
    }

    match render_page(&url_path, service, config) {
        Ok(html) => serve_html(request, html),
        Err(err) => {
            log!("error"; "{url_path}: {err:#}");
            serve_error(request, format!("{err:#}"))
        }
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content_type = guess_content_type(path);

    let response = Response::from_data(content)
        .with_header(Header::from_bytes("Content-Type", content_type).unwrap());

    request.respond(response)?;
    Ok(())
}

/// Serve a rendered HTML document.
fn serve_html(request: Request, content: String) -> Result<()> {
    let response = Response::from_string(content)
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap());
    request.respond(response)?;
    Ok(())
}

/// Serve a 500 response carrying the error detail.
fn serve_error(request: Request, detail: String) -> Result<()> {
    let length = detail.len();
    let response = Response::new(
        StatusCode(500),
        vec![Header::from_bytes("Content-Type", "text/plain").unwrap()],
        Cursor::new(detail),
        Some(length),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("webmanifest") => "application/manifest+json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("txt") => "text/plain; charset=utf-8",

        // Default binary
        _ => "application/octet-stream",
    }
}

// ============================================================================
// Tests
// ============================================================================
