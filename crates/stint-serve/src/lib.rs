pub mod path;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub use path::resolve_request_path;

/// Result type for stint-serve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while running the server
#[derive(Debug)]
pub enum Error {
    /// Binding the listening socket failed
    Bind(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bind(err) => write!(f, "Failed to bind server: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Bind(err) => Some(err),
        }
    }
}

#[derive(Debug)]
struct ServeState {
    root: PathBuf,
}

/// A running static file server over one asset directory.
///
/// Meant to be started once per test worker, reused across cases, and
/// explicitly shut down at teardown, which releases the listening port.
pub struct StaticServer {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl StaticServer {
    /// Bind on 127.0.0.1 and start serving `root`. Pass port 0 to let the
    /// OS pick a free port; read it back from `local_addr()`.
    pub async fn bind(root: PathBuf, port: u16) -> Result<Self> {
        let app = build_router(root);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port)))
            .await
            .map_err(Error::Bind)?;
        let local_addr = listener.local_addr().map_err(Error::Bind)?;

        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Ok(Self {
            local_addr,
            shutdown: tx,
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, let in-flight responses complete, and
    /// release the port.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}

fn build_router(root: PathBuf) -> Router {
    let state = Arc::new(ServeState { root });
    // Every request lands in the same handler; the method is not
    // distinguished.
    Router::new().fallback(serve_request).with_state(state)
}

async fn serve_request(State(state): State<Arc<ServeState>>, uri: Uri) -> Response {
    let decoded = match urlencoding::decode(uri.path()) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Bad Request: Malformed URL").into_response();
        }
    };

    let Some(candidate) = resolve_request_path(&state.root, &decoded) else {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    match tokio::fs::read(&candidate).await {
        Ok(bytes) => file_response(&candidate, bytes),
        Err(_) => {
            // Extensionless routes fall back to `<path>.html` so a
            // single-page app's routes resolve on a static host.
            if candidate.extension().is_none() {
                let fallback = candidate.with_extension("html");
                if let Ok(bytes) = tokio::fs::read(&fallback).await {
                    return file_response(&fallback, bytes);
                }
            }
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

fn file_response(path: &Path, bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, content_type(path))], bytes).into_response()
}

/// Content type from the file extension; anything unknown is served as a
/// generic binary.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_table() {
        insta::assert_snapshot!(content_type(Path::new("index.html")), @"text/html");
        insta::assert_snapshot!(content_type(Path::new("app.js")), @"text/javascript");
        insta::assert_snapshot!(content_type(Path::new("style.css")), @"text/css");
        insta::assert_snapshot!(content_type(Path::new("data.json")), @"application/json");
        insta::assert_snapshot!(content_type(Path::new("m.wasm")), @"application/wasm");
        insta::assert_snapshot!(content_type(Path::new("favicon.ico")), @"image/x-icon");
    }

    #[test]
    fn test_unknown_extension_is_binary() {
        assert_eq!(content_type(Path::new("archive.tar")), "application/octet-stream");
        assert_eq!(content_type(Path::new("no_extension")), "application/octet-stream");
    }
}
