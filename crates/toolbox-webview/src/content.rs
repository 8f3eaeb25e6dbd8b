//! Local content serving via custom protocol.
//!
//! Registers a `toolbox://` custom protocol so that views can load the tool
//! pages and the launcher sidebar without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scheme registered on every view.
pub const SCHEME: &str = "toolbox";

/// Origin all content is served from.
pub const ORIGIN: &str = "toolbox://localhost";

/// Full URL for a path under the content root.
pub fn content_url(path: &str) -> String {
    format!("{ORIGIN}/{}", path.trim_start_matches('/'))
}

/// Extract the content path from a `toolbox://` request URI.
///
/// Query strings and fragments are dropped. WebView2 rewrites the scheme to
/// `http://toolbox.localhost/`, which is accepted too.
pub fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("toolbox://localhost/")
        .or_else(|| uri.strip_prefix("toolbox://localhost"))
        .or_else(|| uri.strip_prefix("http://toolbox.localhost/"))
        .or_else(|| uri.strip_prefix("toolbox:///"))
        .or_else(|| uri.strip_prefix("toolbox://"))
        .unwrap_or("");
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Serves local files from a base directory via custom protocol.
///
/// When a view requests `toolbox://localhost/Timer_New/index.html`, the
/// provider resolves it to `{base_dir}/Timer_New/index.html` and returns the
/// file contents with the matching MIME type.
pub struct ContentProvider {
    base_dir: PathBuf,
    /// In-memory assets such as the launcher sidebar.
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset. Overrides win over files on disk.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the root.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
