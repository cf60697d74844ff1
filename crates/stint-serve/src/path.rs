use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Resolve a percent-decoded request path against the serving root.
///
/// The relative path is normalized lexically with a component stack: `.`
/// segments drop out, `..` pops, and popping past the start means the
/// request escapes the root. Root-relative and prefixed components are
/// rejected outright. Returns `None` for any escape, and the caller must
/// answer 403 without touching the filesystem.
///
/// `/` (and an empty path) map to `index.html`.
pub fn resolve_request_path(root: &Path, decoded: &str) -> Option<PathBuf> {
    let rel = decoded.trim_start_matches('/');
    if rel.is_empty() {
        return Some(root.join("index.html"));
    }

    let mut parts: Vec<&OsStr> = Vec::new();
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    let mut resolved = root.to_path_buf();
    for part in parts {
        resolved.push(part);
    }
    Some(resolved)
}
