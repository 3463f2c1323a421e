use std::path::{Component, Path};

/// Normalize configured suffixes: trimmed, leading dots removed, empties dropped.
pub(crate) fn normalize_suffixes(suffixes: &[String]) -> Vec<String> {
    suffixes
        .iter()
        .map(|s| s.trim().trim_start_matches('.').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `path` ends in one of `suffixes`, compared ASCII case-insensitively.
pub(crate) fn has_playlist_suffix(path: &Path, suffixes: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| suffixes.iter().any(|s| s.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Registry name for `path` below `root`: the relative path with `/` separators.
///
/// Returns `None` for paths outside `root` or that are not valid UTF-8.
pub(crate) fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
