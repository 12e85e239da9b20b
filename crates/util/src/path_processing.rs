use std::path::PathBuf;

use dirs_next::home_dir;

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// Normalizes a raw asset path into `/`-separated form.
///
/// Backslashes become forward slashes, `.` segments and repeated separators
/// are dropped, and leading/trailing separators are removed. Returns `None`
/// when nothing remains or when the path tries to escape its root with `..`.
pub fn normalize_asset_path(raw: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.trim().split(['/', '\\']) {
        match segment.trim() {
            "" | "." => continue,
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() { None } else { Some(segments.join("/")) }
}
