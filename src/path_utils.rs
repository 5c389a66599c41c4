use std::path::Path;

/// Normalize a filesystem path relative to `root` into the internal form.
///
/// Returns `None` when `path` does not live under `root`.
#[must_use]
pub fn relative_slash(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    contained_slash(&rel.to_string_lossy())
}

/// Normalize a relative path to the internal form: forward slashes, no empty
/// or `.` segments, `..` resolved lexically.
///
/// Returns `None` when the path climbs above its starting directory. The
/// starting directory itself is `"."`.
///
/// # Examples
///
/// - `"src\\main.go"` becomes `"src/main.go"`
/// - `"./cmd//tool/main.go"` becomes `"cmd/tool/main.go"`
#[must_use]
pub fn contained_slash(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        Some(".".to_string())
    } else {
        Some(segments.join("/"))
    }
}

/// First segment of a normalized path (`"vendor/x/y.go"` -> `"vendor"`).
#[must_use]
pub fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or_default()
}

/// Containing directory of a normalized file path. Files at the root map to `"."`.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => ".",
        Some(pos) => &path[..pos],
    }
}
