//! Tree renderer: depth-first directory traversal with box-drawing connectors.

use std::fs;
use std::path::Path;

use crate::exclude::Exclusions;

/// First line of every render, tree body or not.
const HEADER: &str = "Directory structure:\n";

/// Inline marker for a directory whose contents could not be listed.
const ACCESS_ERROR: &str = "[Error accessing directory]";

/// Error from the strict render variant.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Render the tree rooted at `root_path`, omitting entries whose base name
/// is in `exclusions`.
///
/// Total: never panics and never returns an error. A root that does not
/// name a directory yields the header line alone, and a directory whose
/// contents cannot be listed gets a single `[Error accessing directory]`
/// line in place of its children while the rest of the tree renders
/// normally.
pub fn render(root_path: impl AsRef<Path>, exclusions: &Exclusions) -> String {
    let root = root_path.as_ref();
    let mut out = String::from(HEADER);

    if !root.is_dir() {
        log::debug!(
            "Root {} is not a directory; rendering header only",
            root.display()
        );
        return out;
    }

    out.push_str("└── ");
    out.push_str(&root_label(root));
    out.push_str("/\n");

    // Items directly inside the root sit one level deep.
    let prefix = "    ";
    match list_children(root, exclusions) {
        Ok(children) => {
            let last = children.len().saturating_sub(1);
            for (i, name) in children.iter().enumerate() {
                render_entry(&root.join(name), name, prefix, i == last, exclusions, &mut out);
            }
        }
        Err(e) => {
            log::warn!("Cannot list {}: {}", root.display(), e);
            push_error_line(&mut out, prefix);
        }
    }
    out
}

/// Strict variant of [`render`]: a root that does not name a directory is
/// reported as an error instead of degrading to a header-only string.
pub fn try_render(
    root_path: impl AsRef<Path>,
    exclusions: &Exclusions,
) -> Result<String, TreeError> {
    let root = root_path.as_ref();
    if !root.is_dir() {
        return Err(TreeError::NotADirectory(root.display().to_string()));
    }
    Ok(render(root, exclusions))
}

/// Render one entry (and, for directories, its subtree) into `out`.
///
/// `prefix` is the accumulated connector padding for ancestor levels;
/// `is_last` selects the pointer glyph and whether descendants get a
/// continuation bar or blank padding.
fn render_entry(
    path: &Path,
    name: &str,
    prefix: &str,
    is_last: bool,
    exclusions: &Exclusions,
    out: &mut String,
) {
    let pointer = if is_last { "└── " } else { "├── " };

    if path.is_dir() {
        // Callers filter before recursing, but never descend into an
        // excluded directory this is invoked on directly.
        if exclusions.contains(name) {
            return;
        }

        out.push_str(prefix);
        out.push_str(pointer);
        out.push_str(name);
        out.push_str("/\n");

        let next_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        match list_children(path, exclusions) {
            Ok(children) => {
                let last = children.len().saturating_sub(1);
                for (i, child) in children.iter().enumerate() {
                    render_entry(
                        &path.join(child),
                        child,
                        &next_prefix,
                        i == last,
                        exclusions,
                        out,
                    );
                }
            }
            Err(e) => {
                log::warn!("Cannot list {}: {}", path.display(), e);
                push_error_line(out, &next_prefix);
            }
        }
    } else {
        // File or otherwise unreadable node: one line, no trailing slash.
        out.push_str(prefix);
        out.push_str(pointer);
        out.push_str(name);
        out.push('\n');
    }
}

/// Immediate child names of `dir`, excluded names removed, sorted ascending
/// by base name (byte order, case-sensitive).
fn list_children(dir: &Path, exclusions: &Exclusions) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !exclusions.contains(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Base name of the absolute form of the root, so `render(".")` shows the
/// directory's real name rather than `.`.
fn root_label(root: &Path) -> String {
    let abs = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    abs.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn push_error_line(out: &mut String, prefix: &str) {
    out.push_str(prefix);
    out.push_str("    ");
    out.push_str(ACCESS_ERROR);
    out.push('\n');
}
