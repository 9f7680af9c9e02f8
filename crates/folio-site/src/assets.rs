//! Static asset copying.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Asset directories copied from the static root, in copy order.
pub const ASSET_CATEGORIES: [&str; 3] = ["css", "js", "images"];

/// Errors that can occur while copying assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk static directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Copy every asset category present under `static_dir` into `output_dir`.
///
/// Each copied category replaces any existing directory of the same name in
/// the output. Returns the categories that were copied. A missing
/// `static_dir` is logged and copies nothing.
pub fn copy_assets(static_dir: &Path, output_dir: &Path) -> Result<Vec<&'static str>, AssetError> {
    if !static_dir.is_dir() {
        tracing::warn!("Static directory not found: {}", static_dir.display());
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();

    for category in ASSET_CATEGORIES {
        let src = static_dir.join(category);
        if !src.is_dir() {
            tracing::debug!("No {}/ in static directory, skipping", category);
            continue;
        }

        let dst = output_dir.join(category);
        if dst.exists() {
            fs::remove_dir_all(&dst).map_err(|e| AssetError::Remove {
                path: dst.clone(),
                source: e,
            })?;
        }

        let files = copy_dir_recursive(&src, &dst)?;
        tracing::info!("Copied {}/ to output ({} files)", category, files);
        copied.push(category);
    }

    Ok(copied)
}

/// Recursively copy `src` to `dst`, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    let mut files = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| AssetError::Copy {
                path: target.clone(),
                source: e,
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| AssetError::Copy {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            files += 1;
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn copies_present_categories_recursively() {
        let temp = tempdir().unwrap();
        let static_dir = temp.path().join("static");
        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();

        write(&static_dir.join("css/style.css"), b"body { margin: 0; }");
        write(&static_dir.join("images/gallery/photo.png"), &[0x89, 0x50, 0x4e, 0x47, 0x00]);

        let copied = copy_assets(&static_dir, &out).unwrap();

        assert_eq!(copied, vec!["css", "images"]);
        assert_eq!(
            fs::read(out.join("css/style.css")).unwrap(),
            b"body { margin: 0; }"
        );
        assert_eq!(
            fs::read(out.join("images/gallery/photo.png")).unwrap(),
            vec![0x89, 0x50, 0x4e, 0x47, 0x00]
        );
        assert!(!out.join("js").exists());
    }

    #[test]
    fn replaces_existing_destination() {
        let temp = tempdir().unwrap();
        let static_dir = temp.path().join("static");
        let out = temp.path().join("out");

        write(&static_dir.join("js/gallery.js"), b"new");
        write(&out.join("js/stale.js"), b"old");

        copy_assets(&static_dir, &out).unwrap();

        assert!(!out.join("js/stale.js").exists());
        assert_eq!(fs::read(out.join("js/gallery.js")).unwrap(), b"new");
    }

    #[test]
    fn missing_static_dir_copies_nothing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let copied = copy_assets(&temp.path().join("static"), &out).unwrap();

        assert!(copied.is_empty());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}
