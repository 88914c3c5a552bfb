//! Maps request URIs onto files under the document root.
//!
//! Resolution is purely lexical: `.` and `..` are collapsed without touching
//! the filesystem, and the result must stay below the normalized root. Paths
//! are compared component by component, so a sibling directory that merely
//! shares a name prefix with the root (`www` vs `wwwEvil`) is outside it.

use std::io;
use std::path::{Component, Path, PathBuf};

/// File served for the bare "/" URI.
pub const INDEX_FILE: &str = "index.html";

/// A request URI mapped onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub inside_root: bool,
}

/// Outcome of looking a URI up on disk.
#[derive(Debug)]
pub enum Lookup {
    /// A regular file inside the root.
    File(PathBuf),
    /// The path resolves outside the root.
    Forbidden(PathBuf),
    /// Nothing, or something other than a regular file, at the path.
    NotFound(PathBuf),
    /// A directory on the way to the path could not be searched.
    Error(PathBuf, io::Error),
}

/// Resolves `uri` against `root` without touching the filesystem.
///
/// An unset URI is treated as "/". One leading and one trailing slash are
/// stripped; an empty remainder names the index file.
pub fn resolve(root: &Path, uri: Option<&str>) -> ResolvedTarget {
    let uri = uri.unwrap_or("/");
    let filename = uri.strip_prefix('/').unwrap_or(uri);
    let filename = filename.strip_suffix('/').unwrap_or(filename);
    let filename = if filename.is_empty() { INDEX_FILE } else { filename };

    let root = normalize(&absolute(root));
    let path = normalize(&root.join(filename));
    let inside_root = path.starts_with(&root);

    ResolvedTarget { path, inside_root }
}

/// Resolves `uri` and classifies what lives at the resulting path.
///
/// Paths outside the root are never inspected.
pub async fn locate(root: &Path, uri: Option<&str>) -> Lookup {
    let target = resolve(root, uri);
    if !target.inside_root {
        return Lookup::Forbidden(target.path);
    }

    match tokio::fs::metadata(&target.path).await {
        Ok(meta) if meta.is_file() => Lookup::File(target.path),
        Ok(_) => Lookup::NotFound(target.path),
        // Names that cannot exist (NUL bytes, ENAMETOOLONG, ENOTDIR) are
        // simply absent; only an unreadable directory is a server fault.
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Lookup::Error(target.path, e),
        Err(_) => Lookup::NotFound(target.path),
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Collapses `.` and `..` components lexically.
///
/// `..` never climbs above the filesystem root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn sibling_with_shared_prefix_is_outside() {
        let target = resolve(Path::new("/srv/www"), Some("/../wwwEvil/secret.txt"));

        assert_eq!(target.path, PathBuf::from("/srv/wwwEvil/secret.txt"));
        assert!(!target.inside_root);
    }
}
