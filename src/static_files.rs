//! Static asset resolver
//!
//! Serves the browser bundle out of a fixed asset root. A miss of any
//! kind (unknown file, path escaping the root, read error) is a normal
//! outcome here, reported as `None` so dispatch falls through to the
//! API router instead of aborting the request.

use crate::http::mime;
use crate::logger;
use std::path::PathBuf;
use tokio::fs;

/// Asset root relative to the working directory.
pub const DEFAULT_ASSET_ROOT: &str = "public";

const INDEX_FILE: &str = "index.html";

/// Resolver over a fixed asset root directory.
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a request path to file bytes and a content type.
    ///
    /// Directory-style paths (and `/`) fall back to `index.html` within
    /// that directory. Resolution never errors: any failure is `None`.
    pub async fn resolve(&self, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
        let relative = request_path.trim_start_matches('/');
        let mut file_path = self.root.join(relative);

        let root_canonical = match self.root.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Asset root not found or inaccessible '{}': {e}",
                    self.root.display()
                ));
                return None;
            }
        };

        if file_path.is_dir() || relative.is_empty() || relative.ends_with('/') {
            file_path = file_path.join(INDEX_FILE);
        }

        // File not found is common here, not worth a warning
        let file_canonical = file_path.canonicalize().ok()?;
        if !file_canonical.starts_with(&root_canonical) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {request_path} -> {}",
                file_canonical.display()
            ));
            return None;
        }

        let content = match fs::read(&file_canonical).await {
            Ok(c) => c,
            Err(e) => {
                logger::log_warning(&format!(
                    "Failed to read file '{}': {e}",
                    file_canonical.display()
                ));
                return None;
            }
        };

        let content_type =
            mime::get_content_type(file_canonical.extension().and_then(|e| e.to_str()));

        Some((content, content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn asset_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("index.html"), "<html>game</html>").unwrap();
        std_fs::create_dir(dir.path().join("assets")).unwrap();
        std_fs::write(dir.path().join("assets/app.js"), "console.log('hi')").unwrap();
        std_fs::write(dir.path().join("assets/index.html"), "<html>assets</html>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_resolves_file_with_content_type() {
        let dir = asset_fixture();
        let assets = StaticAssets::new(dir.path());

        let (content, content_type) = assets.resolve("/assets/app.js").await.unwrap();
        assert_eq!(content, b"console.log('hi')");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_root_falls_back_to_index() {
        let dir = asset_fixture();
        let assets = StaticAssets::new(dir.path());

        let (content, content_type) = assets.resolve("/").await.unwrap();
        assert_eq!(content, b"<html>game</html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_directory_falls_back_to_index() {
        let dir = asset_fixture();
        let assets = StaticAssets::new(dir.path());

        let (content, _) = assets.resolve("/assets").await.unwrap();
        assert_eq!(content, b"<html>assets</html>");
        let (content, _) = assets.resolve("/assets/").await.unwrap();
        assert_eq!(content, b"<html>assets</html>");
    }

    #[tokio::test]
    async fn test_missing_file_declines() {
        let dir = asset_fixture();
        let assets = StaticAssets::new(dir.path());

        assert!(assets.resolve("/nope.html").await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_declines() {
        // fixture's index.html sits one level above the root and must stay unreachable
        let dir = asset_fixture();
        let root = dir.path().join("sub");
        std_fs::create_dir(&root).unwrap();
        std_fs::write(root.join("index.html"), "ok").unwrap();
        let assets = StaticAssets::new(&root);

        assert!(assets.resolve("/../index.html").await.is_none());
        assert!(assets.resolve("/../../etc/passwd").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_root_declines() {
        let assets = StaticAssets::new("/definitely/not/here");
        assert!(assets.resolve("/index.html").await.is_none());
    }
}
