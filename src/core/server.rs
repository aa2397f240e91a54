use super::ProjectPaths;
use serde::{Deserialize, Serialize};

/// Development server settings block.
///
/// Every field is mode-independent: the block describes the dev server the
/// engine should run, and is simply ignored for production builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Serve the index page for unknown routes (single-page-app routing)
    pub spa_fallback: bool,
    /// Directory served as static content
    pub static_dir: std::path::PathBuf,
    /// Open the browser on startup
    pub open: bool,
    /// gzip responses
    pub compress: bool,
    /// Hot module reload
    pub hot: bool,
    pub port: u16,
}

pub const DEFAULT_DEV_PORT: u16 = 8080;

impl DevServerConfig {
    pub fn for_project(paths: &ProjectPaths) -> Self {
        Self {
            spa_fallback: true,
            static_dir: paths.output.clone(),
            open: true,
            compress: true,
            hot: true,
            port: DEFAULT_DEV_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_server_defaults() {
        let paths = ProjectPaths::rooted("/project");
        let server = DevServerConfig::for_project(&paths);
        assert!(server.spa_fallback);
        assert!(server.compress);
        assert!(server.hot);
        assert_eq!(server.port, 8080);
        assert_eq!(server.static_dir, paths.output);
    }
}
