use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Filesystem layout of the project being configured.
///
/// Resolved once at assembly time and embedded read-only in the emitted
/// configuration; packwright itself never touches these paths except in the
/// advisory `check` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// Project root everything else is resolved against
    pub root: PathBuf,
    /// Source context directory handed to the engine
    pub context: PathBuf,
    /// Entry-point module, relative to the context
    pub entry: String,
    /// Output directory for emitted artifacts
    pub output: PathBuf,
    /// Markup template consumed by the template-injection plugin
    pub template: PathBuf,
    /// Static asset directory mirrored into the output
    pub assets_dir: PathBuf,
}

impl ProjectPaths {
    /// Conventional layout: sources under `src/`, artifacts under `app/`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            context: root.join("src"),
            entry: "./js/main.js".to_string(),
            output: root.join("app"),
            template: root.join("src").join("index.html"),
            assets_dir: root.join("src").join("assets"),
            root,
        }
    }

    /// Absolute path of the entry module (entry is context-relative)
    pub fn entry_path(&self) -> PathBuf {
        self.context.join(self.entry.trim_start_matches("./"))
    }

    /// Destination for copied static assets inside the output directory
    pub fn assets_out_dir(&self) -> PathBuf {
        self.output.join("assets")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
