use super::Mode;
use serde::{Deserialize, Serialize};

/// Kinds of emitted assets, each with its own output subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Script,
    Style,
    Image,
    Font,
}

impl AssetKind {
    pub fn subdir(self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Style => "css",
            AssetKind::Image => "img",
            AssetKind::Font => "fonts",
        }
    }
}

/// Output naming policy: stable names in development, content-fingerprinted
/// names in production so emitted files can be cached forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    pub fingerprint: bool,
}

impl NamingPolicy {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            fingerprint: mode.is_prod(),
        }
    }

    /// Filename pattern for a bare extension (or an `[ext]`-style
    /// placeholder). Pure and total: the same inputs always produce the
    /// same pattern.
    pub fn filename(&self, ext: &str) -> String {
        if self.fingerprint {
            format!("[name].[contenthash].{}", ext)
        } else {
            format!("[name].{}", ext)
        }
    }

    /// Full per-kind pattern including the output subdirectory.
    ///
    /// Fonts keep the `[query]` suffix: font URLs carry cache-busting query
    /// strings that must survive into the emitted filename.
    pub fn asset_filename(&self, kind: AssetKind) -> String {
        let pattern = match kind {
            AssetKind::Script => self.filename("js"),
            AssetKind::Style => self.filename("css"),
            AssetKind::Image => self.filename("[ext]"),
            AssetKind::Font => self.filename("[ext][query]"),
        };
        format!("{}/{}", kind.subdir(), pattern)
    }
}
