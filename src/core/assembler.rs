use super::{
    resolve_plugin_list, resolve_transformation_rules, AssetKind, DevServerConfig, Mode,
    NamingPolicy, OptimizationPolicy, PluginDescriptor, ProjectPaths, TransformRule,
};
use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output section: where artifacts land and how they are named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pattern for emitted script bundles
    pub filename: String,
    /// Output directory
    pub path: PathBuf,
    /// Pattern for emitted asset modules (images by default)
    pub asset_module_filename: String,
}

/// Debug-symbol generation. Source maps are only worth their weight while
/// debugging, so production disables them outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    SourceMap,
    Disabled,
}

impl Devtool {
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_dev() {
            Devtool::SourceMap
        } else {
            Devtool::Disabled
        }
    }
}

/// The complete assembled configuration, handed read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub context: PathBuf,
    pub mode: Mode,
    pub entry: String,
    pub output: OutputConfig,
    pub dev_server: DevServerConfig,
    pub optimization: OptimizationPolicy,
    pub plugins: Vec<PluginDescriptor>,
    pub devtool: Devtool,
    pub rules: Vec<TransformRule>,
}

impl BuildConfig {
    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assembles a `BuildConfig` from a project layout and a mode.
///
/// Assembly is a pure function of `(paths, mode)`: no I/O, no process
/// state, and repeated calls yield structurally identical values.
pub struct ConfigAssembler {
    paths: ProjectPaths,
}

impl ConfigAssembler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: ProjectPaths::rooted(root),
        }
    }

    pub fn with_paths(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    pub fn assemble(&self, mode: Mode) -> BuildConfig {
        let naming = NamingPolicy::for_mode(mode);

        BuildConfig {
            context: self.paths.context.clone(),
            mode,
            entry: self.paths.entry.clone(),
            output: OutputConfig {
                filename: naming.asset_filename(AssetKind::Script),
                path: self.paths.output.clone(),
                asset_module_filename: naming.asset_filename(AssetKind::Image),
            },
            dev_server: DevServerConfig::for_project(&self.paths),
            optimization: OptimizationPolicy::for_mode(mode),
            plugins: resolve_plugin_list(mode, &self.paths, &naming),
            devtool: Devtool::for_mode(mode),
            rules: resolve_transformation_rules(mode, &naming),
        }
    }
}
