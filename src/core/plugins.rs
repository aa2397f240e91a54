use super::{AssetKind, Mode, NamingPolicy, ProjectPaths};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Post-processing steps, identified independently of their configuration.
///
/// Membership and order are decided on these tags alone so the selection
/// logic stays testable without materializing descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    CleanOutputDir,
    HtmlTemplate,
    CssExtract,
    CopyAssets,
    ImageOptimizer,
}

/// Ordered plugin roster for a mode.
///
/// Cleaning always comes first: it must run before any plugin that emits
/// files, or stale artifacts from the previous build survive. Production
/// appends image optimization as the final step so it sees every emitted
/// image.
pub fn plugin_roster(mode: Mode) -> Vec<PluginKind> {
    let mut roster = vec![
        PluginKind::CleanOutputDir,
        PluginKind::HtmlTemplate,
        PluginKind::CssExtract,
        PluginKind::CopyAssets,
    ];

    if mode.is_prod() {
        roster.push(PluginKind::ImageOptimizer);
    }

    roster
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlMinify {
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Lossless raster settings for the image-optimization step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LosslessOptions {
    pub gif: GifOptions,
    pub jpeg: JpegOptions,
    pub png: PngOptions,
    pub svg: SvgPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifOptions {
    pub interlaced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JpegOptions {
    pub progressive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PngOptions {
    pub optimization_level: u8,
}

/// Vector-graphics policy. The viewbox must survive optimization or scaled
/// SVGs lose their aspect ratio; the xmlns attribute is re-added so
/// optimized files remain valid standalone documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgPolicy {
    pub preserve_viewbox: bool,
    pub add_xmlns: bool,
}

impl Default for LosslessOptions {
    fn default() -> Self {
        Self {
            gif: GifOptions { interlaced: true },
            jpeg: JpegOptions { progressive: true },
            png: PngOptions {
                optimization_level: 5,
            },
            svg: SvgPolicy {
                preserve_viewbox: true,
                add_xmlns: true,
            },
        }
    }
}

/// Fully configured plugin entries, in execution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    CleanOutputDir,
    HtmlTemplate {
        template: PathBuf,
        filename: String,
        minify: HtmlMinify,
    },
    CssExtract {
        filename: String,
    },
    CopyAssets {
        patterns: Vec<CopyPattern>,
    },
    ImageOptimizer {
        lossless: LosslessOptions,
    },
}

impl PluginDescriptor {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginDescriptor::CleanOutputDir => PluginKind::CleanOutputDir,
            PluginDescriptor::HtmlTemplate { .. } => PluginKind::HtmlTemplate,
            PluginDescriptor::CssExtract { .. } => PluginKind::CssExtract,
            PluginDescriptor::CopyAssets { .. } => PluginKind::CopyAssets,
            PluginDescriptor::ImageOptimizer { .. } => PluginKind::ImageOptimizer,
        }
    }
}

/// Materialize the roster into configured descriptors.
pub fn resolve_plugin_list(
    mode: Mode,
    paths: &ProjectPaths,
    naming: &NamingPolicy,
) -> Vec<PluginDescriptor> {
    plugin_roster(mode)
        .into_iter()
        .map(|kind| materialize(kind, mode, paths, naming))
        .collect()
}

fn materialize(
    kind: PluginKind,
    mode: Mode,
    paths: &ProjectPaths,
    naming: &NamingPolicy,
) -> PluginDescriptor {
    match kind {
        PluginKind::CleanOutputDir => PluginDescriptor::CleanOutputDir,
        PluginKind::HtmlTemplate => PluginDescriptor::HtmlTemplate {
            template: paths.template.clone(),
            filename: "index.html".to_string(),
            minify: HtmlMinify {
                collapse_whitespace: mode.is_prod(),
            },
        },
        PluginKind::CssExtract => PluginDescriptor::CssExtract {
            filename: naming.asset_filename(AssetKind::Style),
        },
        PluginKind::CopyAssets => PluginDescriptor::CopyAssets {
            patterns: vec![CopyPattern {
                from: paths.assets_dir.clone(),
                to: paths.assets_out_dir(),
            }],
        },
        PluginKind::ImageOptimizer => PluginDescriptor::ImageOptimizer {
            lossless: LosslessOptions::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(roster: &[PluginKind], kind: PluginKind) -> usize {
        roster.iter().position(|k| *k == kind).unwrap()
    }

    #[test]
    fn test_roster_membership_by_mode() {
        let dev = plugin_roster(Mode::Development);
        let prod = plugin_roster(Mode::Production);
        assert_eq!(dev.len(), 4);
        assert_eq!(prod.len(), 5);
        assert!(!dev.contains(&PluginKind::ImageOptimizer));
        assert_eq!(*prod.last().unwrap(), PluginKind::ImageOptimizer);
    }

    #[test]
    fn test_clean_precedes_emitting_plugins() {
        for mode in [Mode::Development, Mode::Production] {
            let roster = plugin_roster(mode);
            let clean = position(&roster, PluginKind::CleanOutputDir);
            assert!(clean < position(&roster, PluginKind::CopyAssets));
            assert!(clean < position(&roster, PluginKind::HtmlTemplate));
            assert!(clean < position(&roster, PluginKind::CssExtract));
        }
    }

    #[test]
    fn test_html_minify_only_in_production() {
        let paths = ProjectPaths::rooted("/project");
        for (mode, expected) in [(Mode::Development, false), (Mode::Production, true)] {
            let plugins = resolve_plugin_list(mode, &paths, &NamingPolicy::for_mode(mode));
            let html = plugins
                .iter()
                .find(|p| p.kind() == PluginKind::HtmlTemplate)
                .unwrap();
            match html {
                PluginDescriptor::HtmlTemplate {
                    template, minify, ..
                } => {
                    assert_eq!(*template, paths.template);
                    assert_eq!(minify.collapse_whitespace, expected);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_css_extract_follows_naming_policy() {
        let paths = ProjectPaths::rooted("/project");
        let plugins =
            resolve_plugin_list(Mode::Production, &paths, &NamingPolicy::for_mode(Mode::Production));
        match plugins
            .iter()
            .find(|p| p.kind() == PluginKind::CssExtract)
            .unwrap()
        {
            PluginDescriptor::CssExtract { filename } => {
                assert_eq!(filename, "css/[name].[contenthash].css");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_image_optimizer_lossless_defaults() {
        let lossless = LosslessOptions::default();
        assert!(lossless.gif.interlaced);
        assert!(lossless.jpeg.progressive);
        assert_eq!(lossless.png.optimization_level, 5);
        assert!(lossless.svg.preserve_viewbox);
        assert!(lossless.svg.add_xmlns);
    }

    #[test]
    fn test_copy_patterns_mirror_assets() {
        let paths = ProjectPaths::rooted("/project");
        let plugins =
            resolve_plugin_list(Mode::Development, &paths, &NamingPolicy::for_mode(Mode::Development));
        match plugins
            .iter()
            .find(|p| p.kind() == PluginKind::CopyAssets)
            .unwrap()
        {
            PluginDescriptor::CopyAssets { patterns } => {
                assert_eq!(patterns.len(), 1);
                assert_eq!(patterns[0].from, paths.assets_dir);
                assert_eq!(patterns[0].to, paths.assets_out_dir());
            }
            _ => unreachable!(),
        }
    }
}
