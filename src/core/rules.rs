use super::{AssetKind, Mode, NamingPolicy};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// File-extension match pattern for a transformation rule.
///
/// Stored as the regex source so the rule table stays a plain serializable
/// value; compilation is cached process-wide since the table is tiny and
/// static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchPattern(String);

static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl MatchPattern {
    pub fn new(source: &str) -> Self {
        Self(source.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Match a path against the pattern. Patterns in the static table are
    /// known-valid; an invalid pattern (possible after deserializing a
    /// hand-edited config) simply never matches.
    pub fn is_match(&self, path: &str) -> bool {
        let mut cache = PATTERN_CACHE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !cache.contains_key(&self.0) {
            match Regex::new(&self.0) {
                Ok(re) => {
                    cache.insert(self.0.clone(), re);
                }
                Err(_) => return false,
            }
        }
        cache[&self.0].is_match(path)
    }
}

/// Processing steps applied to matched files, first-listed-last-applied
/// (the extractor consumes what the parser below it produced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum Loader {
    /// Parse markup and resolve referenced assets
    MarkupLoader,
    /// Pull parsed styles out into standalone stylesheet files
    StyleExtractor { hot_reload: bool },
    /// Resolve imports/urls inside stylesheets
    CssParser,
    /// Compile the indented and braced style dialects down to plain CSS
    SassPreprocessor,
    /// Transpile scripts for the configured browser targets
    ScriptTranspiler,
}

/// What happens to a matched file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RulePipeline {
    /// Ordered loader chain
    Loaders(Vec<Loader>),
    /// Emit the file as-is under the output directory
    AssetResource {
        /// Overrides the output section's global asset pattern
        filename: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    pub test: MatchPattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<MatchPattern>,
    pub pipeline: RulePipeline,
}

impl TransformRule {
    fn loaders(test: &str, loaders: Vec<Loader>) -> Self {
        Self {
            test: MatchPattern::new(test),
            exclude: None,
            pipeline: RulePipeline::Loaders(loaders),
        }
    }

    fn asset(test: &str, filename: Option<String>) -> Self {
        Self {
            test: MatchPattern::new(test),
            exclude: None,
            pipeline: RulePipeline::AssetResource { filename },
        }
    }
}

/// The static rule table. Membership and order never depend on the mode;
/// the only mode-sensitive detail is the style extractor's hot-reload flag.
pub fn resolve_transformation_rules(mode: Mode, naming: &NamingPolicy) -> Vec<TransformRule> {
    let extractor = Loader::StyleExtractor {
        hot_reload: mode.is_dev(),
    };

    let mut script_rule = TransformRule::loaders(r"\.js$", vec![Loader::ScriptTranspiler]);
    script_rule.exclude = Some(MatchPattern::new("node_modules"));

    vec![
        TransformRule::loaders(r"\.html$", vec![Loader::MarkupLoader]),
        TransformRule::loaders(r"\.css$", vec![extractor.clone(), Loader::CssParser]),
        TransformRule::loaders(
            r"\.s[ac]ss$",
            vec![extractor, Loader::CssParser, Loader::SassPreprocessor],
        ),
        script_rule,
        TransformRule::asset(r"\.(gif|png|jpe?g|svg)$", None),
        TransformRule::asset(
            r"\.woff2$",
            Some(naming.asset_filename(AssetKind::Font)),
        ),
    ]
}
