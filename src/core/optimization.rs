use super::Mode;
use serde::{Deserialize, Serialize};

/// Which chunks participate in dependency splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    All,
    #[allow(dead_code)] // Engine supports async-only splitting; unused by default policy
    Async,
    #[allow(dead_code)]
    Initial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunks {
    pub chunks: ChunkScope,
}

/// Size-reducing post-processors attached to the emit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimizer {
    StyleMinifier,
    ScriptMinifier,
}

/// Optimization section of the assembled configuration.
///
/// Shared-dependency splitting is always on; minification is attached only
/// in production so development output stays readable under a debugger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    pub split_chunks: SplitChunks,
    pub minimizers: Vec<Minimizer>,
}

impl OptimizationPolicy {
    pub fn for_mode(mode: Mode) -> Self {
        let minimizers = if mode.is_prod() {
            vec![Minimizer::StyleMinifier, Minimizer::ScriptMinifier]
        } else {
            Vec::new()
        };

        Self {
            split_chunks: SplitChunks {
                chunks: ChunkScope::All,
            },
            minimizers,
        }
    }
}
