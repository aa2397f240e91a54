use crate::utils::{Logger, PackwrightError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by `Mode::from_env`
pub const MODE_ENV_VAR: &str = "BUILD_ENV";

/// Legacy variable honored for parity with Node tooling
pub const MODE_ENV_VAR_FALLBACK: &str = "NODE_ENV";

/// Build mode driving every other configuration decision.
///
/// Resolved once per invocation and threaded explicitly through the
/// resolvers; nothing below this type reads process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn is_dev(self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn is_prod(self) -> bool {
        matches!(self, Mode::Production)
    }

    /// Resolve the mode from the process environment.
    ///
    /// Only the exact string `development` selects development; absence
    /// means production. Any other value also resolves to production, with
    /// a warning, so unattended builds never fail on a typo in CI.
    pub fn from_env() -> Self {
        let value = std::env::var(MODE_ENV_VAR)
            .or_else(|_| std::env::var(MODE_ENV_VAR_FALLBACK));
        match value {
            Ok(v) if v == "development" => Mode::Development,
            Ok(v) if v == "production" => Mode::Production,
            Ok(other) => {
                Logger::unrecognized_mode(&other);
                Mode::Production
            }
            Err(_) => Mode::Production,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Strict parser used for explicitly typed values (CLI flags). Unlike
/// `from_env`, garbage is rejected instead of coerced.
impl FromStr for Mode {
    type Err = PackwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(PackwrightError::unknown_mode(other)),
        }
    }
}
