use crate::core::Mode;
use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("packwright=info")
            .with_target(false)
            .init();
    }

    pub fn assemble_start(mode: Mode, root: &str) {
        info!("🔧 Packwright - Build Configuration Assembler");
        info!("═══════════════════════════════════════");
        info!("📁 Project root: {}", root);
        info!("🎛️  Mode: {}", mode);
    }

    pub fn assemble_complete(plugin_count: usize, rule_count: usize) {
        info!(
            "✅ Configuration assembled: {} plugins, {} rules",
            plugin_count, rule_count
        );
    }

    pub fn emitted(target: &str, bytes: usize) {
        info!("📦 Wrote {} ({} bytes)", target, bytes);
    }

    pub fn unrecognized_mode(value: &str) {
        warn!(
            "⚠️  Unrecognized build mode {:?} in environment, falling back to production",
            value
        );
    }

    pub fn checking_path(label: &str, path: &str) {
        debug!("🔍 Checking {}: {}", label, path);
    }

    pub fn check_missing(label: &str, path: &str) {
        warn!("⚠️  Missing {}: {}", label, path);
    }

    pub fn check_passed() {
        info!("✅ All referenced paths exist");
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    #[allow(dead_code)] // Kept for parity with the other level helpers
    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
