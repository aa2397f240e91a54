use crate::core::{ConfigAssembler, Mode, NamingPolicy, OptimizationPolicy, PluginKind};
use crate::utils::{Logger, PackwrightError, Result, Timer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "packwright")]
#[command(about = "Packwright - declarative build configuration assembler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the configuration and emit it as JSON
    Emit {
        /// Build mode (development or production); falls back to $BUILD_ENV
        #[arg(short, long)]
        mode: Option<String>,
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Verify that the paths a configuration references actually exist
    Check {
        /// Build mode (development or production); falls back to $BUILD_ENV
        #[arg(short, long)]
        mode: Option<String>,
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Exit non-zero when any referenced path is missing
        #[arg(long)]
        strict: bool,
    },
    /// Show the resolved policies for both modes
    Info {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,
    },
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Emit { mode, root, out } => {
                self.handle_emit_command(mode.as_deref(), &root, out.as_deref())
            }
            Commands::Check { mode, root, strict } => {
                self.handle_check_command(mode.as_deref(), &root, strict)
            }
            Commands::Info { root } => self.handle_info_command(&root),
        }
    }

    /// A `--mode` flag is parsed strictly; without one the environment
    /// decides, leniently.
    fn resolve_mode(&self, flag: Option<&str>) -> Result<Mode> {
        match flag {
            Some(value) => value.parse(),
            None => Ok(Mode::from_env()),
        }
    }

    fn handle_emit_command(
        &self,
        mode: Option<&str>,
        root: &str,
        out: Option<&Path>,
    ) -> Result<()> {
        let mode = self.resolve_mode(mode)?;
        let _timer = Timer::start("emit");

        Logger::assemble_start(mode, root);

        let assembler = ConfigAssembler::new(root);
        let config = assembler.assemble(mode);
        Logger::assemble_complete(config.plugins.len(), config.rules.len());

        let json = config.to_json()?;
        match out {
            Some(path) => {
                std::fs::write(path, &json)?;
                Logger::emitted(&path.display().to_string(), json.len());
            }
            None => println!("{}", json),
        }

        Ok(())
    }

    fn handle_check_command(&self, mode: Option<&str>, root: &str, strict: bool) -> Result<()> {
        let mode = self.resolve_mode(mode)?;
        let assembler = ConfigAssembler::new(root);
        let config = assembler.assemble(mode);
        Logger::assemble_complete(config.plugins.len(), config.rules.len());

        let paths = assembler.paths();
        let probes = [
            ("markup template", paths.template.clone()),
            ("entry module", paths.entry_path()),
            ("asset directory", paths.assets_dir.clone()),
        ];

        let mut missing = Vec::new();
        for (label, path) in &probes {
            let display = path.display().to_string();
            Logger::checking_path(label, &display);
            let exists = probe_exists(path)
                .with_context(|| format!("probing {}", display))?;
            if !exists {
                Logger::check_missing(label, &display);
                missing.push(format!("{} ({})", label, display));
            }
        }

        if missing.is_empty() {
            Logger::check_passed();
            Ok(())
        } else if strict {
            Err(PackwrightError::check(format!(
                "missing referenced paths: {}",
                missing.join(", ")
            )))
        } else {
            Ok(())
        }
    }

    fn handle_info_command(&self, root: &str) -> Result<()> {
        println!("{}", "Packwright".bold());
        println!("Project root: {}", root);
        println!();

        for mode in [Mode::Development, Mode::Production] {
            let naming = NamingPolicy::for_mode(mode);
            let optimization = OptimizationPolicy::for_mode(mode);
            let roster = crate::core::plugin_roster(mode);

            println!("{}", mode.to_string().bold().underline());
            println!("  script pattern: {}", naming.filename("js").cyan());
            println!(
                "  minimizers:     {}",
                if optimization.minimizers.is_empty() {
                    "none".dimmed().to_string()
                } else {
                    format!("{:?}", optimization.minimizers).green().to_string()
                }
            );
            println!(
                "  image optimizer: {}",
                if roster.contains(&PluginKind::ImageOptimizer) {
                    "enabled".green().to_string()
                } else {
                    "disabled".dimmed().to_string()
                }
            );
            println!("  plugins: {:?}", roster);
            println!();
        }

        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Existence probe that distinguishes "not there" from "could not look"
fn probe_exists(path: &Path) -> anyhow::Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
