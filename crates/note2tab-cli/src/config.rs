use anyhow::{Context, Result};
use confyg::{env, Confygery};
use note2tab_core::{Clef, RenderMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for a note2tab run.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI flags (highest priority)
/// 2. Environment variables (`NOTE2TAB_*` prefix)
/// 3. Config file (~/.config/note2tab/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clef used until `-c` is given.
    ///
    /// Can be set via:
    /// - ENV: `NOTE2TAB_CLEF`
    /// - Config: clef = "bass"
    pub clef: Clef,

    /// Start in one-line mode, as if `-l` came first.
    ///
    /// Can be set via:
    /// - ENV: `NOTE2TAB_ONE_LINE`
    /// - Config: `one_line` = true
    pub one_line: bool,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clef: Clef::Treble,
            one_line: false,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Load configuration from the default file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path` (if it exists) and the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("note2tab");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::info!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    #[must_use]
    pub const fn render_mode(&self) -> RenderMode {
        if self.one_line {
            RenderMode::OneLine
        } else {
            RenderMode::Diagram
        }
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/note2tab/config.toml
/// - macOS: ~/Library/Application Support/note2tab/config.toml
/// - Windows: %APPDATA%\note2tab\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("note2tab")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# note2tab Configuration File
#
# Priority: CLI flags > Environment variables (NOTE2TAB_*) > This file > Defaults

# Clef used until -c is given: "treble" (or "g") / "bass" (or "f")
#clef = "treble"

# Print one line per note or voicing, as if -l were always given
#one_line = false

# Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
#log_level = "warn"
"#
}

/// Print the effective configuration.
pub fn show_config(config: &Config) {
    let path = config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  clef: {}", config.clef);
    println!("  one_line: {}", config.one_line);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI flags > ENV vars (NOTE2TAB_*) > Config file > Defaults");
    println!("\nExample:\n");
    print!("{}", example_config());
}
