//! Configuration for wordhunt.
//!
//! Settings come from up to four layers, merged with `figment` from lowest
//! to highest precedence:
//!
//! 1. `~/.config/wordhunt/config.<ext>` (user config)
//! 2. `.wordhunt.<ext>` then `wordhunt.<ext>` from the nearest directory
//!    at or above the search root that contains one (project config)
//! 3. files passed to [`ConfigLoader::with_file`] (the `--config` flag)
//! 4. `WORDHUNT_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Within one directory every
//! matching file is merged, in that extension order.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wordhunt_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("segmenter: {}", config.segmenter);
//! if let Some(file) = sources.primary_file() {
//!     println!("from: {file}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::input::DEFAULT_MAX_INPUT_BYTES;
use crate::render::CountMode;
use crate::segment::SegmenterKind;

/// The configuration for wordhunt.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and `WORDHUNT_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Segmentation strategy: `boundary` (default) or `regex`.
    pub segmenter: SegmenterKind,
    /// Which count the text report leads with: `occurrences` or `sentences`.
    pub count_mode: CountMode,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// The effective input limit after applying `disable_input_limit`.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The layer a config file was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    /// The per-user config directory.
    User,
    /// Discovered by walking up from the search root.
    Project,
    /// Passed in explicitly.
    Explicit,
}

/// One config file that contributed to a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    /// Which layer the file belongs to.
    pub origin: ConfigOrigin,
    /// Where it was found.
    pub path: Utf8PathBuf,
}

/// The config files behind a loaded [`Config`], lowest precedence first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigSources {
    files: Vec<ConfigFile>,
}

impl ConfigSources {
    /// The file with the highest precedence, if any was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files.last().map(|file| file.path.as_path())
    }

    /// All loaded files, lowest precedence first.
    pub fn files(&self) -> &[ConfigFile] {
        &self.files
    }

    /// Paths loaded from one layer.
    pub fn paths(&self, origin: ConfigOrigin) -> impl Iterator<Item = &Utf8Path> {
        self.files
            .iter()
            .filter(move |file| file.origin == origin)
            .map(|file| file.path.as_path())
    }

    /// True when only defaults and the environment were used.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn push(&mut self, origin: ConfigOrigin, path: Utf8PathBuf) {
        self.files.push(ConfigFile { origin, path });
    }
}

/// Config file extensions, lowest precedence first.
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Project config file stems, lowest precedence first.
const PROJECT_STEMS: [&str; 2] = [".wordhunt", "wordhunt"];

/// Application name for the per-user config directory.
const APP_NAME: &str = "wordhunt";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "WORDHUNT_";

/// Discovers config files and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    stop_at: Option<String>,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that reads user config and stops the project walk at `.git`.
    pub fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            stop_at: Some(".git".to_string()),
            files: Vec::new(),
        }
    }

    /// Look for project config starting at `path` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_from = Some(path.as_ref().to_path_buf());
        self
    }

    /// Whether to read `~/.config/wordhunt/config.<ext>`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the project walk above a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.stop_at = Some(marker.into());
        self
    }

    /// Walk all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.stop_at = None;
        self
    }

    /// Add a file that overrides everything discovered. Later files win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge defaults, discovered files, explicit files and the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Deserialize`] if a file cannot be parsed or a value
    /// has the wrong type.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        extract(self.discover())
    }

    /// Like [`load`](Self::load), but fail if no config file exists.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when discovery finds nothing, otherwise
    /// as [`load`](Self::load).
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        if sources.is_empty() {
            return Err(ConfigError::NotFound);
        }
        extract(sources)
    }

    fn discover(&self) -> ConfigSources {
        let mut sources = ConfigSources::default();

        if self.user_config
            && let Some(path) = find_user_config()
        {
            sources.push(ConfigOrigin::User, path);
        }
        if let Some(ref root) = self.search_from {
            for path in self.project_configs(root) {
                sources.push(ConfigOrigin::Project, path);
            }
        }
        for path in &self.files {
            sources.push(ConfigOrigin::Explicit, path.clone());
        }

        tracing::debug!(files = sources.files.len(), "config files discovered");
        sources
    }

    /// Config files of the nearest directory at or above `start` that has any.
    fn project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = configs_in(dir);
            if !found.is_empty() {
                return found;
            }
            // The marker directory itself is searched, its parents are not.
            if dir != start
                && let Some(ref marker) = self.stop_at
                && dir.join(marker).exists()
            {
                break;
            }
        }
        Vec::new()
    }
}

fn configs_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    PROJECT_STEMS
        .iter()
        .flat_map(|stem| {
            CONFIG_EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{stem}.{ext}")))
        })
        .filter(|path| path.is_file())
        .collect()
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn extract(sources: ConfigSources) -> ConfigResult<(Config, ConfigSources)> {
    let figment = sources
        .files
        .iter()
        .fold(
            Figment::from(Serialized::defaults(Config::default())),
            |figment, file| merge_file(figment, &file.path),
        )
        // WORDHUNT_SEGMENTER=regex, WORDHUNT_MAX_INPUT_BYTES=1024, ...
        .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

    let config: Config = figment
        .extract()
        .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
    tracing::debug!(
        log_level = config.log_level.as_str(),
        segmenter = config.segmenter.as_str(),
        count_mode = config.count_mode.as_str(),
        "configuration loaded"
    );
    Ok((config, sources))
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// The per-user config directory: `~/.config/wordhunt/` on Linux,
/// `~/Library/Application Support/wordhunt/` on macOS.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
