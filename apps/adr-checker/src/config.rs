//! Configuration discovery and effective settings resolution.
//!
//! adr-checker reads `.adr-checker.json`, `adr-checker.toml` or
//! `adr-checker.yaml|yml` from the repository root (or closest ancestor)
//! and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `adrDir`: `docs/adr`
//! - `sourceDir`: `src`
//! - `languages.javascript`: `.js .jsx .ts .tsx` with the three comment forms
//! - `outputFormat`: `text`
//! - `ignorePatterns`: `node_modules/** dist/** build/** .git/**`
//!
//! Overrides precedence: CLI > config file > defaults. A config file that
//! cannot be read or parsed is reported and replaced by the defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed in a repository root, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".adr-checker.json",
    "adr-checker.toml",
    "adr-checker.yaml",
    "adr-checker.yml",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Report format selector.
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-language section under `languages.<name>`.
pub struct LanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub comment_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Root configuration loaded from `.adr-checker.json|toml|yaml`.
///
/// Missing top-level keys fall back to their defaults; a present key
/// replaces the default wholesale.
pub struct AdrConfig {
    pub adr_dir: String,
    pub source_dir: String,
    pub output_format: OutputFormat,
    pub ignore_patterns: Vec<String>,
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl Default for AdrConfig {
    fn default() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(
            "javascript".to_string(),
            LanguageConfig {
                extensions: [".js", ".jsx", ".ts", ".tsx"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                comment_patterns: [r"// ADR-\d+", r"/\* ADR-\d+ \*/", r"\* @adr ADR-\d+"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        );
        AdrConfig {
            adr_dir: "docs/adr".to_string(),
            source_dir: "src".to_string(),
            output_format: OutputFormat::Text,
            ignore_patterns: ["node_modules/**", "dist/**", "build/**", ".git/**"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            languages,
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file actually loaded, if any.
    pub config_path: Option<PathBuf>,
    pub config: AdrConfig,
    /// Absolute ADR directory.
    pub adr_dir: PathBuf,
    /// Absolute source directory.
    pub source_dir: PathBuf,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSyntax {
    Json,
    Toml,
    Yaml,
}

fn syntax_for(path: &Path) -> ConfigSyntax {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => ConfigSyntax::Toml,
        Some("yaml") | Some("yml") => ConfigSyntax::Yaml,
        _ => ConfigSyntax::Json,
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        if find_config(cur).is_some() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start,
        }
    }
}

/// First config file present directly in `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load an `AdrConfig` from `path`, choosing the syntax by extension.
pub fn load_config(path: &Path) -> Result<AdrConfig> {
    let s = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = match syntax_for(path) {
        ConfigSyntax::Json => serde_json::from_str(&s).map_err(|e| e.to_string()),
        ConfigSyntax::Toml => toml::from_str(&s).map_err(|e| e.to_string()),
        ConfigSyntax::Yaml => serde_yaml::from_str(&s).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| Error::ConfigParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Serialize `cfg` in the syntax implied by `path`'s extension.
pub fn render_config(cfg: &AdrConfig, path: &Path) -> Result<String> {
    match syntax_for(path) {
        ConfigSyntax::Json => {
            serde_json::to_string_pretty(cfg).map_err(|e| Error::ConfigSerialize(e.to_string()))
        }
        ConfigSyntax::Toml => {
            toml::to_string_pretty(cfg).map_err(|e| Error::ConfigSerialize(e.to_string()))
        }
        ConfigSyntax::Yaml => {
            serde_yaml::to_string(cfg).map_err(|e| Error::ConfigSerialize(e.to_string()))
        }
    }
}

/// Write the default configuration to `path` and return the absolute path.
pub fn write_default_config(path: &Path) -> Result<PathBuf> {
    let body = render_config(&AdrConfig::default(), path)?;
    let full = absolutize(&std::env::current_dir().unwrap_or_default(), path);
    fs::write(&full, body).map_err(|source| Error::Write {
        path: full.clone(),
        source,
    })?;
    Ok(full)
}

fn absolutize(base: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// An explicit `cli_config` is resolved against the current directory; the
/// ADR and source directories are resolved against the detected repo root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_adr_dir: Option<&str>,
    cli_source_dir: Option<&str>,
    cli_format: Option<OutputFormat>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);

    let config_path = match cli_config {
        Some(p) => Some(absolutize(
            &std::env::current_dir().unwrap_or_default(),
            Path::new(p),
        )),
        None => find_config(&repo_root),
    };

    let (config, config_path) = match config_path {
        Some(p) => match load_config(&p) {
            Ok(cfg) => (cfg, Some(p)),
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                (AdrConfig::default(), None)
            }
        },
        None => (AdrConfig::default(), None),
    };

    let adr_dir = absolutize(
        &repo_root,
        Path::new(cli_adr_dir.unwrap_or(config.adr_dir.as_str())),
    );
    let source_dir = absolutize(
        &repo_root,
        Path::new(cli_source_dir.unwrap_or(config.source_dir.as_str())),
    );
    let output_format = cli_format.unwrap_or(config.output_format);

    Effective {
        repo_root,
        config_path,
        config,
        adr_dir,
        source_dir,
        output_format,
    }
}
