use crate::{ConfigError, ProjectConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".graphql-usagerc.yml",
    ".graphql-usagerc.yaml",
    ".graphql-usagerc.json",
    "graphql-usage.config.json",
];

/// Find a config file by walking up the directory tree from `start_dir`.
#[must_use]
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::debug!(path = %config_path.display(), checked_dirs, "Found config file");
                return Some(config_path);
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            return None;
        }
    }
}

/// Load a config from `path`, detecting the format from the extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string. The path is used for error messages and
/// format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<ProjectConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;
    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<ProjectConfig> {
    if contents.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<ProjectConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

fn validate_config(config: &ProjectConfig, path: &Path) -> Result<()> {
    for pattern in config.expanded_patterns() {
        if pattern.is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "empty glob pattern".to_string(),
            });
        }
        if let Err(e) = glob::Pattern::new(&pattern) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("invalid glob pattern '{pattern}': {e}"),
            });
        }
    }

    if let Some(lint) = &config.lint {
        if !lint.is_object() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "'lint' must be a map of rule names to severities".to_string(),
            });
        }
    }

    Ok(())
}
