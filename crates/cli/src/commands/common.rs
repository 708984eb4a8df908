use anyhow::Result;
use graphql_usage_config::{find_config, load_config, ProjectConfig};
use graphql_usage_linter::LintConfig;
use std::path::PathBuf;

/// Configuration shared by commands that lint a project.
pub struct CommandContext {
    pub config: ProjectConfig,
    /// Directory include/exclude patterns are relative to
    pub root: PathBuf,
    pub lint_config: LintConfig,
}

impl CommandContext {
    /// Load the config from `config_path`, or search upwards from the
    /// current directory. A project without a config file uses defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config_path = config_path.or_else(|| find_config(&cwd));

        let (config, root) = match config_path {
            Some(path) => {
                let config = load_config(&path)?;
                let root = path.parent().map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
                (config, root)
            }
            None => {
                tracing::debug!("No config file, using defaults");
                (ProjectConfig::default(), cwd)
            }
        };

        let lint_config = LintConfig::from_value(config.lint.as_ref())?;

        Ok(Self {
            config,
            root,
            lint_config,
        })
    }
}
