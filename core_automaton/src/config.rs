use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::resources::SimulationConfig;

/// Environment variable naming a JSON file with a [`SimulationConfig`].
pub const CONFIG_PATH_ENV: &str = "AUTOMATON_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read simulation config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Load the config named by [`CONFIG_PATH_ENV`], or the defaults when the
/// variable is unset or the file is unusable.
pub fn load_config_from_env() -> SimulationConfig {
    let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) else {
        tracing::info!(
            target: "cell_automaton::config",
            "simulation_config.loaded=default"
        );
        return SimulationConfig::default();
    };

    match SimulationConfig::from_file(&path) {
        Ok(config) => {
            tracing::info!(
                target: "cell_automaton::config",
                path = %path.display(),
                rows = config.rows,
                columns = config.columns,
                preset = config.preset.label(),
                "simulation_config.loaded=file"
            );
            config
        }
        Err(err) => {
            tracing::warn!(
                target: "cell_automaton::config",
                path = %path.display(),
                error = %err,
                "simulation_config.load_failed"
            );
            SimulationConfig::default()
        }
    }
}
