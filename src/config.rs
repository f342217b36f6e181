use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    API_KEY_ENV, DEFAULT_IMAGE_MODEL, DEFAULT_OPENAI_ENDPOINT, DEFAULT_PAUSE_MS, ENDPOINT_ENV,
    OUTPUT_DIR_ENV, PAUSE_MS_ENV, SPECS_FILE_ENV,
};
use crate::error::{HeroImageError, Result};
use crate::fs_utils::default_output_dir;

/// Settings for one run, resolved once before any request is made.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub output_dir: PathBuf,
    pub pause: Duration,
    pub specs_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = var(API_KEY_ENV).ok_or(HeroImageError::MissingCredential(API_KEY_ENV))?;

        let endpoint = var(ENDPOINT_ENV).unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string());

        let output_dir = var(OUTPUT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        let pause = match var(PAUSE_MS_ENV) {
            Some(raw) => {
                let millis = raw
                    .parse::<u64>()
                    .map_err(|err| HeroImageError::InvalidConfig {
                        name: PAUSE_MS_ENV,
                        reason: format!("'{raw}' is not a whole number of milliseconds: {err}"),
                    })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_PAUSE_MS),
        };

        Ok(Self {
            api_key,
            endpoint,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            output_dir,
            pause,
            specs_file: var(SPECS_FILE_ENV).map(PathBuf::from),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("output_dir", &self.output_dir)
            .field("pause", &self.pause)
            .field("specs_file", &self.specs_file)
            .finish_non_exhaustive()
    }
}
