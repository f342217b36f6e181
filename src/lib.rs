mod commands;
mod constants;
mod fs_utils;

pub mod config;
pub mod error;
pub mod models;
pub mod site;

use std::path::PathBuf;

pub use commands::generate::{generate_all_images, HeroImageGenerator};
pub use config::Config;
pub use constants::{
    API_KEY_ENV, DEFAULT_IMAGE_MODEL, DEFAULT_OPENAI_ENDPOINT, DEFAULT_PAUSE_MS, ENDPOINT_ENV,
    OUTPUT_DIR_ENV, OUTPUT_DIR_NAME, PAUSE_MS_ENV, SPECS_FILE_ENV,
};
pub use error::{HeroImageError, Result};
pub use fs_utils::{default_output_dir, duplicate_file_names};
pub use models::{hero_image_specs, load_specs, ImageSpec};

/// Runs a full generation pass with the configured spec list.
pub async fn run(config: Config) -> Result<Vec<PathBuf>> {
    let specs = match config.specs_file.as_deref() {
        Some(path) => load_specs(path).await?,
        None => hero_image_specs(),
    };

    let generator = HeroImageGenerator::new(&config);
    generate_all_images(&generator, &specs).await
}
