use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use imageapi::utils::is_http_url;
use imageapi::{download_to_file, generate_image_url, ImageClient};
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::PROMPT_PREVIEW_CHARS;
use crate::error::{HeroImageError, Result};
use crate::fs_utils::{duplicate_file_names, ensure_output_dir, output_path, sanitize_file_name};
use crate::models::ImageSpec;

/// Turns image specs into files under one output directory.
#[derive(Debug)]
pub struct HeroImageGenerator {
    client: ImageClient,
    output_dir: PathBuf,
    pause: Duration,
}

impl HeroImageGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            client: ImageClient::new(&config.api_key, &config.endpoint, &config.model),
            output_dir: config.output_dir.clone(),
            pause: config.pause,
        }
    }

    /// Asks the generation API for one image and returns its temporary URL.
    pub async fn generate(&self, spec: &ImageSpec) -> Result<String> {
        info!("Generating image for: {}", spec.blog_post);

        generate_image_url(&self.client, &spec.prompt)
            .await
            .map_err(|source| HeroImageError::Generation {
                blog_post: spec.blog_post.clone(),
                source,
            })
    }

    /// Saves the image at `image_url` as `<output_dir>/<filename>`, creating
    /// the directory first and replacing any existing file. `filename` must be
    /// a plain name; anything that could leave `output_dir` is refused.
    pub async fn download(&self, image_url: &str, filename: &str) -> Result<PathBuf> {
        if sanitize_file_name(filename).as_deref() != Some(filename) {
            return Err(HeroImageError::Download {
                filename: filename.to_string(),
                source: anyhow!("refusing to write outside the output directory"),
            });
        }

        if !is_http_url(image_url) {
            return Err(HeroImageError::Download {
                filename: filename.to_string(),
                source: anyhow!("not an http(s) URL: {image_url}"),
            });
        }

        let dir = ensure_output_dir(&self.output_dir).await?;
        let target = output_path(&dir, filename);

        let saved = download_to_file(self.client.http(), image_url, &target)
            .await
            .map_err(|source| HeroImageError::Download {
                filename: filename.to_string(),
                source,
            })?;

        info!("✅ Saved: {}", filename);
        Ok(saved)
    }
}

/// Processes `specs` strictly in order, one at a time, pausing between
/// items. The first failure aborts the remaining list.
pub async fn generate_all_images(
    generator: &HeroImageGenerator,
    specs: &[ImageSpec],
) -> Result<Vec<PathBuf>> {
    info!("🎨 Starting hero image generation...");

    let duplicates = duplicate_file_names(specs);
    if !duplicates.is_empty() {
        debug!(?duplicates, "spec list repeats filenames; later entries overwrite earlier ones");
    }

    let mut saved_paths = Vec::with_capacity(specs.len());

    for spec in specs {
        info!("📝 Prompt: {}", spec.prompt_preview(PROMPT_PREVIEW_CHARS));

        let image_url = generator.generate(spec).await?;
        info!("🖼️  Generated image URL: {}", image_url);

        let saved = generator.download(&image_url, &spec.filename).await?;
        saved_paths.push(saved);

        tokio::time::sleep(generator.pause).await;
    }

    info!("🎉 All hero images generated successfully!");
    for spec in specs {
        info!("  ✅ {}", output_path(&generator.output_dir, &spec.filename).display());
    }

    Ok(saved_paths)
}
