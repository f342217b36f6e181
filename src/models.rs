use std::path::Path;

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tokio::fs;

use crate::error::{HeroImageError, Result};
use crate::fs_utils::sanitize_file_name;

/// One hero image to produce. `filename` is expected to be unique within a
/// list; duplicates silently overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    pub filename: String,
    pub prompt: String,
    pub blog_post: String,
}

impl ImageSpec {
    pub fn new(
        filename: impl Into<String>,
        prompt: impl Into<String>,
        blog_post: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            prompt: prompt.into(),
            blog_post: blog_post.into(),
        }
    }

    /// First `max_chars` characters of the prompt, for log lines.
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        let preview: String = self.prompt.chars().take(max_chars).collect();
        format!("{preview}...")
    }
}

/// Reads a JSON array of specs, e.g. `[{"filename": ..., "prompt": ..., "blogPost": ...}]`.
/// Filenames must be plain names: no separators, `..` or NUL.
pub async fn load_specs(path: &Path) -> Result<Vec<ImageSpec>> {
    let to_error = |source: anyhow::Error| HeroImageError::Specs {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("Unable to read spec file '{}'", path.display()))
        .map_err(to_error)?;

    let specs: Vec<ImageSpec> = serde_json::from_str(&contents)
        .with_context(|| format!("Unable to parse spec file '{}'", path.display()))
        .map_err(to_error)?;

    if let Some(bad) = specs
        .iter()
        .find(|spec| sanitize_file_name(&spec.filename).as_deref() != Some(spec.filename.as_str()))
    {
        return Err(to_error(anyhow!(
            "unsafe filename '{}' for {}",
            bad.filename,
            bad.blog_post
        )));
    }

    Ok(specs)
}

/// The built-in list of hero images for the blog.
pub fn hero_image_specs() -> Vec<ImageSpec> {
    vec![
        ImageSpec::new(
            "slime-evolution-hero.png",
            "A modern, professional illustration showing the evolution of game development. Feature multiple colorful slime enemies (green, blue, pink) with visible animation frames and physics collision boundaries. Include elements suggesting programming like code snippets, sprite sheets, and game development tools. Use a tech-focused color palette with blues and greens. Style should be clean, minimalist, and suitable for a technical blog header.",
            "Game Development - Slime Evolution",
        ),
        ImageSpec::new(
            "attack-animations-hero.png",
            "A dynamic, professional illustration depicting enemy AI and attack animations in game development. Show animated sprite sequences, collision detection systems, and attack patterns with geometric shapes representing hitboxes. Include elements like state machines, animation timelines, and game programming concepts. Use vibrant colors suggesting action and movement. Style should be technical yet engaging, perfect for a game development blog post.",
            "Attack Animations Implementation",
        ),
        ImageSpec::new(
            "adaptive-learning-hero.png",
            "A clean, educational technology illustration showing adaptive learning systems. Feature mathematical formulas, progress charts, learning paths, and student engagement metrics. Include elements like level progression, badges, and educational interfaces. Use professional blues and greens with accents of orange for learning progress. Style should be modern, approachable, and suitable for an education technology blog.",
            "Adaptive Learning Platform",
        ),
        ImageSpec::new(
            "educational-software-refinement-hero.png",
            "A minimalist, professional illustration representing software refinement and user experience optimization. Show before/after interfaces, simplified user flows, and clean design elements. Include subtle references to bug fixes, code optimization, and UX improvements. Use a sophisticated color palette with blues, grays, and subtle accent colors. Style should emphasize clarity, simplicity, and professional software development.",
            "Educational Software UX Refinement",
        ),
        ImageSpec::new(
            "visual-storytelling-hero.png",
            "A modern, artistic illustration representing visual storytelling and blog design. Feature elements like hero images, blog layouts, typography, and visual hierarchy. Include subtle references to AI image generation, content creation, and digital publishing. Use a creative color palette with rich blues, purples, and gold accents. Style should be sophisticated and suitable for a blog about content creation and design.",
            "Visual Storytelling - Hero Images",
        ),
    ]
}
