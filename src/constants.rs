pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_OPENAI_ENDPOINT: &str = imageapi::types::DEFAULT_OPENAI_ENDPOINT;
pub const OUTPUT_DIR_NAME: &str = "public/assets";
pub const DEFAULT_PAUSE_MS: u64 = 2000;
pub const PROMPT_PREVIEW_CHARS: usize = 100;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "OPENAI_BASE_URL";
pub const OUTPUT_DIR_ENV: &str = "HERO_IMAGES_OUTPUT_DIR";
pub const PAUSE_MS_ENV: &str = "HERO_IMAGES_PAUSE_MS";
pub const SPECS_FILE_ENV: &str = "HERO_IMAGES_SPECS";
