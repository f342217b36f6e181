mod openai;

pub use openai::generate_image_url;
pub use openai::models::{ImageData, ImageGenerationRequest, ImageGenerationResponse};
