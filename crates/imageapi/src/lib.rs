pub mod providers;
pub mod types;
pub mod utils;

pub use providers::generate_image_url;
pub use types::{ImageClient, ImageOptions};
pub use utils::download_to_file;
