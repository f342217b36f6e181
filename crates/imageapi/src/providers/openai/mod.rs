mod api;
pub mod models;

pub use api::generate_image_url;
