use reqwest::Client;

pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Generation options sent with every request made by an [`ImageClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOptions {
    pub n: u32,
    pub size: String,
    pub quality: String,
    pub style: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            n: 1,
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            style: "natural".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ImageClient {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) model: String,
    pub(crate) options: ImageOptions,
    pub(crate) http: Client,
}

impl ImageClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            options: ImageOptions::default(),
            http: Client::new(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn options(&self) -> &ImageOptions {
        &self.options
    }

    /// Shared HTTP client, also used for downloading generated images.
    pub fn http(&self) -> &Client {
        &self.http
    }
}

impl std::fmt::Debug for ImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
