use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use tracing::debug;

use crate::types::ImageClient;

use super::models::{ImageGenerationRequest, ImageGenerationResponse};

/// Requests a single image for `prompt` and returns the temporary URL the
/// provider hands back. Anything other than `200 OK` is an error carrying the
/// status code and the raw response body.
pub async fn generate_image_url(client: &ImageClient, prompt: &str) -> Result<String> {
    let url = format!(
        "{}/images/generations",
        client.endpoint().trim_end_matches('/')
    );
    let options = client.options();
    let payload = ImageGenerationRequest {
        model: client.model(),
        prompt,
        n: options.n,
        size: &options.size,
        quality: &options.quality,
        style: &options.style,
    };

    debug!(%url, model = client.model(), "sending image generation request");

    let response = client
        .http()
        .post(url)
        .bearer_auth(client.api_key())
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await
        .context("Image generation request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Failed to read image generation response body")?;

    if status != StatusCode::OK {
        return Err(anyhow!(
            "API request failed with status {}: {}",
            status.as_u16(),
            response_text
        ));
    }

    let parsed: ImageGenerationResponse = serde_json::from_str(&response_text)
        .with_context(|| format!("Failed to decode image generation JSON: {response_text}"))?;

    let first = parsed
        .data
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No images returned from image generation API"))?;

    if let Some(revised) = first.revised_prompt.as_deref() {
        debug!(revised_prompt = revised, "provider revised the prompt");
    }

    first
        .url
        .ok_or_else(|| anyhow!("Image generation response did not include an image URL"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ImageClient {
        ImageClient::new("test-key", format!("{}/v1", server.uri()), "dall-e-3")
    }

    #[tokio::test]
    async fn returns_first_url_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "model": "dall-e-3",
                "prompt": "a slime",
                "n": 1,
                "size": "1024x1024",
                "quality": "standard",
                "style": "natural"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1,
                "data": [
                    { "url": "https://images.example/first.png", "revised_prompt": "a green slime" },
                    { "url": "https://images.example/second.png" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let url = generate_image_url(&client_for(&server), "a slime")
            .await
            .unwrap();
        assert_eq!(url, "https://images.example/first.png");
    }

    #[tokio::test]
    async fn non_ok_status_reports_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let err = generate_image_url(&client_for(&server), "anything")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("404"), "{message}");
        assert!(message.contains("not found"), "{message}");
    }

    #[tokio::test]
    async fn non_200_success_status_is_still_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
            .mount(&server)
            .await;

        let err = generate_image_url(&client_for(&server), "anything")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("202"));
    }

    #[tokio::test]
    async fn empty_data_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let err = generate_image_url(&client_for(&server), "anything")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No images"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = generate_image_url(&client_for(&server), "anything")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }
}
