use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub fn detect_mime_type<P: AsRef<Path>>(path: P) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|mime| mime.to_string())
}

pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Streams the body at `url` into a freshly created (or truncated) file at
/// `path`. Returns only after every byte has been written and flushed.
///
/// A non-success HTTP status is treated like a transport failure: the body
/// is not kept, so an error page never ends up on disk as an image.
///
/// If anything fails once the file exists, the partial file is removed
/// before the error is returned. Removal failures are ignored.
pub async fn download_to_file(http: &Client, url: &str, path: &Path) -> Result<PathBuf> {
    let mut file = File::create(path)
        .await
        .with_context(|| format!("Failed to create image file {:?}", path))?;

    match stream_into(http, url, path, &mut file).await {
        Ok(written) => {
            debug!(bytes = written, path = %path.display(), "download complete");
            Ok(path.to_path_buf())
        }
        Err(err) => {
            drop(file);
            let _ = fs::remove_file(path).await;
            Err(err)
        }
    }
}

async fn stream_into(http: &Client, url: &str, path: &Path, file: &mut File) -> Result<u64> {
    let mut response = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Non-success HTTP status from {}", url))?;

    warn_on_mime_mismatch(&response, path);

    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .context("Failed to read response bytes")?
    {
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write image file {:?}", path))?;
        written += chunk.len() as u64;
    }

    file.flush()
        .await
        .with_context(|| format!("Failed to flush image file {:?}", path))?;
    file.sync_all()
        .await
        .with_context(|| format!("Failed to sync image file {:?}", path))?;

    Ok(written)
}

fn warn_on_mime_mismatch(response: &reqwest::Response, path: &Path) {
    let Some(expected) = detect_mime_type(path) else {
        return;
    };
    let Some(actual) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
    else {
        return;
    };

    if !actual.eq_ignore_ascii_case(&expected) {
        warn!(
            expected = %expected,
            actual = %actual,
            path = %path.display(),
            "downloaded content type does not match file extension"
        );
    }
}
