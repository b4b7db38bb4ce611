use super::FetchError;
use futures::stream::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "LogPuzzle"
}

/// GET `url` and stream the body into `file_path`, returning the bytes written.
///
/// Non-2xx responses are errors and leave no file behind.
pub async fn download_to_file(
    client: &reqwest::Client,
    url: &str,
    file_path: &Path,
) -> Result<u64, FetchError> {
    let request_error = |e: reqwest::Error| FetchError::Request {
        url: url.to_string(),
        source: e,
    };
    let write_error = |e: std::io::Error| FetchError::Write {
        path: file_path.to_path_buf(),
        source: e,
    };

    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(request_error)?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let mut file = tokio::fs::File::create(file_path)
        .await
        .map_err(write_error)?;

    let mut written = 0u64;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(request_error)?;
        file.write_all(&chunk).await.map_err(write_error)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(write_error)?;

    Ok(written)
}
