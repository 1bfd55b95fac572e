//! Downloading book text from a Gutenberg mirror.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

/// Errors from downloading a book.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, TLS, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mirror answered with a non-success status.
    #[error("download response was {0}")]
    Status(reqwest::StatusCode),
}

impl FetchError {
    /// Whether the mirror answered but had no usable file.
    ///
    /// These count toward the download error limit; transport failures
    /// end the run.
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}

/// Build the HTTP client shared by downloads and posting.
pub fn client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("gutenquote/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .build()
}

/// Download the full text of a book.
pub async fn fetch_book(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Downloading {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = download(client, url).await;
    spinner.finish_and_clear();
    result
}

async fn download(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let text = response.text().await?;
    log::debug!("downloaded {} bytes", text.len());
    Ok(text)
}
