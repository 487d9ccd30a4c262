//! Page retrieval collaborator.
//!
//! The core never performs network access itself; this module fetches a page
//! and hands the decoded HTML text to the caller, translating every failure
//! into a [`FetchError`] before the core is ever invoked.

use log::debug;
use reqwest::Client;

use crate::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::FetchError;

/// Fetches a page and returns its body as text.
///
/// Uses a browser-like User-Agent and a fixed timeout. Non-success statuses
/// and oversized bodies are errors; redirects are followed by the client.
///
/// # Errors
///
/// Returns [`FetchError`] when the request fails, the server answers with a
/// non-success status, or the body exceeds the size limit.
pub async fn fetch_page(url: &str) -> Result<String, FetchError> {
    fetch_page_with(url, DEFAULT_USER_AGENT).await
}

/// Like [`fetch_page`], with a caller-supplied User-Agent.
pub async fn fetch_page_with(url: &str, user_agent: &str) -> Result<String, FetchError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    debug!("Fetching {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    // Check the advertised length first to avoid buffering an oversized body
    if let Some(length) = response.content_length() {
        if length as usize > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge {
                size: length as usize,
                limit: MAX_RESPONSE_BODY_SIZE,
            });
        }
    }

    let body = response.text().await?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(FetchError::BodyTooLarge {
            size: body.len(),
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }

    Ok(body)
}
