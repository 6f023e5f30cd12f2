use crate::utils::CCStr;

use super::models::Book;

/// Message surfaced when the single-book endpoint answers with a
/// non-success status. The status code itself is discarded on purpose: the
/// UI only ever displays one opaque string.
pub const NO_BOOK_AVAILABLE: &str = "ERROR: no book available";
pub const NO_BOOKS_AVAILABLE: &str = "ERROR: no books available";
pub const NO_FLASHCARDS_AVAILABLE: &str = "ERROR: no flashcards available";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The endpoint answered, but with a non-success status.
    #[error("{0}")]
    Unavailable(&'static str),
    /// The request never completed, or the body could not be decoded.
    #[error("{0}")]
    Transport(CCStr),
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(CCStr::from(err.to_string()))
}

/// Thin client over the Wing HTTP API.
///
/// Cloning is cheap: the base URL is reference-counted and the underlying
/// [`reqwest::Client`] shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: CCStr,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: CCStr::from(base_url.as_ref().trim_end_matches('/')),
            http: reqwest::Client::new(),
        }
    }

    pub async fn book(&self, book_id: i64) -> Result<Book, ApiError> {
        let url = format!("{}/books/{book_id}", self.base_url);
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Unavailable(NO_BOOK_AVAILABLE));
        }
        response.json().await.map_err(transport)
    }

    pub async fn books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/books/all", self.base_url);
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Unavailable(NO_BOOKS_AVAILABLE));
        }
        response.json().await.map_err(transport)
    }

    pub async fn flashcard_ids(&self, book_id: i64) -> Result<Vec<i64>, ApiError> {
        let url = format!("{}/books/{book_id}/flashcards", self.base_url);
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Unavailable(NO_FLASHCARDS_AVAILABLE));
        }
        response.json().await.map_err(transport)
    }
}
