use std::future::Future;

use crate::api::ApiError;
use crate::utils::{log_error_ccstr, CCStr};

/// Drives a single fetch to its terminal state: exactly one call, then
/// either `on_success` or `on_error` runs, never both. Failures are logged
/// and collapsed into one message string at this boundary, nothing is
/// re-thrown to the caller.
pub(crate) async fn load_resource<T, Fut>(
    fetch: Fut,
    on_success: impl FnOnce(T),
    on_error: impl FnOnce(CCStr),
) where
    Fut: Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(value) => on_success(value),
        Err(err) => on_error(log_error_ccstr(err)),
    }
}

/// Drives the two dependent fetches of a composite load, strictly in
/// sequence.
///
/// The primary result is committed through `on_primary` before the
/// secondary request is even built, and a primary failure short-circuits:
/// `fetch_secondary` is never called, so the shared error channel always
/// carries the first failure.
pub(crate) async fn load_composite<P, S, FutP, FutS>(
    fetch_primary: FutP,
    on_primary: impl FnOnce(P),
    fetch_secondary: impl FnOnce() -> FutS,
    on_secondary: impl FnOnce(S),
    on_error: impl FnOnce(CCStr),
) where
    FutP: Future<Output = Result<P, ApiError>>,
    FutS: Future<Output = Result<S, ApiError>>,
{
    match fetch_primary.await {
        Ok(value) => on_primary(value),
        Err(err) => {
            on_error(log_error_ccstr(err));
            return;
        }
    }
    match fetch_secondary().await {
        Ok(value) => on_secondary(value),
        Err(err) => on_error(log_error_ccstr(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, Book};
    use crate::test_utils::TestServer;

    use std::cell::RefCell;

    fn dune_json() -> String {
        r#"{"id":42,"title":"Dune","author":"Frank Herbert","sentences_count":17,"words_count":230}"#
            .to_owned()
    }

    fn short_json(id: i64, title: &str) -> String {
        format!(r#"{{"id":{id},"title":"{title}","author":"N.N."}}"#)
    }

    #[tokio::test]
    async fn single_load_fills_resource_and_keeps_error_clear() {
        let server = TestServer::start([("/books/42", (200, dune_json()))]);
        let client = ApiClient::new(&server.base_url);

        let mut book: Option<Book> = None;
        let mut error: Option<CCStr> = None;

        load_resource(client.book(42), |b| book = Some(b), |e| error = Some(e)).await;

        let book = book.expect("resource slot must be filled");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.id, 42);
        assert!(error.is_none());
        server.stop();
    }

    #[tokio::test]
    async fn failed_load_leaves_resource_at_pre_call_value() {
        let server = TestServer::start([("/books/42", (404, "Not found".to_owned()))]);
        let client = ApiClient::new(&server.base_url);

        // Slot pre-filled by an earlier successful cycle.
        let mut book: Option<Book> = Some(Book {
            id: 42,
            title: "Stale".to_owned(),
            author: "N.N.".to_owned(),
            sentences_count: 0,
            words_count: 0,
        });
        let mut error: Option<CCStr> = None;

        load_resource(client.book(42), |b| book = Some(b), |e| error = Some(e)).await;

        assert_eq!(book.unwrap().title, "Stale");
        assert_eq!(error.as_deref(), Some("ERROR: no book available"));
        server.stop();
    }

    #[tokio::test]
    async fn reload_overwrites_previous_result() {
        let first = TestServer::start([("/books/all", (200, format!("[{}]", dune_json())))]);
        let second = TestServer::start([("/books/all", (200, "[]".to_owned()))]);

        let mut books: Vec<Book> = Vec::new();
        let mut error: Option<CCStr> = None;

        load_resource(
            ApiClient::new(&first.base_url).books(),
            |b| books = b,
            |e| error = Some(e),
        )
        .await;
        assert_eq!(books.len(), 1);

        // A second cycle replaces the collection wholesale, even when the
        // new result is empty.
        load_resource(
            ApiClient::new(&second.base_url).books(),
            |b| books = b,
            |e| error = Some(e),
        )
        .await;
        assert!(books.is_empty());
        assert!(error.is_none());

        first.stop();
        second.stop();
    }

    #[tokio::test]
    async fn composite_load_runs_strictly_in_sequence() {
        let server = TestServer::start([
            ("/books/7", (200, short_json(7, "Leviathan"))),
            ("/books/7/flashcards", (200, "[3,1,8]".to_owned())),
        ]);
        let client = ApiClient::new(&server.base_url);

        let events: RefCell<Vec<&str>> = RefCell::new(Vec::new());
        let mut book: Option<Book> = None;
        let mut flashcard_ids: Vec<i64> = Vec::new();
        let mut error: Option<CCStr> = None;

        load_composite(
            client.book(7),
            |b| {
                events.borrow_mut().push("primary committed");
                book = Some(b);
            },
            || {
                events.borrow_mut().push("secondary sent");
                client.flashcard_ids(7)
            },
            |ids| flashcard_ids = ids,
            |e| error = Some(e),
        )
        .await;

        assert_eq!(book.unwrap().id, 7);
        assert_eq!(flashcard_ids, vec![3, 1, 8]);
        assert!(error.is_none());
        assert_eq!(*events.borrow(), vec!["primary committed", "secondary sent"]);
        assert_eq!(server.hits("/books/7"), 1);
        assert_eq!(server.hits("/books/7/flashcards"), 1);
        server.stop();
    }

    #[tokio::test]
    async fn composite_load_short_circuits_on_primary_failure() {
        let server = TestServer::start([
            ("/books/7", (500, "boom".to_owned())),
            ("/books/7/flashcards", (200, "[3,1,8]".to_owned())),
        ]);
        let client = ApiClient::new(&server.base_url);

        let mut book: Option<Book> = None;
        let mut flashcard_ids: Vec<i64> = Vec::new();
        let mut error: Option<CCStr> = None;

        load_composite(
            client.book(7),
            |b| book = Some(b),
            || client.flashcard_ids(7),
            |ids| flashcard_ids = ids,
            |e| error = Some(e),
        )
        .await;

        assert!(book.is_none());
        assert!(flashcard_ids.is_empty());
        assert_eq!(error.as_deref(), Some("ERROR: no book available"));
        assert_eq!(server.hits("/books/7/flashcards"), 0);
        server.stop();
    }

    #[tokio::test]
    async fn composite_load_keeps_primary_on_secondary_failure() {
        let server = TestServer::start([
            ("/books/7", (200, short_json(7, "Leviathan"))),
            ("/books/7/flashcards", (404, "Not found".to_owned())),
        ]);
        let client = ApiClient::new(&server.base_url);

        let mut book: Option<Book> = None;
        let mut flashcard_ids: Vec<i64> = Vec::new();
        let mut error: Option<CCStr> = None;

        load_composite(
            client.book(7),
            |b| book = Some(b),
            || client.flashcard_ids(7),
            |ids| flashcard_ids = ids,
            |e| error = Some(e),
        )
        .await;

        assert_eq!(book.unwrap().title, "Leviathan");
        assert!(flashcard_ids.is_empty());
        assert_eq!(error.as_deref(), Some("ERROR: no flashcards available"));
        server.stop();
    }
}
