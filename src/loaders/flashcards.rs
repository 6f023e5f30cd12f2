use crate::prelude::*;

use crate::api::{ApiClient, Book};
use crate::utils::{CCStr, CheapClone};

use super::run;

/// Loads a book together with the ids of its flashcards.
///
/// The two fetches run strictly in sequence: the flashcards belong to the
/// book, so the book's existence gates the second request. Both steps share
/// one error channel; since a primary failure short-circuits, the channel
/// always carries the first failure.
#[derive(Clone)]
pub struct BookFlashcardsLoader {
    client: ApiClient,
    book_id: i64,
    book: Signal<Option<CheapClone<Book>>>,
    flashcard_ids: Signal<Vec<i64>>,
    error: Signal<Option<CCStr>>,
}

pub fn use_book_flashcards_loader(book_id: i64) -> BookFlashcardsLoader {
    let client = state_management::use_api_client();
    let book = use_signal(|| None);
    let flashcard_ids = use_signal(Vec::new);
    let error = use_signal(|| None);
    use_hook(move || BookFlashcardsLoader {
        client,
        book_id,
        book,
        flashcard_ids,
        error,
    })
}

impl BookFlashcardsLoader {
    pub fn book(&self) -> ReadOnlySignal<Option<CheapClone<Book>>> {
        self.book.into()
    }

    pub fn flashcard_ids(&self) -> ReadOnlySignal<Vec<i64>> {
        self.flashcard_ids.into()
    }

    pub fn error(&self) -> ReadOnlySignal<Option<CCStr>> {
        self.error.into()
    }

    /// The book slot is committed as soon as the first fetch resolves, so
    /// the UI can already render the book while the flashcards are still in
    /// flight. On a secondary failure the book keeps that value and only
    /// `error` is written.
    pub async fn load(&self) {
        log::debug!("BookFlashcardsLoader::load({}) - start", self.book_id);
        let mut book = self.book;
        let mut flashcard_ids = self.flashcard_ids;
        let mut error = self.error;
        run::load_composite(
            self.client.book(self.book_id),
            |b| book.set(Some(CheapClone::new(b))),
            || self.client.flashcard_ids(self.book_id),
            |ids| flashcard_ids.set(ids),
            |e| error.set(Some(e)),
        )
        .await;
        log::debug!("BookFlashcardsLoader::load({}) - finished", self.book_id);
    }
}
