use crate::prelude::*;

use crate::api::{ApiClient, Book};
use crate::utils::{CCStr, CheapClone};

use super::run;

/// Loads one book by id.
///
/// The id is fixed at construction: displaying a different book means
/// creating a new loader, and therefore fresh slots.
#[derive(Clone)]
pub struct BookLoader {
    client: ApiClient,
    book_id: i64,
    book: Signal<Option<CheapClone<Book>>>,
    error: Signal<Option<CCStr>>,
}

pub fn use_book_loader(book_id: i64) -> BookLoader {
    let client = state_management::use_api_client();
    let book = use_signal(|| None);
    let error = use_signal(|| None);
    use_hook(move || BookLoader {
        client,
        book_id,
        book,
        error,
    })
}

impl BookLoader {
    pub fn book(&self) -> ReadOnlySignal<Option<CheapClone<Book>>> {
        self.book.into()
    }

    pub fn error(&self) -> ReadOnlySignal<Option<CCStr>> {
        self.error.into()
    }

    /// One fetch, then terminal: either `book` or `error` is written,
    /// never both in the same cycle. Calling `load` again re-fetches and
    /// overwrites; overlapping calls race and the last completion wins.
    pub async fn load(&self) {
        log::debug!("BookLoader::load({}) - start", self.book_id);
        let mut book = self.book;
        let mut error = self.error;
        run::load_resource(
            self.client.book(self.book_id),
            |b| book.set(Some(CheapClone::new(b))),
            |e| error.set(Some(e)),
        )
        .await;
        log::debug!("BookLoader::load({}) - finished", self.book_id);
    }
}
