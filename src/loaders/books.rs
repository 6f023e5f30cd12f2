use crate::prelude::*;

use crate::api::{ApiClient, Book};
use crate::utils::{CCStr, CheapClone};

use super::run;

/// Loads the whole book collection.
///
/// The `books` slot starts empty and is replaced wholesale on every
/// successful cycle, never appended to.
#[derive(Clone)]
pub struct BookListLoader {
    client: ApiClient,
    books: Signal<Vec<CheapClone<Book>>>,
    error: Signal<Option<CCStr>>,
}

pub fn use_book_list_loader() -> BookListLoader {
    let client = state_management::use_api_client();
    let books = use_signal(Vec::new);
    let error = use_signal(|| None);
    use_hook(move || BookListLoader {
        client,
        books,
        error,
    })
}

impl BookListLoader {
    pub fn books(&self) -> ReadOnlySignal<Vec<CheapClone<Book>>> {
        self.books.into()
    }

    pub fn error(&self) -> ReadOnlySignal<Option<CCStr>> {
        self.error.into()
    }

    pub async fn load(&self) {
        log::debug!("BookListLoader::load - start");
        let mut books = self.books;
        let mut error = self.error;
        run::load_resource(
            self.client.books(),
            |list| books.set(list.into_iter().map(CheapClone::new).collect()),
            |e| error.set(Some(e)),
        )
        .await;
        log::debug!("BookListLoader::load - finished");
    }
}
