use crate::prelude::*;

use crate::api::Book;
use crate::utils::{CCStr, CheapClone};
use crate::Route;

#[component]
pub fn BookListView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Books"),
            subtitle: CCStr::from("Every book available on the Wing service."),
            BookList {}
        }
    }
}

#[component]
fn BookList() -> Element {
    log::debug!("BookList Rendered");

    let loader = loaders::use_book_list_loader();
    let books = loader.books();
    let error = loader.error();

    // Load on mount, once. The loader does not re-fetch on its own.
    use_future(move || {
        let loader = loader.clone();
        async move { loader.load().await }
    });

    use_drop(|| log::debug!("BookList Dropped"));

    rsx! {
        if let Some(ref error) = *error.read() {
            super::LoadErrorAlert { message: error.clone() }
        }
        div { class: "book-grid",
            for book in books.read().iter() {
                BookCard { key: "{book.id}", book: book.clone() }
            }
        }
    }
}

#[component]
fn BookCard(book: CheapClone<Book>) -> Element {
    log::debug!("BookCard Rendered");

    let book_id = book.id;
    let click = move |_| {
        navigator().push(Route::BookView { book_id });
    };

    use_drop(|| log::debug!("BookCard Dropped"));

    rsx! {
        div { class: "card book-card", onclick: click,
            div { class: "card-title", "{book.title}" }
            div { class: "card-author", "by {book.author}" }
            div { class: "card-stats",
                span { "{book.sentences_count} sentences" }
                span { "{book.words_count} words" }
            }
        }
    }
}
