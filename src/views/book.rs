use crate::prelude::*;

use crate::utils::CCStr;

#[component]
pub fn BookView(book_id: i64) -> Element {
    log::debug!("BookView Rendered");

    let loader = loaders::use_book_flashcards_loader(book_id);
    let book = loader.book();
    let flashcard_ids = loader.flashcard_ids();
    let error = loader.error();

    let title = use_memo(move || {
        book.read()
            .as_ref()
            .map(|b| CCStr::from(&b.title))
            .unwrap_or_else(|| CCStr::from("Book"))
    });
    let flashcard_count = use_memo(move || flashcard_ids.read().len());

    let reload_loader = loader.clone();
    let reload = move |_| {
        let loader = reload_loader.clone();
        spawn(async move { loader.load().await });
    };

    // Load on mount, once.
    use_future(move || {
        let loader = loader.clone();
        async move { loader.load().await }
    });

    use_drop(|| log::debug!("BookView Dropped"));

    rsx! {
        super::TitledView {
            title: title(),
            subtitle: CCStr::from("The book and the flashcards you created from it."),
            if let Some(ref error) = *error.read() {
                super::LoadErrorAlert { message: error.clone() }
            }
            if let Some(ref book) = *book.read() {
                div { class: "card book-detail",
                    div { class: "card-title", "{book.title}" }
                    div { class: "card-author", "by {book.author}" }
                    div { class: "card-stats",
                        span { "{book.sentences_count} sentences" }
                        span { "{book.words_count} words" }
                    }
                }
            }
            div { class: "flashcards-section",
                h3 { class: "section-title", "Flashcards ({flashcard_count})" }
                div { class: "badge-row",
                    for flashcard_id in flashcard_ids.read().iter() {
                        span { class: "badge", "#{flashcard_id}" }
                    }
                }
            }
            button { class: "btn btn-outline", onclick: reload, "Reload" }
        }
    }
}
