use crate::prelude::*;

use crate::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "hero",
            h1 { class: "hero-title", "Wing" }
            p { class: "hero-text",
                "Read books in the language you are learning and turn the
                words you stumble on into flashcards."
            }
            Link { class: "btn btn-primary", to: Route::BookListView {}, "Browse the books" }
        }
    }
}
