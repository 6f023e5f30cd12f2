//! Loader layer: every remote resource the UI displays is owned by a
//! loader instance bundling its private state slots (Dioxus signals) with a
//! `load` operation. Views only ever read the slots and decide when to call
//! `load`; the loaders know nothing about the views.

mod book;
mod books;
mod flashcards;
mod run;

pub mod prelude {
    pub use super::book::BookLoader;
    pub use super::books::BookListLoader;
    pub use super::flashcards::BookFlashcardsLoader;

    pub mod loaders {
        pub use super::super::book::use_book_loader;
        pub use super::super::books::use_book_list_loader;
        pub use super::super::flashcards::use_book_flashcards_loader;
    }
}
