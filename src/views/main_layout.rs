use crate::prelude::*;

use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div { class: "app-shell",
            header { class: "app-header", NavBar {} }
            main { class: "app-main", Outlet::<Route> {} }
            footer { class: "app-footer", Footer {} }
        }
    }
}

#[component]
fn NavBar() -> Element {
    log::debug!("NavBar reload");

    rsx! {
        nav { class: "navbar",
            div { class: "brand",
                div { class: "brand-name", "Wing" }
                div { class: "brand-sub", "books & flashcards" }
            }
            div { class: "navbar-spacer" }
            NavLink { route: Route::HomeView {}, "Home" }
            NavLink { route: Route::BookListView {}, "Books" }
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        Link {
            class: "nav-link",
            active_class: "nav-link-active",
            to: route,
            {children}
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "footer-note", "Wing, the vocabulary companion for readers" }
    }
}
