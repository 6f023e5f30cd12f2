use crate::prelude::*;

use crate::utils::CCStr;

pub mod book;
pub mod book_list;
pub mod home;
pub mod main_layout;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "view-header",
            h1 { class: "view-title", {title} }
            h2 { class: "view-subtitle", {subtitle} }
        }
        div { class: "view-separator" }
        {children}
    }
}

/// Red banner shown by every view when its loader reports a failure.
/// Loaders collapse all failure kinds into one message string, so this is
/// the whole error surface of the UI.
#[component]
fn LoadErrorAlert(message: CCStr) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert", {message} }
    }
}
