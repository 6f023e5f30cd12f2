#![windows_subsystem = "windows"]
mod api;
mod loaders;
mod state_management;
#[cfg(test)]
mod test_utils;
mod utils;
mod views;

mod prelude {
    pub use super::loaders::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use prelude::*;

use views::{book::BookView, book_list::BookListView, home::HomeView, main_layout::MainLayout};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        HomeView {},
        #[route("/books")]
        BookListView {},
        #[route("/book/:book_id")]
        BookView { book_id: i64 },
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &'static str = "Wing";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    _ = crate::state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { id: "app", class: "text-base", Router::<Route> {} }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 800))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
