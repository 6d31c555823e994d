use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use shared::navigation::{self, NavigationLink};
use shared::site::{Typography, SITE};

use ui::{Fonts, Layout};
use views::{AboutPage, BlogPage, HomePage, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomePage {},
        #[route("/blog")]
        BlogPage {},
        #[route("/about")]
        AboutPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "{SITE.brand}" }
        Fonts { typography: Typography::default() }

        Router::<Route> {}
    }
}

/// Navigation entries for the site. A broken config leaves the menu empty.
fn load_navigation() -> Vec<NavigationLink> {
    navigation::default_links().unwrap_or_else(|e| {
        error!("Failed to load navigation: {}", e);
        Vec::new()
    })
}

/// The page an `href` points at. Paths only the catch-all matches have no page.
fn route_for(href: &str) -> Option<Route> {
    match href.parse::<Route>() {
        Ok(Route::NotFound { .. }) | Err(_) => None,
        Ok(route) => Some(route),
    }
}

#[component]
fn SiteLayout() -> Element {
    let links = use_hook(load_navigation);
    let current = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        Layout {
            links,
            current_path: current.to_string(),
            on_navigate: move |href: String| match route_for(&href) {
                Some(route) => {
                    nav.push(route);
                }
                None => warn!("No page for {}", href),
            },
            Outlet::<Route> {}
        }
    }
}
