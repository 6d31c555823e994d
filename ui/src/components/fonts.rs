use dioxus::prelude::*;
use shared::site::Typography;

/// Injects the `@font-face` rules of the site typography into the document head.
#[component]
pub fn Fonts(typography: Typography) -> Element {
    let css = typography.css();

    rsx! {
      document::Style { "{css}" }
    }
}
