use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "flex flex-col items-center gap-4 py-24 text-center",
            h1 { class: "text-6xl font-bold font-cal-sans", "404" }
            p { class: "text-zinc-400", "Nothing lives at /{path}." }
            Link { class: "underline", to: Route::HomePage {}, "Back home" }
        }
    }
}
