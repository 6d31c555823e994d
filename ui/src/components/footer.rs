use chrono::{Datelike, Local};
use dioxus::prelude::*;
use shared::site::copyright_line;

#[component]
pub fn Footer(#[props(into)] owner: String) -> Element {
    // Evaluated on every render, never cached.
    let line = copyright_line(Local::now().year(), &owner);

    rsx! {
      footer { class: "p-4 text-sm text-center bg-zinc-800",
        p { "{line}" }
      }
    }
}
