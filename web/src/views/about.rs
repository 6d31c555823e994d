use dioxus::prelude::*;
use shared::site::SITE;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        section { class: "flex flex-col gap-4 max-w-3xl mx-auto py-16",
            h1 { class: "text-4xl font-bold tracking-tight font-cal-sans", "About" }
            p { class: "text-zinc-400",
                "{SITE.brand} is a small corner of the web for people who like to learn by building."
            }
        }
    }
}
