use dioxus::prelude::*;
use shared::site::SITE;

use crate::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        section { class: "flex flex-col gap-6 max-w-3xl mx-auto py-16",
            h1 { class: "text-4xl sm:text-6xl font-bold tracking-tight font-cal-sans",
                "Tutorials, notes and code from {SITE.brand}"
            }
            p { class: "text-lg text-zinc-400",
                "Practical write-ups on building software, one small project at a time."
            }
            div { class: "flex gap-4",
                Link {
                    class: "px-4 py-2 rounded-md bg-white text-zinc-900 font-medium",
                    to: Route::BlogPage {},
                    "Read the blog"
                }
                Link {
                    class: "px-4 py-2 rounded-md border border-white/20",
                    to: Route::AboutPage {},
                    "About"
                }
            }
        }
    }
}
