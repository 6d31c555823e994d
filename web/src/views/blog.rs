use dioxus::prelude::*;

#[component]
pub fn BlogPage() -> Element {
    rsx! {
        section { class: "flex flex-col gap-4 max-w-3xl mx-auto py-16",
            h1 { class: "text-4xl font-bold tracking-tight font-cal-sans", "Blog" }
            p { class: "text-zinc-400", "New posts are on their way." }
        }
    }
}
