use dioxus::prelude::*;

/// Fixed site header: brand link on the left, `children` on the right.
#[component]
pub fn Navbar(
    #[props(into)] brand: String,
    #[props(into)] home_href: String,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let target = home_href.clone();

    rsx! {
        header { class: "fixed inset-x-0 top-0 z-10 flex items-center justify-between p-4 bg-transparent backdrop-blur-2xl",
            a {
                class: "text-xl font-bold tracking-tight font-cal-sans",
                href: home_href,
                onclick: move |event: MouseEvent| {
                    event.prevent_default();
                    on_navigate.call(target.clone());
                },
                "{brand}"
            }
            {children}
        }
    }
}
