use dioxus::prelude::*;

/// Id of the element controlled by the menu button.
pub const MOBILE_NAV_ID: &str = "mobile-navigation";

/// Header button opening the mobile navigation, hidden on large screens.
#[component]
pub fn MenuToggle(is_open: bool, ontoggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
      div { class: "lg:hidden",
        button {
          class: "flex items-center gap-2 p-2 text-sm border rounded-md bg-zinc-800 border-white/20 cursor-pointer",
          r#type: "button",
          aria_expanded: "{is_open}",
          aria_controls: MOBILE_NAV_ID,
          onclick: move |evt| ontoggle.call(evt),
          span { "Menu" }
          svg {
            class: "w-2 h-2 transition-transform",
            class: if is_open { "rotate-180" } else { "" },
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1",
            stroke: "currentColor",
            path {
              stroke_linecap: "round",
              stroke_linejoin: "round",
              d: "M19.5 5.25l-7.5 7.5-7.5-7.5m15 6l-7.5 7.5-7.5-7.5",
            }
          }
        }
      }
    }
}
