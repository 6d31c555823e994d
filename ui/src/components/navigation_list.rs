use dioxus::prelude::*;
use shared::navigation::NavigationLink;

pub const ACTIVE_LINK_CLASS: &str = "text-lg font-medium tracking-tight text-white";
pub const MUTED_LINK_CLASS: &str = "text-lg font-medium tracking-tight text-zinc-400";

#[derive(Props, Clone, PartialEq)]
pub struct NavigationListProps {
    /// Entries in display order
    pub links: Vec<NavigationLink>,
    /// Path compared against each `href`
    #[props(into)]
    pub current_path: String,
    /// Called with the activated entry. The browser default is suppressed.
    pub on_select: EventHandler<NavigationLink>,
}

#[component]
pub fn NavigationList(props: NavigationListProps) -> Element {
    let on_select = props.on_select;

    let items = props.links.iter().map(|link| {
        let active = link.is_active(&props.current_path);
        let selected = link.clone();

        rsx! {
          li { key: "{link.id}",
            a {
              class: if active { ACTIVE_LINK_CLASS } else { MUTED_LINK_CLASS },
              href: link.href.clone(),
              aria_current: active.then_some("page"),
              onclick: move |event: MouseEvent| {
                  event.prevent_default();
                  on_select.call(selected.clone());
              },
              "{link.name}"
            }
          }
        }
    });

    rsx! {
      ul { class: "flex flex-col gap-2 mt-2", {items} }
    }
}
