use crate::components::{Footer, MenuToggle, Modal, NavigationList, MOBILE_NAV_ID};
use crate::Navbar;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::mobile_nav::{MobileNavEvent, MobileNavState};
use shared::navigation::NavigationLink;
use shared::site::{Typography, SITE};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page body
    pub children: Element,
    /// Entries of the mobile navigation, in display order
    pub links: Vec<NavigationLink>,
    /// Path of the page being displayed
    #[props(into)]
    pub current_path: String,
    /// Asks the router to go to an `href`
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let mut nav_state = use_signal(MobileNavState::default);
    let mut dispatch = move |event: MobileNavEvent| {
        let current = nav_state();
        let next = current.apply(event);
        if next != current {
            info!("Mobile navigation {:?} -> {:?} ({:?})", current, next, event);
            nav_state.set(next);
        }
    };

    let on_navigate = props.on_navigate;
    let is_open = nav_state().is_open();
    let body_font = Typography::default().body_class;

    rsx! {
      div {
        class: "min-h-screen bg-zinc-900 text-white scroll-smooth flex flex-col {body_font}",
        onkeydown: move |event: KeyboardEvent| {
            if event.key() == Key::Escape {
                dispatch(MobileNavEvent::Dismissed);
            }
        },

        Navbar {
          brand: SITE.brand.clone(),
          home_href: SITE.home_href.clone(),
          on_navigate,
          MenuToggle {
            is_open,
            ontoggle: move |_| dispatch(MobileNavEvent::ToggleActivated),
          }
        }

        main { class: "p-4 mt-20 grow", {props.children} }

        Footer { owner: SITE.owner.clone() }

        Modal {
          id: MOBILE_NAV_ID,
          is_open,
          on_close: move |_| dispatch(MobileNavEvent::CloseActivated),
          on_dismiss: move |_| dispatch(MobileNavEvent::Dismissed),
          header: rsx! { p { "Navigation" } },
          nav {
            NavigationList {
              links: props.links.clone(),
              current_path: props.current_path.clone(),
              on_select: move |link: NavigationLink| {
                  let selection = nav_state().select(&link);
                  dispatch(MobileNavEvent::LinkActivated);
                  if let Some(href) = selection.navigate_to {
                      info!("Navigating to {}", href);
                      on_navigate.call(href);
                  }
              },
            }
          }
        }
      }
    }
}
