use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::transition::Transition;

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    /// Whether the modal is shown. The modal stays mounted either way.
    pub is_open: bool,
    /// Called by the close button
    pub on_close: EventHandler,
    /// Called on backdrop click or Escape, falls back to `on_close`
    pub on_dismiss: Option<EventHandler>,
    /// Id of the root element, for `aria-controls`
    #[props(into)]
    pub id: Option<String>,
    /// The content to be displayed inside the modal
    pub children: Element,
    /// The header of the modal
    pub header: Element,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let shown = props.is_open;
    let on_close = props.on_close;
    let dismiss = props.on_dismiss.unwrap_or(on_close);

    // Focus moves into the panel on open so Escape reaches the dialog.
    let mut panel = use_signal(|| None::<Rc<MountedData>>);
    use_effect(use_reactive((&shown,), move |(shown,)| {
        if !shown {
            return;
        }
        if let Some(element) = panel() {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    warn!("Failed to focus dialog: {:?}", e);
                }
            });
        }
    }));

    let (pointer_events, aria_hidden) = if shown {
        ("pointer-events-auto", "false")
    } else {
        ("pointer-events-none", "true")
    };
    let backdrop_classes = Transition::BACKDROP.classes(shown);
    let panel_classes = Transition::PANEL.classes(shown);

    rsx! {
      div {
        id: props.id,
        class: "relative z-10 {pointer_events}",
        aria_hidden,
        // Hidden content stays mounted for the leave transition but must not take focus.
        "inert": (!shown).then_some("true"),
        onkeydown: move |event: KeyboardEvent| {
            if shown && event.key() == Key::Escape {
                event.stop_propagation();
                dismiss.call(());
            }
        },

        // Backdrop
        div {
          class: "fixed inset-0 bg-black/60 backdrop-blur-sm transition-opacity {backdrop_classes}",
          style: Transition::BACKDROP.style(shown),
          onclick: move |_| dismiss.call(()),
        }

        // Container
        div { class: "fixed inset-0 overflow-y-auto",
          div {
            class: "flex items-center justify-center min-h-full p-4 text-center",
            onclick: move |_| dismiss.call(()),

            // Panel
            div {
              class: "flex flex-col w-full max-w-md gap-4 p-6 overflow-hidden text-left text-white align-middle transition-all transform shadow-xl rounded-2xl bg-zinc-800 {panel_classes}",
              style: Transition::PANEL.style(shown),
              role: "dialog",
              aria_modal: "true",
              tabindex: "-1",
              onmounted: move |event: MountedEvent| panel.set(Some(event.data())),
              onclick: move |event| event.stop_propagation(),

              div { class: "flex items-center justify-between text-sm font-medium text-zinc-400",
                {props.header}
                button {
                  class: "cursor-pointer",
                  r#type: "button",
                  aria_label: "Close",
                  onclick: move |_| on_close.call(()),
                  svg {
                    class: "w-4 h-4 text-white",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke_width: "1.5",
                    stroke: "currentColor",
                    path {
                      stroke_linecap: "round",
                      stroke_linejoin: "round",
                      d: "M6 18L18 6M6 6l12 12",
                    }
                  }
                }
              }
              {props.children}
            }
          }
        }
      }
    }
}
