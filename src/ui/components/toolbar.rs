use dioxus::prelude::*;

use crate::ui::styles::BUTTON;

#[component]
pub fn Toolbar(
    children: Element,
    view_options: Element,
    show_reset: bool,
    loading: bool,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin: 12px 0;",
            div { style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; flex: 1;",
                {children}
                if show_reset {
                    button {
                        style: BUTTON,
                        onclick: move |_| on_reset.call(()),
                        "Reset"
                    }
                }
            }
            if loading {
                span { style: "color: #888; font-size: 13px;", "Loading…" }
            }
            {view_options}
        }
    }
}
