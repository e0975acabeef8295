use dioxus::prelude::*;

use crate::domain::entities::visibility::ColumnVisibility;
use crate::ui::styles::{BUTTON, POPOVER};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Column chooser of one table. Toggles report `(key, show)`.
#[component]
pub fn ViewOptions(
    columns: Vec<ColumnOption>,
    visibility: ColumnVisibility,
    hidden_count: usize,
    on_toggle: EventHandler<(&'static str, bool)>,
    on_show_all: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { style: "position: relative; display: inline-flex; align-items: center;",
            button {
                style: BUTTON,
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "Columns"
                if hidden_count > 0 {
                    span { style: "margin-left: 6px; background: #1d4ed8; color: #fff; border-radius: 999px; padding: 0 6px; font-size: 12px;",
                        "{hidden_count}"
                    }
                }
            }

            if open() {
                div {
                    style: POPOVER,
                    onclick: move |event| event.stop_propagation(),
                    {columns.iter().map(|column| {
                        let key = column.key;
                        let checked = visibility.is_visible(key);
                        rsx! {
                            label {
                                key: "{key}",
                                style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onclick: move |_| on_toggle.call((key, !checked)),
                                }
                                span { "{column.label}" }
                            }
                        }
                    })}
                    button {
                        style: "{BUTTON} width: 100%; margin-top: 4px;",
                        disabled: hidden_count == 0,
                        onclick: move |_| on_show_all.call(()),
                        "Show all"
                    }
                }
            }
        }
    }
}
