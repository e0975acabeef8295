use dioxus::prelude::*;

use crate::domain::entities::filter::ALL_SENTINEL;
use crate::ui::styles::INPUT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SearchInput(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "search",
            style: INPUT,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_input.call(event.value()),
        }
    }
}

/// Dropdown whose "no selection" option carries the `__all__` sentinel.
#[component]
pub fn SelectFilter(
    label: String,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    let current = if value.is_empty() {
        ALL_SENTINEL.to_string()
    } else {
        value
    };

    rsx! {
        label { style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            select {
                style: "border: 1px solid #bbb; border-radius: 6px; padding: 4px 6px;",
                onchange: move |event| on_change.call(event.value()),
                option {
                    value: ALL_SENTINEL,
                    selected: current == ALL_SENTINEL,
                    "All"
                }
                {options.iter().map(|option| rsx! {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: current == option.value,
                        "{option.label}"
                    }
                })}
            }
        }
    }
}

#[component]
pub fn DateRange(
    from: String,
    to: String,
    on_from: EventHandler<String>,
    on_to: EventHandler<String>,
) -> Element {
    rsx! {
        div { style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "From" }
            input {
                r#type: "date",
                style: "border: 1px solid #bbb; border-radius: 6px; padding: 4px 6px;",
                value: "{from}",
                onchange: move |event| on_from.call(event.value()),
            }
            span { "to" }
            input {
                r#type: "date",
                style: "border: 1px solid #bbb; border-radius: 6px; padding: 4px 6px;",
                value: "{to}",
                onchange: move |event| on_to.call(event.value()),
            }
        }
    }
}
