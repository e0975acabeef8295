use dioxus::prelude::*;

use crate::ui::styles::button_style;
use crate::usecase::services::pagination::{PageMove, PaginationState, PerPageChoice, PER_PAGE_CHOICES};

#[component]
pub fn PaginationBar(
    state: PaginationState,
    on_page: EventHandler<PageMove>,
    on_per_page: EventHandler<PerPageChoice>,
) -> Element {
    let can_previous = state.can_previous;
    let can_next = state.can_next;
    let selected = state.per_page;
    let custom_size = match selected {
        PerPageChoice::Fixed(size) if !PER_PAGE_CHOICES.contains(&size) => Some(size),
        _ => None,
    };
    let range = state
        .range_label
        .clone()
        .unwrap_or_else(|| "No entries".to_string());

    rsx! {
        div { style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; justify-content: space-between; margin-top: 12px;",
            span { style: "color: #555;", "{range}" }
            div { style: "display: inline-flex; gap: 6px; align-items: center;",
                span { "Rows per page" }
                select {
                    style: "border: 1px solid #bbb; border-radius: 6px; padding: 4px 6px;",
                    onchange: move |event| {
                        if let Some(choice) = PerPageChoice::parse(&event.value()) {
                            on_per_page.call(choice);
                        }
                    },
                    for size in PER_PAGE_CHOICES {
                        option {
                            value: "{size}",
                            selected: selected == PerPageChoice::Fixed(size),
                            "{size}"
                        }
                    }
                    if let Some(size) = custom_size {
                        option { value: "{size}", selected: true, "{size}" }
                    }
                    option {
                        value: "all",
                        selected: selected == PerPageChoice::All,
                        "All"
                    }
                }
            }
            div { style: "display: inline-flex; gap: 6px; align-items: center;",
                button {
                    style: button_style(can_previous),
                    disabled: !can_previous,
                    onclick: move |_| on_page.call(PageMove::First),
                    "«"
                }
                button {
                    style: button_style(can_previous),
                    disabled: !can_previous,
                    onclick: move |_| on_page.call(PageMove::Previous),
                    "‹"
                }
                span { "Page {state.current_page} of {state.last_page}" }
                button {
                    style: button_style(can_next),
                    disabled: !can_next,
                    onclick: move |_| on_page.call(PageMove::Next),
                    "›"
                }
                button {
                    style: button_style(can_next),
                    disabled: !can_next,
                    onclick: move |_| on_page.call(PageMove::Last),
                    "»"
                }
            }
        }
    }
}
