use dioxus::prelude::*;

use crate::ui::styles::{badge_style, ACTION_LINK};
use crate::ui::table::columns::CellContent;
use crate::ui::table::view_model::ResolvedAction;

/// Turns a server path into a link against the back-office origin.
/// Absolute URLs and `mailto:`/`tel:` links pass through.
pub fn absolute_href(link_base: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{href}", link_base.trim_end_matches('/'))
    } else {
        href.to_string()
    }
}

#[component]
pub fn CellView(content: CellContent, link_base: String) -> Element {
    match content {
        CellContent::Text(text) => rsx! {
            span { "{text}" }
        },
        CellContent::Muted(text) => rsx! {
            span { style: "color: #999;", "{text}" }
        },
        CellContent::Date(text) => rsx! {
            time { style: "white-space: nowrap;", "{text}" }
        },
        CellContent::Badge { text, tone } => rsx! {
            span { style: "{badge_style(tone)}", "{text}" }
        },
        CellContent::Link { text, href } => {
            let href = absolute_href(&link_base, &href);
            rsx! {
                a { href: "{href}", style: "color: #1d4ed8;", "{text}" }
            }
        }
    }
}

#[component]
pub fn RowActions(actions: Vec<ResolvedAction>, link_base: String) -> Element {
    rsx! {
        div { style: "display: inline-flex; gap: 4px; white-space: nowrap;",
            {actions.into_iter().map(|action| {
                let href = absolute_href(&link_base, &action.href);
                rsx! {
                    a {
                        key: "{action.label}",
                        href: "{href}",
                        style: ACTION_LINK,
                        "{action.label}"
                    }
                }
            })}
        }
    }
}
