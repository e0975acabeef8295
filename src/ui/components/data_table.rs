use dioxus::prelude::*;

use crate::domain::entities::sort::SortIndicator;
use crate::ui::components::cells::{CellView, RowActions};
use crate::ui::styles::{table_cell_style, table_container_style, table_header_cell_style};
use crate::ui::table::columns::Align;
use crate::ui::table::view_model::{HeaderCell, MobileRow, TableBody, TableView};

pub type SortRequest = (&'static str, Option<bool>);

pub fn indicator_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Ascending => "▲",
        SortIndicator::Descending => "▼",
        SortIndicator::Neutral => "↕",
    }
}

fn aria_sort(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Ascending => "ascending",
        SortIndicator::Descending => "descending",
        SortIndicator::Neutral => "none",
    }
}

#[component]
pub fn DataTable(
    view: TableView,
    link_base: String,
    on_sort: EventHandler<SortRequest>,
    on_width: EventHandler<f64>,
) -> Element {
    let body = match view.body {
        TableBody::Empty { message } => rsx! {
            div {
                style: "padding: 32px; text-align: center; color: #777;",
                "{message}"
            }
        },
        TableBody::Desktop {
            headers,
            rows,
            with_actions,
        } => rsx! {
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        {headers.into_iter().map(|header| {
                            let key = header.key;
                            rsx! {
                                HeaderCellView { key: "{key}", header: header, on_sort: on_sort }
                            }
                        })}
                        if with_actions {
                            th { style: "{table_header_cell_style(Align::End, false)}", "" }
                        }
                    }
                }
                tbody {
                    {rows.into_iter().map(|row| {
                        let row_key = row.id.to_string();
                        let link_base = link_base.clone();
                        rsx! {
                            tr { key: "{row_key}",
                                {row.cells.into_iter().map(|cell| rsx! {
                                    td { key: "{cell.key}", style: "{table_cell_style(cell.align)}",
                                        CellView { content: cell.content, link_base: link_base.clone() }
                                    }
                                })}
                                if with_actions {
                                    td { style: "{table_cell_style(Align::End)}",
                                        RowActions { actions: row.actions.clone(), link_base: link_base.clone() }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        },
        TableBody::Mobile { cards } => rsx! {
            div { style: "display: flex; flex-direction: column; gap: 8px; padding: 8px;",
                {cards.into_iter().map(|row| {
                    let row_key = row.id.to_string();
                    rsx! {
                        MobileCardView { key: "{row_key}", row: row, link_base: link_base.clone() }
                    }
                })}
            }
        },
    };

    rsx! {
        div {
            style: "{table_container_style()}",
            onresize: move |event: Event<ResizeData>| {
                if let Ok(size) = event.data().get_border_box_size() {
                    on_width.call(size.width);
                }
            },
            {body}
        }
    }
}

#[component]
fn HeaderCellView(header: HeaderCell, on_sort: EventHandler<SortRequest>) -> Element {
    let key = header.key;
    let next = header.next_sort;
    let sortable = header.sortable;
    let glyph = indicator_glyph(header.indicator);

    rsx! {
        th {
            style: "{table_header_cell_style(header.align, sortable)}",
            "aria-sort": aria_sort(header.indicator),
            onclick: move |_| {
                if sortable {
                    on_sort.call((key, next));
                }
            },
            "{header.label}"
            if sortable {
                span { style: "margin-left: 4px; color: #888;", "{glyph}" }
            }
        }
    }
}

#[component]
fn MobileCardView(row: MobileRow, link_base: String) -> Element {
    let card = row.card;
    rsx! {
        div { style: "border: 1px solid #ddd; border-radius: 8px; padding: 10px 12px; background: #fff;",
            div { style: "font-weight: 600;",
                CellView { content: card.title, link_base: link_base.clone() }
            }
            if let Some(subtitle) = card.subtitle {
                div { style: "color: #666; font-size: 13px;",
                    CellView { content: subtitle, link_base: link_base.clone() }
                }
            }
            dl { style: "display: grid; grid-template-columns: max-content 1fr; gap: 4px 12px; margin: 8px 0 0;",
                {card.fields.into_iter().map(|(label, content)| rsx! {
                    Fragment { key: "{label}",
                        dt { style: "color: #777;", "{label}" }
                        dd { style: "margin: 0;",
                            CellView { content: content, link_base: link_base.clone() }
                        }
                    }
                })}
            }
            if !row.actions.is_empty() {
                div { style: "margin-top: 8px; text-align: right;",
                    RowActions { actions: row.actions.clone(), link_base: link_base.clone() }
                }
            }
        }
    }
}
