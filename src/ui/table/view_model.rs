use std::fmt;

use tracing::warn;

use crate::domain::entities::envelope::PaginatedEnvelope;
use crate::domain::entities::sort::{SortIndicator, SortState};
use crate::domain::entities::visibility::ColumnVisibility;
use crate::ui::table::columns::{Align, CellContent, ColumnDefinition, ColumnRegistry};
use crate::usecase::ports::navigator::RouteResolver;
use crate::usecase::services::sort_controller::sort_props;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width > 0.0 && width < breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// Stable identity of a row, used as the render key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(id) => write!(f, "{id}"),
            RowKey::Text(id) => write!(f, "{id}"),
        }
    }
}

/// Row action as configured by a page: a named route with the row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub label: &'static str,
    pub route: &'static str,
    pub id: RowKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileCard {
    pub title: CellContent,
    pub subtitle: Option<CellContent>,
    pub fields: Vec<(&'static str, CellContent)>,
}

/// Static per-page configuration of the renderer.
pub struct TableConfig<T: 'static> {
    pub columns: ColumnRegistry<T>,
    pub row_id: fn(&T) -> RowKey,
    pub actions: Option<fn(&T) -> Vec<RowAction>>,
    pub mobile_card: Option<fn(&T) -> MobileCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
    pub sortable: bool,
    pub indicator: SortIndicator,
    pub next_sort: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub key: &'static str,
    pub align: Align,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopRow {
    pub id: RowKey,
    pub cells: Vec<BodyCell>,
    pub actions: Vec<ResolvedAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileRow {
    pub id: RowKey,
    pub card: MobileCard,
    pub actions: Vec<ResolvedAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Empty { message: String },
    Desktop {
        headers: Vec<HeaderCell>,
        rows: Vec<DesktopRow>,
        with_actions: bool,
    },
    Mobile { cards: Vec<MobileRow> },
}

/// Everything the table components render for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub body: TableBody,
    pub range_label: Option<String>,
    pub hidden_count: usize,
}

pub const NO_RESULTS_MESSAGE: &str = "No results match the current filters.";
pub const NO_RECORDS_MESSAGE: &str = "Nothing here yet.";

pub struct TableInput<'a, T> {
    pub envelope: &'a PaginatedEnvelope<T>,
    pub sort: &'a SortState,
    pub visibility: &'a ColumnVisibility,
    pub viewport: Viewport,
    pub filtered: bool,
    pub routes: &'a dyn RouteResolver,
}

impl TableView {
    pub fn build<T: 'static>(config: &TableConfig<T>, input: TableInput<'_, T>) -> Self {
        let hidden_count = config.columns.hidden_count(input.visibility);
        let range_label = input.envelope.range_label();

        if input.envelope.is_empty() {
            let message = if input.filtered {
                NO_RESULTS_MESSAGE
            } else {
                NO_RECORDS_MESSAGE
            };
            return Self {
                body: TableBody::Empty {
                    message: message.to_string(),
                },
                range_label: None,
                hidden_count,
            };
        }

        let visible = config.columns.visible(input.visibility);
        let body = match input.viewport {
            Viewport::Desktop => {
                let headers = visible
                    .iter()
                    .map(|column| {
                        let props = sort_props(input.sort, column.key);
                        HeaderCell {
                            key: column.key,
                            label: column.label,
                            align: column.align,
                            sortable: column.sortable,
                            indicator: if column.sortable {
                                props.indicator
                            } else {
                                SortIndicator::Neutral
                            },
                            next_sort: props.next,
                        }
                    })
                    .collect();
                let rows = input
                    .envelope
                    .data
                    .iter()
                    .map(|row| DesktopRow {
                        id: (config.row_id)(row),
                        cells: visible
                            .iter()
                            .map(|column| BodyCell {
                                key: column.key,
                                align: column.align,
                                content: (column.render)(row),
                            })
                            .collect(),
                        actions: resolve_actions(config, row, input.routes),
                    })
                    .collect();
                TableBody::Desktop {
                    headers,
                    rows,
                    with_actions: config.actions.is_some(),
                }
            }
            Viewport::Mobile => TableBody::Mobile {
                cards: input
                    .envelope
                    .data
                    .iter()
                    .map(|row| {
                        let id = (config.row_id)(row);
                        let card = match config.mobile_card {
                            Some(render) => render(row),
                            None => fallback_card(&visible, row, &id),
                        };
                        MobileRow {
                            id,
                            card,
                            actions: resolve_actions(config, row, input.routes),
                        }
                    })
                    .collect(),
            },
        };

        Self {
            body,
            range_label,
            hidden_count,
        }
    }
}

fn fallback_card<T: 'static>(
    visible: &[&'static ColumnDefinition<T>],
    row: &T,
    id: &RowKey,
) -> MobileCard {
    let mut columns = visible.iter();
    let title = columns
        .next()
        .map(|column| (column.render)(row))
        .unwrap_or_else(|| CellContent::text(format!("#{id}")));
    MobileCard {
        title,
        subtitle: None,
        fields: columns
            .map(|column| (column.label, (column.render)(row)))
            .collect(),
    }
}

fn resolve_actions<T: 'static>(
    config: &TableConfig<T>,
    row: &T,
    routes: &dyn RouteResolver,
) -> Vec<ResolvedAction> {
    let Some(actions) = config.actions else {
        return Vec::new();
    };
    actions(row)
        .into_iter()
        .filter_map(|action| {
            match routes.resolve(action.route, &[("id", action.id.to_string())]) {
                Ok(href) => Some(ResolvedAction {
                    label: action.label,
                    href,
                }),
                Err(err) => {
                    warn!(route = action.route, error = %err, "dropping row action");
                    None
                }
            }
        })
        .collect()
}
