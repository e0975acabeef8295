use dioxus::prelude::*;

use crate::domain::entities::page::PageProps;
use crate::domain::entities::records::University;
use crate::domain::entities::resource::{Resource, Universities};
use crate::ui::pages::use_resource_list;
use crate::ui::table::columns::{
    Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{RowAction, RowKey, TableConfig};

pub const COUNTRIES: &[(&str, &str)] = &[
    ("United Kingdom", "United Kingdom"),
    ("United States", "United States"),
    ("Canada", "Canada"),
    ("Australia", "Australia"),
    ("Ireland", "Ireland"),
    ("New Zealand", "New Zealand"),
];

pub const UNIVERSITY_COLUMNS: &[ColumnDefinition<University>] = &[
    ColumnDefinition {
        key: "name",
        label: "Name",
        sortable: true,
        align: Align::Start,
        render: |university| CellContent::text(&university.name),
    },
    ColumnDefinition {
        key: "country",
        label: "Country",
        sortable: true,
        align: Align::Start,
        render: |university| CellContent::optional(university.country.as_deref()),
    },
    ColumnDefinition {
        key: "city",
        label: "City",
        sortable: false,
        align: Align::Start,
        render: |university| CellContent::optional(university.city.as_deref()),
    },
    ColumnDefinition {
        key: "ranking",
        label: "Ranking",
        sortable: true,
        align: Align::End,
        render: |university| match university.ranking {
            Some(rank) => CellContent::text(format!("#{rank}")),
            None => CellContent::missing(),
        },
    },
    ColumnDefinition {
        key: "courses_count",
        label: "Courses",
        sortable: true,
        align: Align::End,
        render: |university| match university.courses_count {
            Some(count) => CellContent::text(count.to_string()),
            None => CellContent::missing(),
        },
    },
    ColumnDefinition {
        key: "is_featured",
        label: "Featured",
        sortable: false,
        align: Align::Center,
        render: |university| {
            if university.is_featured {
                CellContent::badge("Featured", BadgeTone::Success)
            } else {
                CellContent::missing()
            }
        },
    },
    ColumnDefinition {
        key: "created_at",
        label: "Created",
        sortable: true,
        align: Align::End,
        render: |university| CellContent::date(university.created_at.as_deref()),
    },
];

pub fn university_actions(university: &University) -> Vec<RowAction> {
    vec![
        RowAction {
            label: "View",
            route: Universities::SHOW_ROUTE,
            id: RowKey::Int(university.id),
        },
        RowAction {
            label: "Edit",
            route: Universities::EDIT_ROUTE,
            id: RowKey::Int(university.id),
        },
    ]
}

pub fn universities_table() -> Result<TableConfig<University>, ColumnError> {
    Ok(TableConfig {
        columns: ColumnRegistry::new(UNIVERSITY_COLUMNS)?,
        row_id: |university| RowKey::Int(university.id),
        actions: Some(university_actions),
        mobile_card: None,
    })
}

#[component]
pub fn UniversitiesPage(initial: PageProps<Universities>) -> Element {
    let list = use_resource_list(initial);
    let controls = rsx! {
        {list.search_input()}
        {list.select("country", "Country", COUNTRIES)}
    };
    list.render(universities_table(), controls)
}
