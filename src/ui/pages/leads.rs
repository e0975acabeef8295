use dioxus::prelude::*;

use crate::domain::entities::page::PageProps;
use crate::domain::entities::records::Lead;
use crate::domain::entities::resource::{Leads, Resource};
use crate::ui::pages::courses::{study_type_label, STUDY_TYPES};
use crate::ui::pages::universities::COUNTRIES;
use crate::ui::pages::use_resource_list;
use crate::ui::table::columns::{
    Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{MobileCard, RowAction, RowKey, TableConfig};

fn email_link(lead: &Lead) -> CellContent {
    CellContent::Link {
        text: lead.email.clone(),
        href: format!("mailto:{}", lead.email),
    }
}

fn study_type_badge(lead: &Lead) -> CellContent {
    match lead.study_type.as_deref().filter(|value| !value.is_empty()) {
        Some(study_type) => CellContent::badge(study_type_label(study_type), BadgeTone::Info),
        None => CellContent::missing(),
    }
}

pub const LEAD_COLUMNS: &[ColumnDefinition<Lead>] = &[
    ColumnDefinition {
        key: "name",
        label: "Name",
        sortable: true,
        align: Align::Start,
        render: |lead| CellContent::text(&lead.name),
    },
    ColumnDefinition {
        key: "email",
        label: "Email",
        sortable: true,
        align: Align::Start,
        render: email_link,
    },
    ColumnDefinition {
        key: "phone",
        label: "Phone",
        sortable: false,
        align: Align::Start,
        render: |lead| CellContent::optional(lead.phone.as_deref()),
    },
    ColumnDefinition {
        key: "country_of_residence",
        label: "Country",
        sortable: true,
        align: Align::Start,
        render: |lead| CellContent::optional(lead.country_of_residence.as_deref()),
    },
    ColumnDefinition {
        key: "study_type",
        label: "Study type",
        sortable: true,
        align: Align::Start,
        render: study_type_badge,
    },
    ColumnDefinition {
        key: "source",
        label: "Source",
        sortable: false,
        align: Align::Start,
        render: |lead| CellContent::optional(lead.source.as_deref()),
    },
    ColumnDefinition {
        key: "created_at",
        label: "Received",
        sortable: true,
        align: Align::End,
        render: |lead| CellContent::date(lead.created_at.as_deref()),
    },
];

pub fn lead_actions(lead: &Lead) -> Vec<RowAction> {
    vec![RowAction {
        label: "View",
        route: Leads::SHOW_ROUTE,
        id: RowKey::Int(lead.id),
    }]
}

pub fn lead_card(lead: &Lead) -> MobileCard {
    MobileCard {
        title: CellContent::text(&lead.name),
        subtitle: Some(email_link(lead)),
        fields: vec![
            ("Phone", CellContent::optional(lead.phone.as_deref())),
            ("Country", CellContent::optional(lead.country_of_residence.as_deref())),
            ("Study type", study_type_badge(lead)),
            ("Received", CellContent::date(lead.created_at.as_deref())),
        ],
    }
}

pub fn leads_table() -> Result<TableConfig<Lead>, ColumnError> {
    Ok(TableConfig {
        columns: ColumnRegistry::new(LEAD_COLUMNS)?,
        row_id: |lead| RowKey::Int(lead.id),
        actions: Some(lead_actions),
        mobile_card: Some(lead_card),
    })
}

#[component]
pub fn LeadsPage(initial: PageProps<Leads>) -> Element {
    let list = use_resource_list(initial);
    let controls = rsx! {
        {list.search_input()}
        {list.select("study_type", "Study type", STUDY_TYPES)}
        {list.select("country_of_residence", "Country", COUNTRIES)}
        {list.date_range()}
    };
    list.render(leads_table(), controls)
}
