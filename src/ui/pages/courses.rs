use dioxus::prelude::*;

use crate::domain::entities::page::PageProps;
use crate::domain::entities::records::Course;
use crate::domain::entities::resource::{Courses, Resource};
use crate::ui::pages::use_resource_list;
use crate::ui::table::columns::{
    Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{RowAction, RowKey, TableConfig};

pub const STUDY_TYPES: &[(&str, &str)] = &[
    ("foundation", "Foundation"),
    ("undergraduate", "Undergraduate"),
    ("postgraduate", "Postgraduate"),
    ("phd", "PhD"),
];

pub fn study_type_label(value: &str) -> &str {
    STUDY_TYPES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

fn format_fee(course: &Course) -> CellContent {
    match course.tuition_fee {
        Some(fee) => {
            let currency = course.currency.as_deref().unwrap_or("");
            CellContent::text(format!("{currency} {fee:.0}").trim().to_string())
        }
        None => CellContent::missing(),
    }
}

pub const COURSE_COLUMNS: &[ColumnDefinition<Course>] = &[
    ColumnDefinition {
        key: "name",
        label: "Course",
        sortable: true,
        align: Align::Start,
        render: |course| CellContent::text(&course.name),
    },
    ColumnDefinition {
        key: "university",
        label: "University",
        sortable: false,
        align: Align::Start,
        render: |course| CellContent::optional(course.university.as_ref().map(|u| u.name.as_str())),
    },
    ColumnDefinition {
        key: "study_type",
        label: "Study type",
        sortable: true,
        align: Align::Start,
        render: |course| match course.study_type.as_deref() {
            Some(study_type) if !study_type.is_empty() => {
                CellContent::badge(study_type_label(study_type), BadgeTone::Info)
            }
            _ => CellContent::missing(),
        },
    },
    ColumnDefinition {
        key: "duration",
        label: "Duration",
        sortable: false,
        align: Align::Start,
        render: |course| CellContent::optional(course.duration.as_deref()),
    },
    ColumnDefinition {
        key: "intake",
        label: "Intake",
        sortable: false,
        align: Align::Start,
        render: |course| CellContent::optional(course.intake.as_deref()),
    },
    ColumnDefinition {
        key: "tuition_fee",
        label: "Tuition",
        sortable: true,
        align: Align::End,
        render: format_fee,
    },
    ColumnDefinition {
        key: "created_at",
        label: "Created",
        sortable: true,
        align: Align::End,
        render: |course| CellContent::date(course.created_at.as_deref()),
    },
];

pub fn course_actions(course: &Course) -> Vec<RowAction> {
    vec![
        RowAction {
            label: "View",
            route: Courses::SHOW_ROUTE,
            id: RowKey::Int(course.id),
        },
        RowAction {
            label: "Edit",
            route: Courses::EDIT_ROUTE,
            id: RowKey::Int(course.id),
        },
    ]
}

pub fn courses_table() -> Result<TableConfig<Course>, ColumnError> {
    Ok(TableConfig {
        columns: ColumnRegistry::new(COURSE_COLUMNS)?,
        row_id: |course| RowKey::Int(course.id),
        actions: Some(course_actions),
        mobile_card: None,
    })
}

#[component]
pub fn CoursesPage(initial: PageProps<Courses>) -> Element {
    let list = use_resource_list(initial);
    let controls = rsx! {
        {list.search_input()}
        {list.select("study_type", "Study type", STUDY_TYPES)}
        {list.date_range()}
    };
    list.render(courses_table(), controls)
}
