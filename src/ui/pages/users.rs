use dioxus::prelude::*;

use crate::domain::entities::page::PageProps;
use crate::domain::entities::records::User;
use crate::domain::entities::resource::{Resource, Users};
use crate::ui::pages::use_resource_list;
use crate::ui::table::columns::{
    Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{RowAction, RowKey, TableConfig};

pub const ROLES: &[(&str, &str)] = &[
    ("admin", "Admin"),
    ("editor", "Editor"),
    ("counsellor", "Counsellor"),
];

fn roles_cell(user: &User) -> CellContent {
    match user.roles.as_slice() {
        [] => CellContent::missing(),
        [role] if role == "admin" => CellContent::badge("admin", BadgeTone::Danger),
        roles => CellContent::badge(roles.join(", "), BadgeTone::Neutral),
    }
}

pub const USER_COLUMNS: &[ColumnDefinition<User>] = &[
    ColumnDefinition {
        key: "name",
        label: "Name",
        sortable: true,
        align: Align::Start,
        render: |user| CellContent::text(&user.name),
    },
    ColumnDefinition {
        key: "email",
        label: "Email",
        sortable: true,
        align: Align::Start,
        render: |user| CellContent::text(&user.email),
    },
    ColumnDefinition {
        key: "roles",
        label: "Roles",
        sortable: false,
        align: Align::Start,
        render: roles_cell,
    },
    ColumnDefinition {
        key: "email_verified_at",
        label: "Verified",
        sortable: true,
        align: Align::Center,
        render: |user| match user.email_verified_at.as_deref() {
            Some(_) => CellContent::badge("Verified", BadgeTone::Success),
            None => CellContent::badge("Pending", BadgeTone::Warning),
        },
    },
    ColumnDefinition {
        key: "created_at",
        label: "Joined",
        sortable: true,
        align: Align::End,
        render: |user| CellContent::date(user.created_at.as_deref()),
    },
];

pub fn user_actions(user: &User) -> Vec<RowAction> {
    vec![RowAction {
        label: "Edit",
        route: Users::EDIT_ROUTE,
        id: RowKey::Int(user.id),
    }]
}

pub fn users_table() -> Result<TableConfig<User>, ColumnError> {
    Ok(TableConfig {
        columns: ColumnRegistry::new(USER_COLUMNS)?,
        row_id: |user| RowKey::Int(user.id),
        actions: Some(user_actions),
        mobile_card: None,
    })
}

#[component]
pub fn UsersPage(initial: PageProps<Users>) -> Element {
    let list = use_resource_list(initial);
    let controls = rsx! {
        {list.search_input()}
        {list.select("roles", "Role", ROLES)}
    };
    list.render(users_table(), controls)
}
