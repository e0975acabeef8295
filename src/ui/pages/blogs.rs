use dioxus::prelude::*;

use crate::domain::entities::page::PageProps;
use crate::domain::entities::records::Blog;
use crate::domain::entities::resource::{Blogs, Resource};
use crate::ui::pages::use_resource_list;
use crate::ui::table::columns::{
    Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{MobileCard, RowAction, RowKey, TableConfig};

pub const CATEGORIES: &[(&str, &str)] = &[
    ("study-abroad", "Study abroad"),
    ("scholarships", "Scholarships"),
    ("visa", "Visa"),
    ("student-life", "Student life"),
    ("news", "News"),
];

pub const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("published", "Published"),
    ("archived", "Archived"),
];

pub fn status_badge(status: Option<&str>) -> CellContent {
    match status.map(str::trim).filter(|status| !status.is_empty()) {
        Some("published") => CellContent::badge("Published", BadgeTone::Success),
        Some("draft") => CellContent::badge("Draft", BadgeTone::Warning),
        Some("archived") => CellContent::badge("Archived", BadgeTone::Neutral),
        Some(other) => CellContent::badge(other, BadgeTone::Neutral),
        None => CellContent::missing(),
    }
}

pub const BLOG_COLUMNS: &[ColumnDefinition<Blog>] = &[
    ColumnDefinition {
        key: "title",
        label: "Title",
        sortable: true,
        align: Align::Start,
        render: |blog| CellContent::text(&blog.title),
    },
    ColumnDefinition {
        key: "category",
        label: "Category",
        sortable: true,
        align: Align::Start,
        render: |blog| CellContent::optional(blog.category.as_deref()),
    },
    ColumnDefinition {
        key: "status",
        label: "Status",
        sortable: true,
        align: Align::Center,
        render: |blog| status_badge(blog.status.as_deref()),
    },
    ColumnDefinition {
        key: "author",
        label: "Author",
        sortable: false,
        align: Align::Start,
        render: |blog| CellContent::optional(blog.author.as_ref().map(|author| author.name.as_str())),
    },
    ColumnDefinition {
        key: "published_at",
        label: "Published",
        sortable: true,
        align: Align::End,
        render: |blog| CellContent::date(blog.published_at.as_deref()),
    },
    ColumnDefinition {
        key: "created_at",
        label: "Created",
        sortable: true,
        align: Align::End,
        render: |blog| CellContent::date(blog.created_at.as_deref()),
    },
];

pub fn blog_actions(blog: &Blog) -> Vec<RowAction> {
    vec![
        RowAction {
            label: "View",
            route: Blogs::SHOW_ROUTE,
            id: RowKey::Text(blog.slug.clone()),
        },
        RowAction {
            label: "Edit",
            route: Blogs::EDIT_ROUTE,
            id: RowKey::Int(blog.id),
        },
    ]
}

pub fn blog_card(blog: &Blog) -> MobileCard {
    MobileCard {
        title: CellContent::text(&blog.title),
        subtitle: blog
            .author
            .as_ref()
            .map(|author| CellContent::text(format!("by {}", author.name))),
        fields: vec![
            ("Status", status_badge(blog.status.as_deref())),
            ("Category", CellContent::optional(blog.category.as_deref())),
            ("Published", CellContent::date(blog.published_at.as_deref())),
        ],
    }
}

pub fn blogs_table() -> Result<TableConfig<Blog>, ColumnError> {
    Ok(TableConfig {
        columns: ColumnRegistry::new(BLOG_COLUMNS)?,
        row_id: |blog| RowKey::Int(blog.id),
        actions: Some(blog_actions),
        mobile_card: Some(blog_card),
    })
}

#[component]
pub fn BlogsPage(initial: PageProps<Blogs>) -> Element {
    let list = use_resource_list(initial);
    let controls = rsx! {
        {list.search_input()}
        {list.select("category", "Category", CATEGORIES)}
        {list.select("status", "Status", STATUSES)}
        {list.date_range()}
    };
    list.render(blogs_table(), controls)
}
