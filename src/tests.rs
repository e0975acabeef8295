use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use pretty_assertions::assert_eq;
use rusqlite::Connection;
use serde_json::json;

use crate::app::{split_url, LoadedPage};
use crate::config::{AppConfig, BREAKPOINT_VAR, DB_PATH_VAR, DEBOUNCE_VAR, LOG_VAR};
use crate::domain::entities::envelope::PaginatedEnvelope;
use crate::domain::entities::filter::{
    is_blank, FilterState, FilterValue, PartialFilters, ALL_SENTINEL, PAGE, PER_PAGE, SEARCH,
    SORT_BY, SORT_TO,
};
use crate::domain::entities::page::{InertiaPage, PageProps, PropsError};
use crate::domain::entities::records::{Author, Blog, University};
use crate::domain::entities::resource::{Blogs, Leads, Resource, Universities};
use crate::domain::entities::sort::{SortIndicator, SortState};
use crate::domain::entities::visibility::ColumnVisibility;
use crate::infra::inertia::client::{InertiaClient, INERTIA_HEADER, VERSION_HEADER};
use crate::infra::inertia::routes::RouteTable;
use crate::infra::memory::MemoryVisibilityStore;
use crate::infra::sqlite::repo::SqliteVisibilityStore;
use crate::infra::sqlite::schema::init_db;
use crate::platform::desktop::webview::ensure_webview_data_dir;
use crate::ui::components::cells::absolute_href;
use crate::ui::components::data_table::indicator_glyph;
use crate::ui::pages::blogs::blogs_table;
use crate::ui::pages::universities::universities_table;
use crate::ui::state::app_state::AdminSection;
use crate::ui::styles::table_container_style;
use crate::ui::table::columns::{
    format_date, Align, BadgeTone, CellContent, ColumnDefinition, ColumnError, ColumnRegistry,
};
use crate::ui::table::view_model::{
    ResolvedAction, RowKey, TableBody, TableInput, TableView, Viewport, NO_RECORDS_MESSAGE,
    NO_RESULTS_MESSAGE,
};
use crate::usecase::ports::navigator::{
    NavigationError, Navigator, RouteError, RouteResolver, VisitOptions, VisitRequest,
};
use crate::usecase::services::filter_sync::{FilterSync, DEFAULT_DEBOUNCE};
use crate::usecase::services::history::SessionHistory;
use crate::usecase::services::pagination::{
    move_page, per_page_choice, set_per_page, PageMove, PaginationState, PerPageChoice,
};
use crate::usecase::services::query_sync::query_pairs;
use crate::usecase::services::sort_controller::{on_header_sort, sort_props, sort_state};
use crate::usecase::services::visibility_service::VisibilityService;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("edu-admin-{prefix}-{nanos}"))
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Encodes the query of `filters`, parses it back and encodes again.
fn round_trip_pairs<R: Resource>(filters: &FilterState<R>) -> Vec<(String, String)> {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_pairs(filters))
        .finish();
    query_pairs(&FilterState::<R>::from_partial(&PartialFilters::from_query(&encoded)))
}

fn blog(id: i64, title: &str, slug: &str) -> Blog {
    Blog {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        category: Some("visa".to_string()),
        status: Some("published".to_string()),
        author: Some(Author {
            id: 9,
            name: "Amina".to_string(),
        }),
        published_at: Some("2026-10-01T09:00:00Z".to_string()),
        created_at: Some("2026-09-30 12:00:00".to_string()),
    }
}

fn university(id: i64, name: &str) -> University {
    University {
        id,
        name: name.to_string(),
        country: Some("United Kingdom".to_string()),
        city: Some("Oxford".to_string()),
        ranking: Some(1),
        courses_count: Some(12),
        is_featured: true,
        created_at: Some("2026-10-16".to_string()),
    }
}

fn page_of<T>(data: Vec<T>, current_page: i64, last_page: i64, total: i64) -> PaginatedEnvelope<T> {
    let per_page = 10;
    let count = data.len() as i64;
    let from = (count > 0).then(|| (current_page - 1) * per_page + 1);
    let to = from.map(|from| from + count - 1);
    PaginatedEnvelope {
        data,
        current_page,
        last_page,
        per_page,
        total,
        from,
        to,
    }
}

/// Resolver that knows no routes at all.
struct NoRoutes;

impl RouteResolver for NoRoutes {
    fn resolve(&self, route_name: &str, _params: &[(&str, String)]) -> Result<String, RouteError> {
        Err(RouteError::Unknown(route_name.to_string()))
    }

    fn route_for_path(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Navigator that records every visit and answers with a fixed page.
struct RecordingNavigator {
    visits: RefCell<Vec<VisitRequest>>,
    page: InertiaPage,
}

impl RecordingNavigator {
    fn new(page: InertiaPage) -> Self {
        Self {
            visits: RefCell::new(Vec::new()),
            page,
        }
    }
}

impl Navigator for RecordingNavigator {
    fn visit(
        &self,
        request: VisitRequest,
    ) -> LocalBoxFuture<'static, Result<InertiaPage, NavigationError>> {
        self.visits.borrow_mut().push(request);
        let page = self.page.clone();
        Box::pin(async move { Ok(page) })
    }
}

fn blogs_page_json() -> serde_json::Value {
    json!({
        "component": "Admin/Blogs/Index",
        "props": {
            "blogs": {
                "data": [
                    {
                        "id": 1,
                        "title": "Student visas explained",
                        "slug": "student-visas-explained",
                        "category": "visa",
                        "status": "published",
                        "author": { "id": 9, "name": "Amina" },
                        "published_at": "2026-10-01T09:00:00Z",
                        "created_at": "2026-09-30 12:00:00"
                    }
                ],
                "current_page": 1,
                "last_page": 1,
                "per_page": 10,
                "total": 1,
                "from": 1,
                "to": 1,
                "links": [],
                "path": "http://127.0.0.1:8000/admin/blogs"
            },
            "filters": []
        },
        "url": "/admin/blogs?search=visa",
        "version": "b7c1"
    })
}

#[test]
fn rapid_edits_collapse_into_one_visit() {
    let routes = RouteTable::admin();
    let initial = FilterState::<Blogs>::defaults();
    let mut sync = FilterSync::<Blogs>::new();
    assert_eq!(sync.observe(&initial), None);

    let a = sync
        .observe(&initial.with_field(SEARCH, "a"))
        .expect("first edit should schedule");
    let ab = sync
        .observe(&initial.with_field(SEARCH, "ab"))
        .expect("second edit should schedule");
    let abc = sync
        .observe(&initial.with_field(SEARCH, "abc"))
        .expect("third edit should schedule");

    assert_eq!(sync.fire(a, &routes).expect("route should resolve"), None);
    assert_eq!(sync.fire(ab, &routes).expect("route should resolve"), None);
    let request = sync
        .fire(abc, &routes)
        .expect("route should resolve")
        .expect("latest edit should fire");

    assert_eq!(request.path, "/admin/blogs");
    assert_eq!(request.query, pairs(&[("page", "1"), ("search", "abc")]));
    assert_eq!(request.options, VisitOptions::FILTER_SYNC);
    assert_eq!(request.sequence, 1);
    assert_eq!(request.url(), "/admin/blogs?page=1&search=abc");
    assert_eq!(sync.fire(abc, &routes).expect("route should resolve"), None);
    assert_eq!(DEFAULT_DEBOUNCE, Duration::from_millis(400));
}

#[test]
fn blank_and_sentinel_values_are_not_sent() {
    let filters = FilterState::<Blogs>::defaults()
        .with_field(SEARCH, "x")
        .with_field("category", "")
        .with_field("status", ALL_SENTINEL);

    assert_eq!(query_pairs(&filters), pairs(&[("page", "1"), ("search", "x")]));
    assert!(is_blank(None));
    assert!(is_blank(Some(&FilterValue::empty())));
    assert!(is_blank(Some(&FilterValue::from(ALL_SENTINEL))));
    assert!(!is_blank(Some(&FilterValue::from("0"))));
    assert!(!is_blank(Some(&FilterValue::Number(0))));
}

#[test]
fn mount_state_does_not_trigger_a_visit() {
    let incoming = PartialFilters::from_json(&json!({ "search": "visa", "page": 2 }));
    let initial = FilterState::<Blogs>::from_partial(&incoming);
    let mut sync = FilterSync::<Blogs>::new();

    assert_eq!(sync.observe(&initial), None);
    assert_eq!(sync.observe(&initial.clone()), None);
    assert_eq!(initial.text(SEARCH), "visa");
    assert_eq!(initial.page(), 2);
}

#[test]
fn header_sort_cycles_asc_desc_clear() {
    let filters = FilterState::<Blogs>::defaults().with_raw(PAGE, 3_i64);
    assert_eq!(sort_props(&sort_state(&filters), "title").indicator, SortIndicator::Neutral);
    assert_eq!(sort_props(&sort_state(&filters), "title").next, Some(false));

    let asc = on_header_sort(&filters, "title", Some(false));
    assert_eq!(asc.sort_by(), "title");
    assert_eq!(asc.sort_to(), "asc");
    assert_eq!(asc.page(), 1);
    assert_eq!(sort_props(&sort_state(&asc), "title").indicator, SortIndicator::Ascending);
    assert_eq!(sort_props(&sort_state(&asc), "title").next, Some(true));

    let desc = on_header_sort(&asc, "title", Some(true));
    assert_eq!(desc.sort_to(), "desc");
    assert_eq!(sort_props(&sort_state(&desc), "title").indicator, SortIndicator::Descending);
    assert_eq!(sort_props(&sort_state(&desc), "title").next, None);

    let cleared = on_header_sort(&desc, "title", None);
    assert_eq!(sort_state(&cleared), SortState::Unsorted);
    assert!(query_pairs(&cleared)
        .iter()
        .all(|(key, _)| key != SORT_BY && key != SORT_TO));

    let other = on_header_sort(&desc, "created_at", Some(false));
    assert_eq!(sort_props(&sort_state(&other), "title").indicator, SortIndicator::Neutral);
    assert_eq!(sort_props(&sort_state(&other), "created_at").indicator, SortIndicator::Ascending);
}

#[test]
fn pagination_stops_at_boundaries() {
    let filters = FilterState::<Blogs>::defaults();
    let first = page_of(vec![blog(1, "A", "a")], 1, 3, 21);

    assert_eq!(move_page(&filters, &first, PageMove::Previous), None);
    assert_eq!(move_page(&filters, &first, PageMove::First), None);
    let next = move_page(&filters, &first, PageMove::Next).expect("next should move");
    assert_eq!(next.page(), 2);
    assert_eq!(
        move_page(&filters, &first, PageMove::Last)
            .expect("last should move")
            .page(),
        3
    );

    let on_last = filters.with_raw(PAGE, 3_i64);
    let last = page_of(vec![blog(21, "U", "u")], 3, 3, 21);
    assert_eq!(move_page(&on_last, &last, PageMove::Next), None);
    assert_eq!(move_page(&on_last, &last, PageMove::Last), None);
    assert_eq!(move_page(&on_last, &last, PageMove::To(9)), None);
    assert_eq!(move_page(&on_last, &last, PageMove::To(0)), None);
    assert_eq!(
        move_page(&on_last, &last, PageMove::Previous)
            .expect("previous should move")
            .page(),
        2
    );

    let state = PaginationState::from_envelope(&on_last, &last);
    assert!(state.can_previous);
    assert!(!state.can_next);
    assert_eq!(state.range_label.as_deref(), Some("21–21 of 21"));
}

#[test]
fn per_page_change_returns_to_first_page() {
    let filters = FilterState::<Blogs>::defaults().with_raw(PAGE, 2_i64);
    let envelope = page_of(vec![blog(11, "K", "k")], 2, 5, 42);

    let resized = set_per_page(&filters, &envelope, PerPageChoice::Fixed(50))
        .expect("new size should apply");
    assert_eq!(resized.per_page(), 50);
    assert_eq!(resized.page(), 1);
    assert_eq!(set_per_page(&resized, &envelope, PerPageChoice::Fixed(50)), None);

    let all = set_per_page(&filters, &envelope, PerPageChoice::All).expect("all should apply");
    assert_eq!(all.per_page(), 42);
    assert_eq!(per_page_choice(&all, &envelope), PerPageChoice::All);
    assert_eq!(per_page_choice(&filters, &envelope), PerPageChoice::Fixed(10));

    let empty = page_of(Vec::<Blog>::new(), 1, 1, 0);
    assert_eq!(set_per_page(&filters, &empty, PerPageChoice::All), None);
    assert_eq!(PerPageChoice::parse("all"), Some(PerPageChoice::All));
    assert_eq!(PerPageChoice::parse("0"), None);
}

#[test]
fn column_visibility_defaults_toggles_and_shows_all() {
    let service = VisibilityService::new(Arc::new(MemoryVisibilityStore::new()));
    let config = blogs_table().expect("blog columns should be valid");

    let initial = service.load("blogsTable");
    assert!(config.columns.keys().all(|key| initial.is_visible(key)));
    assert_eq!(config.columns.hidden_count(&initial), 0);

    let hidden = service.toggle("blogsTable", &initial, "category", false);
    let hidden = service.toggle("blogsTable", &hidden, "author", false);
    assert!(!hidden.is_visible("category"));
    assert_eq!(config.columns.hidden_count(&hidden), 2);
    assert_eq!(service.load("blogsTable"), hidden);
    assert_eq!(service.load("leadsTable"), ColumnVisibility::new());

    let shown = service.show_all("blogsTable", &hidden, config.columns.keys());
    assert_eq!(config.columns.hidden_count(&shown), 0);
    assert!(config.columns.keys().all(|key| shown.is_visible(key)));
    assert_eq!(service.load("blogsTable"), shown);
}

#[test]
fn query_round_trip_is_stable() {
    let filters = FilterState::<Blogs>::defaults()
        .with_field(SEARCH, "visa & co")
        .with_field("status", "draft")
        .with_field(PER_PAGE, 50_i64)
        .with_raw(SORT_BY, "title")
        .with_raw(SORT_TO, "desc")
        .with_raw(PAGE, 3_i64);

    assert_eq!(round_trip_pairs(&filters), query_pairs(&filters));

    let parsed = FilterState::<Blogs>::from_partial(&PartialFilters::from_query(
        "?search=visa+%26+co&status=draft&page=3&per_page=50&sort_by=title&sort_to=desc",
    ));
    assert_eq!(parsed, filters);
    assert_eq!(parsed.page(), 3);
    assert_eq!(parsed.per_page(), 50);
}

#[test]
fn empty_result_renders_empty_state_without_range() {
    let props = PageProps::<Blogs>::from_props(&json!({
        "blogs": {
            "data": [],
            "current_page": 4,
            "last_page": 0,
            "per_page": 10,
            "total": 0,
            "from": null,
            "to": null
        },
        "filters": { "search": "nothing" }
    }))
    .expect("empty envelope should decode");
    assert_eq!(props.envelope.current_page, 1);
    assert_eq!(props.envelope.last_page, 1);
    assert_eq!(props.envelope.range_label(), None);

    let config = blogs_table().expect("blog columns should be valid");
    let routes = RouteTable::admin();
    let build = |filtered: bool| {
        TableView::build(
            &config,
            TableInput {
                envelope: &props.envelope,
                sort: &SortState::Unsorted,
                visibility: &ColumnVisibility::new(),
                viewport: Viewport::Desktop,
                filtered,
                routes: &routes,
            },
        )
    };

    let filtered = build(true);
    assert_eq!(
        filtered.body,
        TableBody::Empty {
            message: NO_RESULTS_MESSAGE.to_string()
        }
    );
    assert_eq!(filtered.range_label, None);
    assert_eq!(
        build(false).body,
        TableBody::Empty {
            message: NO_RECORDS_MESSAGE.to_string()
        }
    );

    let filters = FilterState::<Blogs>::from_partial(&props.filters);
    let state = PaginationState::from_envelope(&filters, &props.envelope);
    assert!(!state.can_previous);
    assert!(!state.can_next);
}

#[test]
fn stale_responses_are_not_current() {
    let routes = RouteTable::admin();
    let initial = FilterState::<Leads>::defaults();
    let mut sync = FilterSync::<Leads>::new();
    sync.observe(&initial);

    let first = sync
        .observe(&initial.with_field(SEARCH, "ann"))
        .expect("edit should schedule");
    let first = sync
        .fire(first, &routes)
        .expect("route should resolve")
        .expect("edit should fire");

    let second = sync
        .observe(&initial.with_field(SEARCH, "anna"))
        .expect("edit should schedule");
    let second = sync
        .fire(second, &routes)
        .expect("route should resolve")
        .expect("edit should fire");

    assert_eq!(second.sequence, first.sequence + 1);
    assert!(!sync.is_current(first.sequence));
    assert!(sync.is_current(second.sequence));
}

#[test]
fn cancelled_sync_never_fires() {
    let routes = RouteTable::admin();
    let initial = FilterState::<Leads>::defaults();
    let mut sync = FilterSync::<Leads>::new();
    sync.observe(&initial);
    let ticket = sync
        .observe(&initial.with_field(SEARCH, "ann"))
        .expect("edit should schedule");

    sync.cancel();

    assert_eq!(sync.fire(ticket, &routes).expect("cancel should not error"), None);
    assert_eq!(sync.observe(&initial.with_field(SEARCH, "bob")), None);
    assert!(!sync.is_current(0));
}

#[test]
fn unknown_index_route_is_reported() {
    let initial = FilterState::<Blogs>::defaults();
    let mut sync = FilterSync::<Blogs>::new();
    sync.observe(&initial);
    let ticket = sync
        .observe(&initial.with_field(SEARCH, "x"))
        .expect("edit should schedule");

    let result = sync.fire(ticket, &NoRoutes);

    assert_eq!(
        result,
        Err(RouteError::Unknown("admin.blogs.index".to_string()))
    );
}

const DUPLICATE_COLUMNS: &[ColumnDefinition<Blog>] = &[
    ColumnDefinition {
        key: "title",
        label: "Title",
        sortable: true,
        align: Align::Start,
        render: |blog| CellContent::text(&blog.title),
    },
    ColumnDefinition {
        key: "title",
        label: "Headline",
        sortable: false,
        align: Align::Start,
        render: |blog| CellContent::text(&blog.slug),
    },
];

const UNNAMED_COLUMNS: &[ColumnDefinition<Blog>] = &[ColumnDefinition {
    key: "",
    label: "Slug",
    sortable: false,
    align: Align::Start,
    render: |blog| CellContent::text(&blog.slug),
}];

#[test]
fn column_registry_rejects_bad_keys() {
    assert_eq!(
        ColumnRegistry::new(DUPLICATE_COLUMNS).err(),
        Some(ColumnError::DuplicateKey("title"))
    );
    assert_eq!(
        ColumnRegistry::new(UNNAMED_COLUMNS).err(),
        Some(ColumnError::EmptyKey("Slug"))
    );
    assert!(universities_table().is_ok());
}

#[test]
fn desktop_view_keeps_column_order_and_resolves_actions() {
    let config = blogs_table().expect("blog columns should be valid");
    let envelope = page_of(
        vec![
            blog(1, "Student visas explained", "student-visas-explained"),
            blog(2, "Scholarships 2027", "scholarships-2027"),
        ],
        1,
        1,
        2,
    );
    let visibility = ColumnVisibility::new().toggled("category", false);
    let filters = FilterState::<Blogs>::defaults()
        .with_raw(SORT_BY, "title")
        .with_raw(SORT_TO, "asc");
    let routes = RouteTable::admin();

    let view = TableView::build(
        &config,
        TableInput {
            envelope: &envelope,
            sort: &sort_state(&filters),
            visibility: &visibility,
            viewport: Viewport::Desktop,
            filtered: false,
            routes: &routes,
        },
    );

    assert_eq!(view.hidden_count, 1);
    assert_eq!(view.range_label.as_deref(), Some("1–2 of 2"));
    let TableBody::Desktop {
        headers,
        rows,
        with_actions,
    } = view.body
    else {
        panic!("desktop viewport should render a table");
    };
    assert!(with_actions);
    assert_eq!(
        headers.iter().map(|header| header.key).collect::<Vec<_>>(),
        vec!["title", "status", "author", "published_at", "created_at"]
    );
    assert_eq!(headers[0].indicator, SortIndicator::Ascending);
    assert_eq!(headers[0].next_sort, Some(true));
    assert_eq!(headers[2].indicator, SortIndicator::Neutral);
    assert!(!headers[2].sortable);

    assert_eq!(
        rows.iter().map(|row| row.id.clone()).collect::<Vec<_>>(),
        vec![RowKey::Int(1), RowKey::Int(2)]
    );
    assert_eq!(rows[0].cells.len(), headers.len());
    assert_eq!(
        rows[0].cells[1].content,
        CellContent::badge("Published", BadgeTone::Success)
    );
    assert_eq!(
        rows[0].cells[3].content,
        CellContent::Date("01 Oct 2026".to_string())
    );
    assert_eq!(
        rows[0].actions,
        vec![
            ResolvedAction {
                label: "View",
                href: "/admin/blogs/student-visas-explained".to_string(),
            },
            ResolvedAction {
                label: "Edit",
                href: "/admin/blogs/1/edit".to_string(),
            },
        ]
    );
}

#[test]
fn unresolvable_actions_are_dropped() {
    let config = blogs_table().expect("blog columns should be valid");
    let envelope = page_of(vec![blog(1, "A", "a")], 1, 1, 1);

    let view = TableView::build(
        &config,
        TableInput {
            envelope: &envelope,
            sort: &SortState::Unsorted,
            visibility: &ColumnVisibility::new(),
            viewport: Viewport::Desktop,
            filtered: false,
            routes: &NoRoutes,
        },
    );

    let TableBody::Desktop { rows, .. } = view.body else {
        panic!("desktop viewport should render a table");
    };
    assert!(rows[0].actions.is_empty());
}

#[test]
fn mobile_view_falls_back_to_visible_columns() {
    let config = universities_table().expect("university columns should be valid");
    let envelope = page_of(vec![university(3, "University of Oxford")], 1, 1, 1);
    let visibility = ColumnVisibility::new().toggled("country", false);
    let routes = RouteTable::admin();

    let view = TableView::build(
        &config,
        TableInput {
            envelope: &envelope,
            sort: &SortState::Unsorted,
            visibility: &visibility,
            viewport: Viewport::from_width(420.0, 768.0),
            filtered: false,
            routes: &routes,
        },
    );

    let TableBody::Mobile { cards } = view.body else {
        panic!("narrow viewport should render cards");
    };
    assert_eq!(cards.len(), 1);
    let card = &cards[0].card;
    assert_eq!(card.title, CellContent::text("University of Oxford"));
    assert_eq!(card.subtitle, None);
    assert_eq!(
        card.fields,
        vec![
            ("City", CellContent::text("Oxford")),
            ("Ranking", CellContent::text("#1")),
            ("Courses", CellContent::text("12")),
            ("Featured", CellContent::badge("Featured", BadgeTone::Success)),
            ("Created", CellContent::Date("16 Oct 2026".to_string())),
        ]
    );
    assert_eq!(cards[0].actions.len(), 2);
    assert_eq!(cards[0].actions[1].href, "/admin/universities/3/edit");
}

#[test]
fn mobile_view_prefers_page_card() {
    let config = blogs_table().expect("blog columns should be valid");
    let envelope = page_of(vec![blog(1, "Student visas explained", "sv")], 1, 1, 1);
    let routes = RouteTable::admin();

    let view = TableView::build(
        &config,
        TableInput {
            envelope: &envelope,
            sort: &SortState::Unsorted,
            visibility: &ColumnVisibility::new(),
            viewport: Viewport::Mobile,
            filtered: false,
            routes: &routes,
        },
    );

    let TableBody::Mobile { cards } = view.body else {
        panic!("mobile viewport should render cards");
    };
    assert_eq!(cards[0].card.title, CellContent::text("Student visas explained"));
    assert_eq!(cards[0].card.subtitle, Some(CellContent::text("by Amina")));
    assert_eq!(cards[0].card.fields[0].0, "Status");
}

#[test]
fn viewport_switches_below_breakpoint() {
    assert_eq!(Viewport::from_width(767.0, 768.0), Viewport::Mobile);
    assert_eq!(Viewport::from_width(768.0, 768.0), Viewport::Desktop);
    assert_eq!(Viewport::from_width(1280.0, 768.0), Viewport::Desktop);
    assert_eq!(Viewport::from_width(0.0, 768.0), Viewport::Desktop);
}

#[test]
fn sqlite_store_persists_per_storage_key() {
    let temp_dir = unique_test_dir("visibility");
    let db_path = temp_dir.join("preferences.sqlite");

    let store = SqliteVisibilityStore::open(db_path.clone()).expect("store should open");
    let service = VisibilityService::new(Arc::new(store));
    let blogs = service.toggle("blogsTable", &ColumnVisibility::new(), "category", false);
    service.toggle("leadsTable", &ColumnVisibility::new(), "phone", false);
    let blogs = service.toggle("blogsTable", &blogs, "author", false);

    let reopened = SqliteVisibilityStore::open(db_path.clone()).expect("store should reopen");
    let service = VisibilityService::new(Arc::new(reopened));
    assert_eq!(service.load("blogsTable"), blogs);
    assert_eq!(
        service.load("leadsTable").entries(),
        &BTreeMap::from([("phone".to_string(), false)])
    );
    assert_eq!(service.load("usersTable"), ColumnVisibility::new());

    let shown = service.show_all("blogsTable", &blogs, ["category", "author"]);
    assert_eq!(service.load("blogsTable"), shown);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn init_db_creates_visibility_table() {
    let temp_dir = unique_test_dir("init-db");
    let db_path = temp_dir.join("preferences.sqlite");

    let result = init_db(&db_path);
    assert!(result.is_ok(), "init_db should succeed: {result:?}");
    assert!(init_db(&db_path).is_ok(), "init_db should be idempotent");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'column_visibility'",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");
    assert_eq!(table_count, 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn page_props_accept_empty_filter_array() {
    let page: InertiaPage =
        serde_json::from_value(blogs_page_json()).expect("page should deserialize");
    let props = PageProps::<Blogs>::from_page(&page).expect("props should decode");

    assert_eq!(props.filters, PartialFilters::default());
    assert_eq!(props.envelope.data.len(), 1);
    assert_eq!(props.envelope.data[0].slug, "student-visas-explained");
    assert_eq!(page.version.as_deref(), Some("b7c1"));

    let loaded = LoadedPage::from_page(AdminSection::Blogs, &page).expect("blogs should load");
    assert!(matches!(loaded, LoadedPage::Blogs(_)));
    assert!(matches!(
        LoadedPage::from_page(AdminSection::Leads, &page),
        Err(PropsError::Missing("leads"))
    ));
}

#[test]
fn page_props_drop_null_filters() {
    let props = PageProps::<Blogs>::from_props(&json!({
        "blogs": { "data": [], "current_page": 1, "last_page": 1, "per_page": 10, "total": 0 },
        "filters": { "search": "visa", "status": null, "page": "2" }
    }))
    .expect("props should decode");

    assert!(props.filters.iter().all(|(key, _)| key != "status"));
    let filters = FilterState::<Blogs>::from_partial(&props.filters);
    assert_eq!(filters.text(SEARCH), "visa");
    assert_eq!(filters.text("status"), "");
    assert_eq!(filters.page(), 2);
    assert_eq!(filters.per_page(), 10);

    assert!(matches!(
        PageProps::<Blogs>::from_props(&json!({ "blogs": { "data": "nope" } })),
        Err(PropsError::Malformed { key: "blogs", .. })
    ));
}

#[test]
fn route_table_resolves_named_routes() {
    let routes = RouteTable::admin();

    assert_eq!(
        routes.resolve("admin.blogs.edit", &[("id", "7".to_string())]),
        Ok("/admin/blogs/7/edit".to_string())
    );
    assert_eq!(
        routes.resolve(
            "admin.blogs.edit",
            &[("id", "7".to_string()), ("tab", "seo".to_string())]
        ),
        Ok("/admin/blogs/7/edit?tab=seo".to_string())
    );
    assert_eq!(
        routes.resolve("admin.leads.show", &[]),
        Err(RouteError::MissingParam {
            route: "admin.leads.show".to_string(),
            param: "id".to_string(),
        })
    );
    assert_eq!(
        routes.resolve("admin.nope.index", &[]),
        Err(RouteError::Unknown("admin.nope.index".to_string()))
    );
    assert_eq!(
        routes.route_for_path("/admin/leads?page=2"),
        Some("admin.leads.index".to_string())
    );
    assert_eq!(routes.route_for_path("/admin/leads/4/edit"), None);
}

#[test]
fn reset_keeps_page_size_and_sort() {
    let filters = FilterState::<Blogs>::defaults()
        .with_field(SEARCH, "visa")
        .with_field("status", "draft")
        .with_field(PER_PAGE, 50_i64)
        .with_raw(SORT_BY, "title")
        .with_raw(SORT_TO, "desc")
        .with_raw(PAGE, 4_i64);
    assert!(filters.has_active_filters());

    let cleared = filters.cleared();

    assert!(!cleared.has_active_filters());
    assert_eq!(cleared.text(SEARCH), "");
    assert_eq!(cleared.text("status"), "");
    assert_eq!(cleared.per_page(), 50);
    assert_eq!(cleared.sort_by(), "title");
    assert_eq!(cleared.sort_to(), "desc");
    assert_eq!(cleared.page(), 1);
}

#[test]
fn filter_edits_return_to_first_page() {
    let filters = FilterState::<Universities>::defaults().with_raw(PAGE, 3_i64);

    assert_eq!(filters.with_field("country", "Canada").page(), 1);
    assert_eq!(filters.with_field(PAGE, 5_i64).page(), 5);
    assert_eq!(filters.with_field(PER_PAGE, 20_i64).page(), 3);
    assert!(!filters.with_field("country", ALL_SENTINEL).has_active_filters());
}

#[test]
fn filter_sync_visit_reaches_navigator() {
    let page: InertiaPage =
        serde_json::from_value(blogs_page_json()).expect("page should deserialize");
    let navigator = RecordingNavigator::new(page);
    let routes = RouteTable::admin();
    let initial = FilterState::<Blogs>::defaults();
    let mut sync = FilterSync::<Blogs>::new();
    sync.observe(&initial);
    let ticket = sync
        .observe(&initial.with_field(SEARCH, "visa"))
        .expect("edit should schedule");
    let request = sync
        .fire(ticket, &routes)
        .expect("route should resolve")
        .expect("edit should fire");
    let sequence = request.sequence;

    let loaded = block_on(navigator.visit(request)).expect("visit should succeed");
    let props = PageProps::<Blogs>::from_page(&loaded).expect("props should decode");

    assert!(sync.is_current(sequence));
    assert_eq!(props.envelope.total, 1);
    let visits = navigator.visits.borrow();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].url(), "/admin/blogs?page=1&search=visa");
    assert!(visits[0].options.replace);
}

#[test]
fn session_history_replaces_filter_visits() {
    let visit = |path: &str, query: &[(&str, &str)], options: VisitOptions| VisitRequest {
        route_name: String::new(),
        path: path.to_string(),
        query: pairs(query),
        options,
        sequence: 0,
    };
    let mut history = SessionHistory::new();

    history.record(&visit("/admin/blogs", &[], VisitOptions::PAGE_VISIT));
    history.record(&visit("/admin/blogs", &[("search", "v")], VisitOptions::FILTER_SYNC));
    history.record(&visit("/admin/blogs", &[("search", "vi")], VisitOptions::FILTER_SYNC));
    assert!(!history.can_go_back());

    history.record(&visit("/admin/leads", &[], VisitOptions::PAGE_VISIT));
    assert!(history.can_go_back());
    assert_eq!(history.back(), Some("/admin/blogs?search=vi".to_string()));
    assert_eq!(history.back(), None);
}

#[test]
fn back_navigation_maps_url_to_section() {
    let (path, filters) = split_url("/admin/courses?study_type=phd&search=data+science&from=");
    assert_eq!(path, "/admin/courses");
    assert_eq!(
        filters.query_pairs(),
        pairs(&[("search", "data science"), ("study_type", "phd")])
    );

    let route = RouteTable::admin()
        .route_for_path(path)
        .expect("index path should be known");
    assert_eq!(AdminSection::from_route(&route), Some(AdminSection::Courses));
    assert_eq!(split_url("/admin/users"), ("/admin/users", PartialFilters::default()));
}

#[test]
fn config_reads_overrides_and_ignores_invalid_values() {
    let vars = HashMap::from([
        (DEBOUNCE_VAR, "250"),
        (BREAKPOINT_VAR, "wide"),
        (LOG_VAR, "debug"),
        (DB_PATH_VAR, "/tmp/edu-admin/prefs.sqlite"),
    ]);

    let config = AppConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

    assert_eq!(config.debounce, Duration::from_millis(250));
    assert_eq!(config.mobile_breakpoint, 768.0);
    assert_eq!(config.log_level, tracing::Level::DEBUG);
    assert_eq!(
        config.db_path,
        Some(PathBuf::from("/tmp/edu-admin/prefs.sqlite"))
    );
    assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");

    let defaults = AppConfig::from_lookup(|_| None);
    assert_eq!(defaults.debounce, DEFAULT_DEBOUNCE);
    assert_eq!(defaults.log_level, tracing::Level::INFO);
}

#[test]
fn inertia_client_sends_protocol_headers() {
    let base = url::Url::parse("http://127.0.0.1:8000").expect("base url should parse");
    let client = InertiaClient::new(base);
    let request = VisitRequest {
        route_name: "admin.blogs.index".to_string(),
        path: "/admin/blogs".to_string(),
        query: pairs(&[("search", "visa")]),
        options: VisitOptions::FILTER_SYNC,
        sequence: 1,
    };

    let endpoint = client.endpoint(&request).expect("endpoint should join");
    assert_eq!(endpoint.as_str(), "http://127.0.0.1:8000/admin/blogs?search=visa");

    let headers = client.request_headers();
    assert_eq!(
        headers.get(INERTIA_HEADER).and_then(|value| value.to_str().ok()),
        Some("true")
    );
    assert!(headers.get(VERSION_HEADER).is_none());
}

#[test]
fn cell_formatting_helpers() {
    assert_eq!(format_date("2026-10-16T08:30:00Z"), "16 Oct 2026");
    assert_eq!(format_date("2026-10-16 08:30:00"), "16 Oct 2026");
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(CellContent::date(None), CellContent::missing());
    assert_eq!(CellContent::optional(Some("  ")), CellContent::missing());

    assert_eq!(
        absolute_href("http://127.0.0.1:8000/", "/admin/blogs/1/edit"),
        "http://127.0.0.1:8000/admin/blogs/1/edit"
    );
    assert_eq!(absolute_href("http://x", "mailto:a@b.c"), "mailto:a@b.c");

    assert_eq!(indicator_glyph(SortIndicator::Ascending), "▲");
    assert_eq!(indicator_glyph(SortIndicator::Descending), "▼");
    assert_eq!(indicator_glyph(SortIndicator::Neutral), "↕");
}

#[test]
fn table_container_scrolls_inside_flex_column() {
    let style = table_container_style();
    assert!(style.contains("overflow: auto"));
    assert!(style.contains("min-height: 0"));
}

#[test]
fn ensure_webview_data_dir_creates_subdir() {
    let temp_dir = unique_test_dir("webview");

    let webview_dir = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

    assert_eq!(webview_dir, temp_dir.join("webview"));
    assert!(webview_dir.is_dir());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn echoed_filter_text_survives_query_round_trip() {
    let echoed = PartialFilters::from_json(&json!({
        "search": "visa",
        "page": "02",
        "per_page": "+20",
        "status": null
    }));
    let filters = FilterState::<Blogs>::from_partial(&echoed);

    assert_eq!(
        query_pairs(&filters),
        pairs(&[("page", "02"), ("per_page", "+20"), ("search", "visa")])
    );
    assert_eq!(round_trip_pairs(&filters), query_pairs(&filters));
    assert_eq!(filters.page(), 2);

    let parsed = PartialFilters::from_query("page=02&per_page=30");
    let parsed = FilterState::<Blogs>::from_partial(&parsed);
    assert_eq!(parsed.text(PAGE), "02");
    assert_eq!(parsed.per_page(), 30);
}

#[test]
fn inertia_client_keeps_base_path_prefix() {
    let base = url::Url::parse("http://127.0.0.1:8000/app/").expect("base url should parse");
    let client = InertiaClient::new(base);
    let request = VisitRequest {
        route_name: "admin.leads.index".to_string(),
        path: "/admin/leads".to_string(),
        query: pairs(&[("page", "2")]),
        options: VisitOptions::FILTER_SYNC,
        sequence: 1,
    };

    let endpoint = client.endpoint(&request).expect("endpoint should join");

    assert_eq!(endpoint.as_str(), "http://127.0.0.1:8000/app/admin/leads?page=2");
}

/// Drives `use_resource_filters` inside a `VirtualDom` on a paused clock.
mod filter_hook {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use dioxus::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{blogs_page_json, pairs, RecordingNavigator};
    use crate::config::AppConfig;
    use crate::domain::entities::filter::SEARCH;
    use crate::domain::entities::page::{InertiaPage, PageProps};
    use crate::domain::entities::resource::Blogs;
    use crate::infra::inertia::routes::RouteTable;
    use crate::infra::memory::MemoryVisibilityStore;
    use crate::ui::state::app_state::AppServices;
    use crate::ui::state::filter_hook::{use_resource_filters, FilterHandle};
    use crate::usecase::ports::navigator::{Navigator, VisitOptions};
    use crate::usecase::services::history::SessionHistory;
    use crate::usecase::services::visibility_service::VisibilityService;

    #[derive(Clone, Default)]
    struct Slots {
        handle: Rc<RefCell<Option<FilterHandle<Blogs>>>>,
        mounted: Rc<RefCell<Option<Signal<bool>>>>,
    }

    #[component]
    fn HarnessRoot() -> Element {
        let slots = use_context::<Slots>();
        let mounted = use_signal(|| true);
        slots.mounted.borrow_mut().replace(mounted);
        rsx! {
            if mounted() {
                BlogFilters {}
            }
        }
    }

    #[component]
    fn BlogFilters() -> Element {
        let initial = use_context::<PageProps<Blogs>>();
        let handle = use_resource_filters::<Blogs>(initial);
        use_context::<Slots>().handle.borrow_mut().replace(handle);
        let search = handle.filters.read().text(SEARCH);
        rsx! { "{search}" }
    }

    fn mount(filters: serde_json::Value, navigator: Rc<RecordingNavigator>) -> (VirtualDom, Slots) {
        let props = PageProps::<Blogs>::from_props(&json!({
            "blogs": { "data": [], "current_page": 1, "last_page": 1, "per_page": 10, "total": 0 },
            "filters": filters
        }))
        .expect("props should decode");
        let navigator: Rc<dyn Navigator> = navigator;
        let services = AppServices {
            navigator,
            routes: Rc::new(RouteTable::admin()),
            visibility: VisibilityService::new(Arc::new(MemoryVisibilityStore::new())),
            config: AppConfig::from_lookup(|_| None),
            history: Rc::new(RefCell::new(SessionHistory::new())),
        };
        let slots = Slots::default();
        let mut dom = VirtualDom::new(HarnessRoot)
            .with_root_context(services)
            .with_root_context(props)
            .with_root_context(slots.clone());
        dom.rebuild_in_place();
        (dom, slots)
    }

    fn recorder() -> Rc<RecordingNavigator> {
        let page: InertiaPage =
            serde_json::from_value(blogs_page_json()).expect("page should deserialize");
        Rc::new(RecordingNavigator::new(page))
    }

    /// Processes tasks, effects and renders until `window` of clock time passed.
    async fn settle(dom: &mut VirtualDom, window: Duration) {
        let deadline = tokio::time::Instant::now() + window;
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn type_search(dom: &VirtualDom, slots: &Slots, value: &str) {
        let handle = (*slots.handle.borrow()).expect("filters should be mounted");
        dom.in_runtime(|| handle.set_field(SEARCH, value));
    }

    #[tokio::test(start_paused = true)]
    async fn typing_burst_sends_single_visit() {
        let navigator = recorder();
        let (mut dom, slots) = mount(json!([]), Rc::clone(&navigator));
        settle(&mut dom, Duration::from_millis(50)).await;

        for value in ["a", "ab", "abc"] {
            type_search(&dom, &slots, value);
            settle(&mut dom, Duration::from_millis(100)).await;
        }
        assert!(navigator.visits.borrow().is_empty());

        settle(&mut dom, Duration::from_secs(1)).await;

        let visits = navigator.visits.borrow();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].path, "/admin/blogs");
        assert_eq!(visits[0].query, pairs(&[("page", "1"), ("search", "abc")]));
        assert_eq!(visits[0].options, VisitOptions::FILTER_SYNC);
    }

    #[tokio::test(start_paused = true)]
    async fn mounting_with_server_filters_sends_nothing() {
        let navigator = recorder();
        let (mut dom, slots) = mount(json!({ "search": "preset" }), Rc::clone(&navigator));

        settle(&mut dom, Duration::from_secs(1)).await;

        assert!(navigator.visits.borrow().is_empty());
        let handle = (*slots.handle.borrow()).expect("filters should be mounted");
        let search = dom.in_runtime(|| handle.filters.peek().text(SEARCH));
        assert_eq!(search, "preset");
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_inside_window_cancels_visit() {
        let navigator = recorder();
        let (mut dom, slots) = mount(json!([]), Rc::clone(&navigator));
        settle(&mut dom, Duration::from_millis(50)).await;

        type_search(&dom, &slots, "abc");
        settle(&mut dom, Duration::from_millis(100)).await;
        let mut mounted = (*slots.mounted.borrow()).expect("root should be mounted");
        dom.in_runtime(|| mounted.set(false));
        settle(&mut dom, Duration::from_secs(1)).await;

        assert!(navigator.visits.borrow().is_empty());
    }
}
