use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::domain::entities::records::{Blog, Course, Lead, University, User};

/// One admin list. Implemented by zero-sized markers so that filter state,
/// envelopes and page props of different lists never mix.
pub trait Resource: Debug + Clone + Copy + PartialEq + Eq + Default + 'static {
    type Record: Debug + Clone + PartialEq + DeserializeOwned + 'static;

    /// Props key of the paginated envelope and route segment, e.g. `blogs`.
    const NAME: &'static str;
    const TITLE: &'static str;
    const INDEX_ROUTE: &'static str;
    const EDIT_ROUTE: &'static str;
    const SHOW_ROUTE: &'static str;
    /// Identity of the table for column visibility persistence.
    const STORAGE_KEY: &'static str;
    /// Resource-specific filter fields on top of the universal ones.
    const EXTRA_FIELDS: &'static [&'static str];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Universities;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Courses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blogs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leads;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Users;

impl Resource for Universities {
    type Record = University;

    const NAME: &'static str = "universities";
    const TITLE: &'static str = "Universities";
    const INDEX_ROUTE: &'static str = "admin.universities.index";
    const EDIT_ROUTE: &'static str = "admin.universities.edit";
    const SHOW_ROUTE: &'static str = "admin.universities.show";
    const STORAGE_KEY: &'static str = "universitiesTable";
    const EXTRA_FIELDS: &'static [&'static str] = &["country"];
}

impl Resource for Courses {
    type Record = Course;

    const NAME: &'static str = "courses";
    const TITLE: &'static str = "Courses";
    const INDEX_ROUTE: &'static str = "admin.courses.index";
    const EDIT_ROUTE: &'static str = "admin.courses.edit";
    const SHOW_ROUTE: &'static str = "admin.courses.show";
    const STORAGE_KEY: &'static str = "coursesTable";
    const EXTRA_FIELDS: &'static [&'static str] = &["study_type", "university_id"];
}

impl Resource for Blogs {
    type Record = Blog;

    const NAME: &'static str = "blogs";
    const TITLE: &'static str = "Blogs";
    const INDEX_ROUTE: &'static str = "admin.blogs.index";
    const EDIT_ROUTE: &'static str = "admin.blogs.edit";
    const SHOW_ROUTE: &'static str = "admin.blogs.show";
    const STORAGE_KEY: &'static str = "blogsTable";
    const EXTRA_FIELDS: &'static [&'static str] = &["category", "status"];
}

impl Resource for Leads {
    type Record = Lead;

    const NAME: &'static str = "leads";
    const TITLE: &'static str = "Leads";
    const INDEX_ROUTE: &'static str = "admin.leads.index";
    const EDIT_ROUTE: &'static str = "admin.leads.edit";
    const SHOW_ROUTE: &'static str = "admin.leads.show";
    const STORAGE_KEY: &'static str = "leadsTable";
    const EXTRA_FIELDS: &'static [&'static str] = &["study_type", "country_of_residence"];
}

impl Resource for Users {
    type Record = User;

    const NAME: &'static str = "users";
    const TITLE: &'static str = "Users";
    const INDEX_ROUTE: &'static str = "admin.users.index";
    const EDIT_ROUTE: &'static str = "admin.users.edit";
    const SHOW_ROUTE: &'static str = "admin.users.show";
    const STORAGE_KEY: &'static str = "usersTable";
    const EXTRA_FIELDS: &'static [&'static str] = &["roles"];
}
