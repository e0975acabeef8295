use std::collections::BTreeMap;

use crate::domain::entities::resource::{Blogs, Courses, Leads, Resource, Universities, Users};
use crate::usecase::ports::navigator::{RouteError, RouteResolver};

/// Named routes of the admin back-office, with `{param}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        let mut table = Self::new();
        table.register_resource::<Universities>();
        table.register_resource::<Courses>();
        table.register_resource::<Blogs>();
        table.register_resource::<Leads>();
        table.register_resource::<Users>();
        table
    }

    pub fn insert(&mut self, name: &str, template: &str) {
        self.routes.insert(name.to_string(), template.to_string());
    }

    fn register_resource<R: Resource>(&mut self) {
        let base = format!("/admin/{}", R::NAME);
        self.insert(R::SHOW_ROUTE, &format!("{base}/{{id}}"));
        self.insert(R::EDIT_ROUTE, &format!("{base}/{{id}}/edit"));
        self.insert(R::INDEX_ROUTE, &base);
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, route_name: &str, params: &[(&str, String)]) -> Result<String, RouteError> {
        let template = self
            .routes
            .get(route_name)
            .ok_or_else(|| RouteError::Unknown(route_name.to_string()))?;

        let mut path = String::with_capacity(template.len());
        let mut used = Vec::new();
        let mut rest = template.as_str();
        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                path.push_str(&rest[start..]);
                rest = "";
                break;
            };
            let name = &after[..end];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| RouteError::MissingParam {
                    route: route_name.to_string(),
                    param: name.to_string(),
                })?;
            path.extend(url::form_urlencoded::byte_serialize(value.as_bytes()));
            used.push(name);
            rest = &after[end + 1..];
        }
        path.push_str(rest);

        let extra: Vec<_> = params
            .iter()
            .filter(|(key, _)| !used.contains(key))
            .collect();
        if !extra.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(extra.iter().map(|(key, value)| (*key, value.as_str())))
                .finish();
            path.push('?');
            path.push_str(&query);
        }
        Ok(path)
    }

    fn route_for_path(&self, path: &str) -> Option<String> {
        let path = path.split('?').next().unwrap_or(path);
        self.routes
            .iter()
            .find(|(_, template)| template.as_str() == path)
            .map(|(name, _)| name.clone())
    }
}
