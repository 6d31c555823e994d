use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_NAVIGATION: &str = include_str!("../data/navigation.json");

/// One entry of the site navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationLink {
    pub id: u32,
    pub name: String,
    /// Target path. Entries without one still render but never match the current path.
    #[serde(default)]
    pub href: Option<String>,
}

impl NavigationLink {
    pub fn new(id: u32, name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            href: Some(href.into()),
        }
    }

    /// Exact match of `href` against the path currently displayed.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href.as_deref() == Some(current_path)
    }
}

/// Parse an ordered JSON array of navigation links.
///
/// Order is kept as-is. Ids must be unique since they key the rendered list.
pub fn parse(json: &str) -> Result<Vec<NavigationLink>> {
    let links: Vec<NavigationLink> = serde_json::from_str(json)?;

    let mut seen: HashMap<u32, &str> = HashMap::with_capacity(links.len());
    for link in &links {
        if let Some(first) = seen.insert(link.id, &link.name) {
            return Err(Error::DuplicateId {
                id: link.id,
                first: first.to_string(),
                second: link.name.clone(),
            });
        }
    }

    Ok(links)
}

/// The navigation bundled with the site.
pub fn default_links() -> Result<Vec<NavigationLink>> {
    parse(DEFAULT_NAVIGATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links_keep_declared_order() {
        let links = default_links().unwrap();
        let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Blog", "About"]);
    }

    #[test]
    fn only_exact_path_is_active() {
        let links = vec![
            NavigationLink::new(1, "Home", "/"),
            NavigationLink::new(2, "Blog", "/blog"),
        ];

        let active: Vec<&str> = links
            .iter()
            .filter(|l| l.is_active("/blog"))
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(active, vec!["Blog"]);

        assert!(!links[1].is_active("/blog/"));
        assert!(!links[1].is_active("/blog/post"));
        assert!(!links[0].is_active(""));
    }

    #[test]
    fn missing_href_loads_and_never_matches() {
        let links = parse(r#"[{ "id": 1, "name": "Soon" }]"#).unwrap();
        assert_eq!(links[0].href, None);
        assert!(!links[0].is_active("/"));
        assert!(!links[0].is_active(""));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse(
            r#"[
                { "id": 7, "name": "Home", "href": "/" },
                { "id": 7, "name": "Blog", "href": "/blog" }
            ]"#,
        )
        .unwrap_err();

        match err {
            Error::DuplicateId { id, first, second } => {
                assert_eq!(id, 7);
                assert_eq!(first, "Home");
                assert_eq!(second, "Blog");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(matches!(parse(r#"{ "id": 1 }"#), Err(Error::Json(_))));
    }
}
