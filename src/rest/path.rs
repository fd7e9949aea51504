//! URL path building for resources.
//!
//! A [`ResourcePath`] is the lineage of segments that locates a resource's
//! collection, e.g. `["tickets"]` or `["tickets", "123", "comments"]`.
//! Member URLs append `/<id>.json`; listing URLs append `.json`; create
//! requests target the bare collection path.
//!
//! No escaping or slash normalization is done here: segments are joined
//! exactly as given.

use std::fmt;

use serde_json::Value;

/// The ordered path segments of a resource collection.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::ResourcePath;
///
/// let path = ResourcePath::new(Vec::new(), "tickets");
/// assert_eq!(path.join(), "tickets");
/// assert_eq!(path.member("42"), "tickets/42.json");
///
/// let comments = path.nested("42", "comments");
/// assert_eq!(comments.join(), "tickets/42/comments");
/// assert_eq!(comments.listing(), "tickets/42/comments.json");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Creates a path from explicit segments, or from `collection` alone
    /// when `segments` is empty.
    #[must_use]
    pub fn new(segments: Vec<String>, collection: &str) -> Self {
        if segments.is_empty() {
            Self::collection(collection)
        } else {
            Self { segments }
        }
    }

    /// Creates a path rooted at a collection name.
    #[must_use]
    pub fn collection(collection: &str) -> Self {
        Self {
            segments: vec![collection.to_string()],
        }
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Joins the segments with `/`.
    #[must_use]
    pub fn join(&self) -> String {
        self.segments.join("/")
    }

    /// Returns the member URL, `<path>/<id>.json`.
    #[must_use]
    pub fn member(&self, id: &str) -> String {
        format!("{}/{id}.json", self.join())
    }

    /// Returns the listing URL, `<path>.json`.
    #[must_use]
    pub fn listing(&self) -> String {
        format!("{}.json", self.join())
    }

    /// Returns the URL of a member action, `<path>/<id>/<verb>.json`.
    #[must_use]
    pub fn action(&self, id: &str, verb: &str) -> String {
        format!("{}/{id}/{verb}.json", self.join())
    }

    /// Extends the lineage to a child collection of the member `id`.
    #[must_use]
    pub fn nested(&self, id: &str, child: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(id.to_string());
        segments.push(child.to_string());
        Self { segments }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Formats an id value as a path segment.
///
/// Strings are used verbatim, numbers in their JSON form. `null` yields
/// `None`.
#[must_use]
pub fn id_segment(id: &Value) -> Option<String> {
    match id {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
