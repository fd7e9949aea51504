//! Resource naming conventions.
//!
//! A resource type is identified by its type name (`TicketField`). From it we
//! derive the singular resource name (`ticket_field`), used as the key of
//! self-wrapped payloads, and the plural resource name (`ticket_fields`),
//! used as the collection segment of URLs.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::rest::ResourceNames;
//!
//! let names = ResourceNames::from_type_name("zendesk::TicketField");
//! assert_eq!(names.singular(), "ticket_field");
//! assert_eq!(names.plural(), "ticket_fields");
//! ```

use convert_case::{Boundary, Case, Casing};

/// Words with the same singular and plural form.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

/// Irregular singular/plural pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("person", "people"),
    ("woman", "women"),
];

/// Word boundaries within a type name. A digit run stays attached to the
/// word before it, so `Oauth2Token` splits as `oauth2` + `token`.
const TYPE_NAME_BOUNDARIES: &[Boundary] = &[
    Boundary::UNDERSCORE,
    Boundary::HYPHEN,
    Boundary::LOWER_UPPER,
    Boundary::DIGIT_UPPER,
    Boundary::ACRONYM,
];

/// Singular and plural names of a resource type.
///
/// Computed once when the resource type is declared and stored on its
/// [`ResourceKind`](crate::rest::ResourceKind).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceNames {
    singular: String,
    plural: String,
}

impl ResourceNames {
    /// Derives the names from a possibly path-qualified type name.
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Self {
        let singular = snake_case(bare_type_name(type_name));
        let plural = pluralize(&singular);
        Self { singular, plural }
    }

    /// The snake-case singular name, e.g. `ticket`.
    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// The snake-case plural name, e.g. `tickets`.
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }
}

/// Strips any `module::` qualification from a type name.
#[must_use]
pub fn bare_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// Converts a type name to snake case: `TicketField` → `ticket_field`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    name.with_boundaries(TYPE_NAME_BOUNDARIES).to_case(Case::Snake)
}

/// Converts a snake-case name to a type name: `ticket_field` → `TicketField`.
#[must_use]
pub fn camelize(name: &str) -> String {
    name.with_boundaries(&[Boundary::UNDERSCORE])
        .to_case(Case::Pascal)
}

/// Pluralizes the last word of a snake-case name.
#[must_use]
pub fn pluralize(name: &str) -> String {
    let (prefix, word) = split_last_word(name);
    format!("{prefix}{}", pluralize_word(word))
}

/// Singularizes the last word of a snake-case name.
#[must_use]
pub fn singularize(name: &str) -> String {
    let (prefix, word) = split_last_word(name);
    format!("{prefix}{}", singularize_word(word))
}

fn split_last_word(name: &str) -> (&str, &str) {
    name.rfind('_')
        .map_or(("", name), |i| (&name[..=i], &name[i + 1..]))
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !stem.ends_with(is_vowel) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return (*singular).to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if ["sses", "uses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|s| word.ends_with(s))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_from_simple_type_name() {
        let names = ResourceNames::from_type_name("Ticket");
        assert_eq!(names.singular(), "ticket");
        assert_eq!(names.plural(), "tickets");
    }

    #[test]
    fn test_names_strip_module_path() {
        let names = ResourceNames::from_type_name("zendesk::resources::TicketField");
        assert_eq!(names.singular(), "ticket_field");
        assert_eq!(names.plural(), "ticket_fields");
    }

    #[test]
    fn test_names_are_deterministic() {
        let first = ResourceNames::from_type_name("Organization");
        let second = ResourceNames::from_type_name("Organization");
        assert_eq!(first, second);
        assert_eq!(first.plural(), pluralize(first.singular()));
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("ticket"), "tickets");
        assert_eq!(pluralize("activity"), "activities");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("search"), "searches");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("data"), "data");
        assert_eq!(pluralize("satisfaction_rating"), "satisfaction_ratings");
        assert_eq!(pluralize("user_identity"), "user_identities");
    }

    #[test]
    fn test_singularize_inverts_pluralize() {
        for word in [
            "ticket",
            "activity",
            "day",
            "status",
            "search",
            "box",
            "address",
            "person",
            "ticket_field",
            "user_identity",
            "macro",
        ] {
            assert_eq!(singularize(&pluralize(word)), word, "round trip of {word}");
        }
    }

    #[test]
    fn test_camelize_and_snake_case() {
        assert_eq!(camelize("ticket_field"), "TicketField");
        assert_eq!(camelize("user"), "User");
        assert_eq!(snake_case("SatisfactionRating"), "satisfaction_rating");
        assert_eq!(snake_case("HTTPRequest"), "http_request");
    }

    #[test]
    fn test_digits_stay_attached_to_their_word() {
        let names = ResourceNames::from_type_name("Oauth2Token");
        assert_eq!(names.singular(), "oauth2_token");
        assert_eq!(names.plural(), "oauth2_tokens");

        assert_eq!(snake_case("V2Ticket"), "v2_ticket");
        assert_eq!(camelize("oauth2_token"), "Oauth2Token");
        assert_eq!(camelize("v2_ticket"), "V2Ticket");
    }
}
