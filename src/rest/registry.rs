//! Resource kind declarations and the association registry.
//!
//! Every resource type is described by a [`ResourceKind`]: its names, its
//! [`Capability`], its attribute [`Whitelist`] and the associations it
//! declares. Kinds are collected by a [`RegistryBuilder`] and wired into a
//! [`Registry`] once all of them are declared. Wiring checks that every
//! association points at a declared kind, so a typo in a `has_many` fails at
//! startup rather than on first use.
//!
//! # Example
//!
//! ```rust
//! use zendesk_api::rest::{Capability, Registry, ResourceKind};
//! use zendesk_api::HttpMethod;
//!
//! let ticket = ResourceKind::builder("Ticket")
//!     .allow(HttpMethod::Put, &["status", "comment"])
//!     .has("requester")
//!     .class_name("User")
//!     .has_many("comments")
//!     .build()
//!     .unwrap();
//! let comment = ResourceKind::builder("Comment")
//!     .capability(Capability::ReadOnly)
//!     .build()
//!     .unwrap();
//! let user = ResourceKind::builder("User").build().unwrap();
//!
//! let registry = Registry::builder()
//!     .declare(ticket)
//!     .declare(comment)
//!     .declare(user)
//!     .wire()
//!     .unwrap();
//!
//! let ticket = registry.kind("Ticket").unwrap();
//! assert_eq!(ticket.names().plural(), "tickets");
//! assert_eq!(ticket.association("comments").unwrap().class_name(), "Comment");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::HttpMethod;
use crate::rest::naming::{bare_type_name, camelize, singularize};
use crate::rest::{Attributes, RegistryError, ResourceNames, Whitelist};

/// The operations a resource kind may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch one record by id.
    Find,
    /// List a collection.
    All,
    /// Create a record.
    Create,
    /// Update a persisted record.
    Update,
    /// Delete a persisted record.
    Destroy,
    /// Invoke a declared member action.
    Verb,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
            Self::Verb => "verb",
        };
        f.write_str(name)
    }
}

/// What a resource kind can do against the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Find and list only.
    ReadOnly,
    /// Create only.
    CreateOnly,
    /// Find, list, create, update, destroy and member actions.
    #[default]
    Full,
}

impl Capability {
    /// Returns `true` if this capability includes `operation`.
    #[must_use]
    pub const fn allows(self, operation: Operation) -> bool {
        match self {
            Self::ReadOnly => matches!(operation, Operation::Find | Operation::All),
            Self::CreateOnly => matches!(operation, Operation::Create),
            Self::Full => true,
        }
    }
}

/// Whether an association points at one record or a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Declared with `has`.
    One,
    /// Declared with `has_many`.
    Many,
}

/// A declared relationship to another resource kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Association {
    name: String,
    cardinality: Cardinality,
    class_name: String,
}

impl Association {
    fn new(name: &str, cardinality: Cardinality) -> Self {
        let class_name = match cardinality {
            Cardinality::One => camelize(name),
            Cardinality::Many => camelize(&singularize(name)),
        };
        Self {
            name: name.to_string(),
            cardinality,
            class_name,
        }
    }

    /// The association name, e.g. `comments`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a `has` or a `has_many`.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// The type name of the target kind.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// A custom member action, sent to `<path>/<id>/<name>.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verb {
    name: String,
    method: HttpMethod,
}

impl Verb {
    /// The action name, e.g. `mark_as_spam`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The HTTP method the action is sent with.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }
}

/// The descriptor of one resource type.
///
/// Names are computed once, when the kind is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceKind {
    type_name: String,
    names: ResourceNames,
    capability: Capability,
    whitelist: Whitelist,
    associations: Vec<Association>,
    verbs: Vec<Verb>,
}

impl ResourceKind {
    /// Starts declaring a kind. Module-qualified names are accepted.
    #[must_use]
    pub fn builder(type_name: &str) -> ResourceKindBuilder {
        ResourceKindBuilder::new(type_name)
    }

    /// The bare type name, e.g. `TicketField`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The singular and plural resource names.
    #[must_use]
    pub const fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// The capability of this kind.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        self.capability
    }

    /// The write whitelist of this kind.
    #[must_use]
    pub const fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// All declared associations, in declaration order.
    #[must_use]
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    /// Looks up an association by name.
    #[must_use]
    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// All declared member actions, in declaration order.
    #[must_use]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Looks up a member action by name.
    #[must_use]
    pub fn verb(&self, name: &str) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.name == name)
    }

    /// Returns [`Capability::allows`] for this kind.
    #[must_use]
    pub const fn supports(&self, operation: Operation) -> bool {
        self.capability.allows(operation)
    }

    /// Filters `attributes` for a write with `method`.
    ///
    /// A self-wrapped store (`{"ticket": {...}}` for `Ticket`) has its inner
    /// mapping filtered and is re-wrapped under the singular name. The store
    /// itself is never modified.
    #[must_use]
    pub fn whitelist_attributes(&self, attributes: &Attributes, method: HttpMethod) -> Value {
        let singular = self.names.singular();
        if let Some(inner) = attributes.nested(singular) {
            let mut wrapped = Map::new();
            wrapped.insert(
                singular.to_string(),
                Value::Object(self.whitelist.filter(inner, method)),
            );
            return Value::Object(wrapped);
        }
        Value::Object(self.whitelist.filter(attributes.as_map(), method))
    }
}

/// Builder for [`ResourceKind`].
#[derive(Debug)]
pub struct ResourceKindBuilder {
    type_name: String,
    capability: Capability,
    whitelist: Whitelist,
    associations: Vec<Association>,
    verbs: Vec<Verb>,
    dangling_class_name: Option<String>,
}

impl ResourceKindBuilder {
    fn new(type_name: &str) -> Self {
        Self {
            type_name: bare_type_name(type_name).to_string(),
            capability: Capability::default(),
            whitelist: Whitelist::new(),
            associations: Vec::new(),
            verbs: Vec::new(),
            dangling_class_name: None,
        }
    }

    /// Sets the capability. Defaults to [`Capability::Full`].
    #[must_use]
    pub const fn capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    /// Permits `keys` in write bodies sent with `method`.
    #[must_use]
    pub fn allow(mut self, method: HttpMethod, keys: &[&str]) -> Self {
        self.whitelist = self.whitelist.allow(method, keys);
        self
    }

    /// Declares a single related resource.
    #[must_use]
    pub fn has(mut self, name: &str) -> Self {
        self.associations.push(Association::new(name, Cardinality::One));
        self
    }

    /// Declares a collection of related resources.
    #[must_use]
    pub fn has_many(mut self, name: &str) -> Self {
        self.associations.push(Association::new(name, Cardinality::Many));
        self
    }

    /// Declares a member action sent with `method`.
    ///
    /// Redeclaring a name replaces its method.
    #[must_use]
    pub fn verb(mut self, method: HttpMethod, name: &str) -> Self {
        self.verbs.retain(|v| v.name != name);
        self.verbs.push(Verb {
            name: name.to_string(),
            method,
        });
        self
    }

    /// Overrides the target type of the most recent association.
    #[must_use]
    pub fn class_name(mut self, class_name: &str) -> Self {
        match self.associations.last_mut() {
            Some(association) => association.class_name = class_name.to_string(),
            None => self.dangling_class_name = Some(class_name.to_string()),
        }
        self
    }

    /// Builds the kind, computing its names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTypeName`] if the type name, an
    /// association name, an association target or a verb name is not an
    /// identifier, and
    /// [`RegistryError::DanglingClassName`] if `class_name` was called
    /// before any association.
    pub fn build(self) -> Result<ResourceKind, RegistryError> {
        validate_type_name(&self.type_name)?;
        if let Some(class_name) = self.dangling_class_name {
            return Err(RegistryError::DanglingClassName {
                resource: self.type_name,
                class_name,
            });
        }
        for association in &self.associations {
            validate_type_name(&association.name)?;
            validate_type_name(&association.class_name)?;
        }
        for verb in &self.verbs {
            validate_type_name(&verb.name)?;
        }

        Ok(ResourceKind {
            names: ResourceNames::from_type_name(&self.type_name),
            type_name: self.type_name,
            capability: self.capability,
            whitelist: self.whitelist,
            associations: self.associations,
            verbs: self.verbs,
        })
    }
}

fn validate_type_name(name: &str) -> Result<(), RegistryError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidTypeName {
            name: name.to_string(),
        })
    }
}

/// The wired set of resource kinds.
///
/// Immutable once built; shared by every resource through its client.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: HashMap<String, Arc<ResourceKind>>,
}

// Verify Registry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
};

impl Registry {
    /// Starts collecting declarations.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the kind declared under `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownResource`] if no such kind exists.
    pub fn kind(&self, type_name: &str) -> Result<Arc<ResourceKind>, RegistryError> {
        self.kinds
            .get(bare_type_name(type_name))
            .cloned()
            .ok_or_else(|| RegistryError::UnknownResource {
                type_name: type_name.to_string(),
            })
    }

    /// Returns `true` if `type_name` is declared.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.kinds.contains_key(bare_type_name(type_name))
    }

    /// The number of declared kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The declared type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Collects [`ResourceKind`] declarations before wiring.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    kinds: Vec<ResourceKind>,
}

impl RegistryBuilder {
    /// Adds a kind.
    #[must_use]
    pub fn declare(mut self, kind: ResourceKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Adds several kinds.
    #[must_use]
    pub fn declare_all(mut self, kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        self.kinds.extend(kinds);
        self
    }

    /// Resolves every association and freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateResource`] if a type name is
    /// declared twice, or [`RegistryError::UndeclaredAssociation`] if an
    /// association targets a type that was not declared.
    pub fn wire(self) -> Result<Registry, RegistryError> {
        let mut kinds: HashMap<String, Arc<ResourceKind>> = HashMap::new();
        for kind in self.kinds {
            let type_name = kind.type_name.clone();
            if kinds.contains_key(&type_name) {
                return Err(RegistryError::DuplicateResource { type_name });
            }
            kinds.insert(type_name, Arc::new(kind));
        }

        let mut declared: Vec<&Arc<ResourceKind>> = kinds.values().collect();
        declared.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        for kind in declared {
            for association in &kind.associations {
                if !kinds.contains_key(&association.class_name) {
                    return Err(RegistryError::UndeclaredAssociation {
                        resource: kind.type_name.clone(),
                        association: association.name.clone(),
                        target: association.class_name.clone(),
                    });
                }
            }
        }

        tracing::debug!("Wired resource registry with {} kinds", kinds.len());
        Ok(Registry { kinds })
    }
}
