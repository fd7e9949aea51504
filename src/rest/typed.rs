//! Typed wrappers over [`Resource`].
//!
//! The [`resource!`](crate::resource) macro declares a struct wrapping a
//! generic [`Resource`] with one typed getter and one `set_<field>` setter
//! per listed field. Everything else (`id`, `save`, `destroy`, raw access)
//! is reached through `Deref`/`DerefMut` to the inner resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use zendesk_api::resource;
//!
//! resource! {
//!     /// A macro applied to tickets.
//!     pub struct Macro {
//!         title: String,
//!         active: bool,
//!     }
//! }
//!
//! let mut m: Macro = client.build(json!({"title": "Close"}))?;
//! m.set_active(true);
//! assert_eq!(m.title().as_deref(), Some("Close"));
//! m.save().await?;
//! ```

use crate::clients::Connection;
use crate::rest::Resource;

/// A typed view of a [`Resource`] of one declared kind.
pub trait TypedResource<C: Connection>: Sized {
    /// The type name this wrapper is registered under.
    const TYPE_NAME: &'static str;

    /// Wraps a generic resource.
    fn from_resource(resource: Resource<C>) -> Self;

    /// Unwraps the generic resource.
    fn into_resource(self) -> Resource<C>;
}

/// Declares a typed resource wrapper.
///
/// Each field gets a getter returning `Option<T>` (`None` when absent or not
/// convertible) and a chaining `set_<field>` setter. Field types must
/// implement `DeserializeOwned` and `Into<serde_json::Value>`.
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<C: $crate::clients::Connection = $crate::clients::HttpClient> {
            inner: $crate::rest::Resource<C>,
        }

        impl<C: $crate::clients::Connection> $crate::rest::TypedResource<C> for $name<C> {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_resource(resource: $crate::rest::Resource<C>) -> Self {
                Self { inner: resource }
            }

            fn into_resource(self) -> $crate::rest::Resource<C> {
                self.inner
            }
        }

        impl<C: $crate::clients::Connection> $name<C> {
            $(
                $(#[$field_meta])*
                #[must_use]
                pub fn $field(&self) -> ::core::option::Option<$ty> {
                    self.inner.get(stringify!($field))
                }

                $crate::__paste::paste! {
                    #[doc = "Sets `" $field "`."]
                    pub fn [<set_ $field>](&mut self, value: impl ::core::convert::Into<$ty>) -> &mut Self {
                        let value: $ty = value.into();
                        self.inner.set(stringify!($field), value);
                        self
                    }
                }
            )*
        }

        impl<C: $crate::clients::Connection> ::core::ops::Deref for $name<C> {
            type Target = $crate::rest::Resource<C>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl<C: $crate::clients::Connection> ::core::ops::DerefMut for $name<C> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.inner
            }
        }

        impl<C: $crate::clients::Connection> ::core::clone::Clone for $name<C> {
            fn clone(&self) -> Self {
                Self { inner: self.inner.clone() }
            }
        }

        impl<C: $crate::clients::Connection> ::core::fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.inner).finish()
            }
        }

        impl<C: $crate::clients::Connection> ::core::fmt::Display for $name<C> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.inner, f)
            }
        }
    };
}
