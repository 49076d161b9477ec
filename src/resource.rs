//! Resource Module
//!
//! Record shapes served by the REST collections.
//!
//! Each kind owns its own ID namespace and its own [`Store`](crate::store::Store).
//! Wire field names are fixed per kind:
//! - `User`: `id`, `name`, `email`, `pass`
//! - `Post`: `id`, `caption`, `url`, `stamp`
//!
//! Decoding is structural only: unknown fields are ignored and missing
//! fields fall back to empty strings. The dispatcher matches body keys
//! against [`Resource::FIELDS`] without regard to ASCII case.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type that can live in a [`Store`](crate::store::Store)
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular kind name, used in "not found" messages
    const KIND: &'static str;

    /// Wire field names, as serialized
    const FIELDS: &'static [&'static str];

    /// Unique identifier within the collection
    fn id(&self) -> &str;
}

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "pass")]
    pub password: String,
}

impl Resource for User {
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "pass"];

    fn id(&self) -> &str {
        &self.id
    }
}

/// A photo post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: String,
    pub caption: String,
    #[serde(rename = "url")]
    pub image_url: String,
    #[serde(rename = "stamp")]
    pub timestamp: String,
}

impl Resource for Post {
    const KIND: &'static str = "post";
    const FIELDS: &'static [&'static str] = &["id", "caption", "url", "stamp"];

    fn id(&self) -> &str {
        &self.id
    }
}
