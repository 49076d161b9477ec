//! The store instances backing the REST collections.

use std::sync::Arc;

use crate::resource::{Post, User};
use super::Store;

/// One store per collection, constructed explicitly at startup
#[derive(Clone, Default)]
pub struct Collections {
    pub users: Arc<Store<User>>,
    pub posts: Arc<Store<Post>>,
}

impl Collections {
    /// Empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Collections holding the startup fixture records
    pub fn seeded() -> Self {
        let users = Store::with_records([User {
            id: "1".to_string(),
            name: "bob".to_string(),
            email: "bob@gmail.com".to_string(),
            password: "bob123".to_string(),
        }]);

        let posts = Store::with_records([Post {
            id: "1".to_string(),
            caption: "Selfie".to_string(),
            image_url: "flower.jpg".to_string(),
            timestamp: "2018-09-22T12:42:31Z".to_string(),
        }]);

        Self {
            users: Arc::new(users),
            posts: Arc::new(posts),
        }
    }
}
