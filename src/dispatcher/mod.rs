//! Dispatcher Module
//!
//! Stateless request router between the network layer and the stores.
//!
//! ## Responsibilities
//! - Match (method, path) against a fixed route table
//! - Invoke exactly one store operation per request
//! - Translate the outcome into a wire response
//!
//! ## Route Table (per collection, evaluated in order)
//! | Method | Pattern            | Action |
//! |--------|--------------------|--------|
//! | GET    | `/<name>[/]*`      | List   |
//! | GET    | `/<name>/<digits>` | Get    |
//! | POST   | `/<name>[/]*`      | Create |
//!
//! Anything else is Not Found. The table is built once and never mutated.

mod error;
mod handler;
mod route;

pub use error::{DispatchError, DispatchResult};
pub use handler::{CollectionEndpoint, CollectionHandler};
pub use route::{Action, PathPattern, Route};

use std::sync::Arc;

use http::Method;

use crate::protocol::{Request, Response};
use crate::resource::Resource;
use crate::store::{Collections, Store};

/// Routes requests to the collection stores
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Dispatcher {
    /// Create a dispatcher builder with an empty route table
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Dispatcher serving `/users` and `/posts` from `collections`
    pub fn new(collections: &Collections) -> Self {
        Self::builder()
            .collection("users", Arc::clone(&collections.users))
            .collection("posts", Arc::clone(&collections.posts))
            .build()
    }

    /// Route table in evaluation order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Dispatch a request and produce its response
    ///
    /// Never fails: every outcome maps to a status code.
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.route(request) {
            Ok(response) => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status.as_u16(),
                    "request served"
                );
                response
            }
            Err(err @ DispatchError::NotFound(_)) => {
                tracing::debug!(method = %request.method, path = %request.path, "{}", err);
                err.into_response()
            }
            Err(err @ DispatchError::Internal(_)) => {
                tracing::warn!(method = %request.method, path = %request.path, "{}", err);
                err.into_response()
            }
        }
    }

    /// Find the first matching route and run it
    ///
    /// Method is compared first, then the path pattern.
    fn route(&self, request: &Request) -> DispatchResult<Response> {
        for route in &self.routes {
            if route.method != request.method {
                continue;
            }
            if let Some(capture) = route.pattern.matches(&request.path) {
                tracing::trace!(
                    collection = route.collection(),
                    action = ?route.action,
                    "route matched"
                );
                return route.invoke(capture, &request.body);
            }
        }

        Err(DispatchError::no_route())
    }
}

/// Builder for Dispatcher
#[derive(Default)]
pub struct DispatcherBuilder {
    routes: Vec<Route>,
}

impl DispatcherBuilder {
    /// Register the list/get/create routes for one collection
    pub fn collection<R: Resource>(mut self, name: &str, store: Arc<Store<R>>) -> Self {
        let handler: Arc<dyn CollectionHandler> = Arc::new(CollectionEndpoint::new(name, store));
        let collection = PathPattern::Collection(name.to_string());
        let member = PathPattern::Member(name.to_string());

        self.routes.push(Route::new(
            Method::GET,
            collection.clone(),
            Action::List,
            Arc::clone(&handler),
        ));
        self.routes
            .push(Route::new(Method::GET, member, Action::Get, Arc::clone(&handler)));
        self.routes
            .push(Route::new(Method::POST, collection, Action::Create, handler));
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            routes: self.routes,
        }
    }
}
