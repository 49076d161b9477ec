//! Route table entries
//!
//! A route is a (method, path pattern, action) triple bound to one
//! collection handler. Patterns are matched segment by segment without a
//! regex engine:
//!
//! ```text
//! /users          Collection("users")   -> Some(None)
//! /users///       Collection("users")   -> Some(None)
//! /users/42       Member("users")       -> Some(Some("42"))
//! /users/abc      Member("users")       -> None
//! /usersx         either                -> None
//! ```

use std::fmt;
use std::sync::Arc;

use http::Method;

use crate::protocol::Response;
use super::error::DispatchResult;
use super::handler::CollectionHandler;

/// Store operation a route invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Create,
}

/// Path shapes a collection route can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// `/<name>` followed by zero or more `/`
    Collection(String),

    /// `/<name>/<digits>`, capturing the digits
    Member(String),
}

impl PathPattern {
    /// Match `path` against this pattern
    ///
    /// Returns `None` when the path does not match, otherwise the captured
    /// id segment (always `None` for collection patterns).
    pub fn matches<'p>(&self, path: &'p str) -> Option<Option<&'p str>> {
        match self {
            PathPattern::Collection(name) => {
                let rest = strip_collection(path, name)?;
                rest.bytes().all(|b| b == b'/').then_some(None)
            }
            PathPattern::Member(name) => {
                let id = strip_collection(path, name)?.strip_prefix('/')?;
                let numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
                numeric.then_some(Some(id))
            }
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Collection(name) => write!(f, "/{}[/]*", name),
            PathPattern::Member(name) => write!(f, "/{}/<digits>", name),
        }
    }
}

fn strip_collection<'p>(path: &'p str, name: &str) -> Option<&'p str> {
    path.strip_prefix('/')?.strip_prefix(name)
}

/// One entry of the dispatcher's route table
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub action: Action,
    handler: Arc<dyn CollectionHandler>,
}

impl Route {
    pub(crate) fn new(
        method: Method,
        pattern: PathPattern,
        action: Action,
        handler: Arc<dyn CollectionHandler>,
    ) -> Self {
        Self {
            method,
            pattern,
            action,
            handler,
        }
    }

    /// Name of the collection this route serves
    pub fn collection(&self) -> &str {
        self.handler.name()
    }

    /// Run the bound store operation
    pub(crate) fn invoke(&self, capture: Option<&str>, body: &[u8]) -> DispatchResult<Response> {
        match self.action {
            Action::List => self.handler.list(),
            Action::Get => self.handler.get(capture),
            Action::Create => self.handler.create(body),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .field("action", &self.action)
            .finish()
    }
}
