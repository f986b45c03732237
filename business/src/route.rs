//! Route state for page navigation.
//!
//! Entity rows navigate by path. The [`Router`] keeps the current [`Route`]
//! plus a back stack so the app can return to the page a row was opened from.

use serde::{Deserialize, Serialize};

/// Represents the current page of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Catalog landing page with the entity lists.
    #[default]
    Home,
    /// Detail page of a single entity, addressed by its link path.
    Entity { path: String },
}

impl Route {
    /// `""` and `"/"` both address the landing page.
    pub fn from_path(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            Self::Home
        } else {
            Self::Entity {
                path: path.to_owned(),
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Entity { path } => path,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Moves to `path`. Returns `false` when already there.
    pub fn navigate(&mut self, path: &str) -> bool {
        let next = Route::from_path(path);
        if next == self.current {
            return false;
        }

        log::info!("Navigating {} -> {}", self.current.path(), next.path());
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        true
    }

    /// Returns to the previous route. Returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                log::info!("Navigating back to {}", previous.path());
                self.current = previous;
                true
            }
            None => false,
        }
    }
}
