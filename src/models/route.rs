//! Hash-based routing for static-host-friendly navigation.

/// Application routes for hash-based navigation.
/// URL format: `#/page` (e.g., `#/explore?search=lamp`, `#/items/42`).
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Landing page: `#/` or empty hash.
    Home,
    /// Item discovery grid, optionally seeded with a search query.
    Explore { search: Option<String> },
    /// Item detail: `#/items/<id>`.
    Item { id: String },
    /// "List an Item" form.
    ListItem,
    /// Eco impact tracker.
    Impact,
    /// Community events and stories feed.
    Community,
    /// Community event detail: `#/events/<id>`.
    Event { id: String },
    /// Signed-in user's profile and own listings.
    Profile,
    Login,
    Signup,
}

impl Route {
    /// Parse a URL hash into a Route. Unknown paths fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        if path.is_empty() {
            return Self::Home;
        }

        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path.trim_end_matches('/') {
            "explore" => Self::Explore {
                search: query.and_then(search_param),
            },
            "list" => Self::ListItem,
            "impact" => Self::Impact,
            "community" => Self::Community,
            "profile" => Self::Profile,
            "login" => Self::Login,
            "signup" => Self::Signup,
            other => {
                if let Some(id) = other.strip_prefix("items/").filter(|id| !id.is_empty()) {
                    Self::Item { id: id.to_string() }
                } else if let Some(id) = other.strip_prefix("events/").filter(|id| !id.is_empty()) {
                    Self::Event { id: id.to_string() }
                } else {
                    Self::Home
                }
            }
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Explore { search: None } => "#/explore".to_string(),
            Self::Explore {
                search: Some(query),
            } => format!("#/explore?search={}", query),
            Self::Item { id } => format!("#/items/{}", id),
            Self::ListItem => "#/list".to_string(),
            Self::Impact => "#/impact".to_string(),
            Self::Community => "#/community".to_string(),
            Self::Event { id } => format!("#/events/{}", id),
            Self::Profile => "#/profile".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Signup => "#/signup".to_string(),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

/// Extract a non-empty `search=` value from a query string.
fn search_param(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("search="))
        .map(|v| v.replace('+', " "))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(
            Route::from_hash("#/explore"),
            Route::Explore { search: None }
        );
        assert_eq!(
            Route::from_hash("#/explore?search=desk+lamp"),
            Route::Explore {
                search: Some("desk lamp".to_string())
            }
        );
        assert_eq!(
            Route::from_hash("#/items/42"),
            Route::Item {
                id: "42".to_string()
            }
        );
        assert_eq!(Route::from_hash("#/impact"), Route::Impact);
        assert_eq!(Route::from_hash("#/profile"), Route::Profile);
        assert_eq!(
            Route::from_hash("#/events/swap-fest"),
            Route::Event {
                id: "swap-fest".to_string()
            }
        );
        assert_eq!(Route::from_hash("#/login"), Route::Login);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::from_hash("#/admin"), Route::Home);
        assert_eq!(Route::from_hash("#/items/"), Route::Home);
        assert_eq!(Route::from_hash("#/events/"), Route::Home);
    }

    #[test]
    fn test_route_to_hash_round_trip() {
        let routes = [
            Route::Home,
            Route::Explore { search: None },
            Route::Item {
                id: "a-b-c".to_string(),
            },
            Route::ListItem,
            Route::Impact,
            Route::Community,
            Route::Event {
                id: "repair-cafe".to_string(),
            },
            Route::Profile,
            Route::Login,
            Route::Signup,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_empty_search_param_is_none() {
        assert_eq!(
            Route::from_hash("#/explore?search="),
            Route::Explore { search: None }
        );
    }
}
