//! Page selection mirrored into the URL query string.
//!
//! There is no router: the current page lives in a signal and is written to
//! `?page=..&id=..` with `history.pushState`. Back/forward navigation is
//! picked up from `popstate`.

use contracts::domain::common::RowId;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Job(RowId),
    Company(RowId),
    Saved,
    Dashboard,
    Login,
    Register,
    VerifyEmail,
}

/// What the URL query looks like for a page
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Page {
    pub fn to_query(&self) -> RouteQuery {
        let (page, id) = match self {
            Page::Home => (None, None),
            Page::Job(id) => (Some("job"), Some(id.as_str())),
            Page::Company(id) => (Some("company"), Some(id.as_str())),
            Page::Saved => (Some("saved"), None),
            Page::Dashboard => (Some("dashboard"), None),
            Page::Login => (Some("login"), None),
            Page::Register => (Some("register"), None),
            Page::VerifyEmail => (Some("verify-email"), None),
        };
        RouteQuery {
            page: page.map(str::to_string),
            id: id.map(str::to_string),
        }
    }

    /// Unknown pages and detail pages without an id fall back to home
    pub fn from_query(query: &RouteQuery) -> Self {
        let id = query
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(RowId::new);

        match (query.page.as_deref(), id) {
            (Some("job"), Some(id)) => Page::Job(id),
            (Some("company"), Some(id)) => Page::Company(id),
            (Some("saved"), _) => Page::Saved,
            (Some("dashboard"), _) => Page::Dashboard,
            (Some("login"), _) => Page::Login,
            (Some("register"), _) => Page::Register,
            (Some("verify-email"), _) => Page::VerifyEmail,
            _ => Page::Home,
        }
    }

    /// `?page=job&id=7`, or an empty string for home
    pub fn to_search(&self) -> String {
        let query_string = serde_qs::to_string(&self.to_query()).unwrap_or_default();
        if query_string.is_empty() {
            String::new()
        } else {
            format!("?{}", query_string)
        }
    }

    pub fn from_search(search: &str) -> Self {
        let query: RouteQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        Self::from_query(&query)
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Page>,
    return_to: StoredValue<Option<Page>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Page::from_search(&current_search())),
            return_to: StoredValue::new(None),
        }
    }

    pub fn current(&self) -> Page {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Page {
        self.current.get_untracked()
    }

    pub fn go(&self, page: Page) {
        if self.current.with_untracked(|p| *p == page) {
            return;
        }
        log::debug!("navigate: {:?}", page);
        self.current.set(page);
    }

    /// Sends the user to the login page and remembers where they were
    pub fn require_login(&self, from: Page) {
        self.return_to.set_value(Some(from));
        self.go(Page::Login);
    }

    /// Where to go once signed in
    pub fn after_login(&self) {
        let target = self
            .return_to
            .try_update_value(|r| r.take())
            .flatten()
            .unwrap_or(Page::Home);
        self.go(target);
    }

    pub fn init_url_sync(&self) {
        let this = *self;

        Effect::new(move |_| {
            let new_url = this.current.get().to_search();

            // Only update URL if it actually changed
            if current_search() != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let url = if new_url.is_empty() {
                            w.location().pathname().unwrap_or_else(|_| "/".to_string())
                        } else {
                            new_url
                        };
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&url),
                        );
                    }
                }
            }

            if let Some(w) = window() {
                w.scroll_to_with_x_and_y(0.0, 0.0);
            }
        });

        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            let page = Page::from_search(&current_search());
            if this.current.with_untracked(|p| *p != page) {
                this.current.set(page);
            }
        });
        on_cleanup(move || handle.remove());
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_has_empty_search() {
        assert_eq!(Page::Home.to_search(), "");
        assert_eq!(Page::from_search(""), Page::Home);
        assert_eq!(Page::from_search("?"), Page::Home);
    }

    #[test]
    fn test_detail_pages_carry_id() {
        let page = Page::Job(RowId::new("42"));
        assert_eq!(page.to_search(), "?page=job&id=42");
        assert_eq!(Page::from_search("?page=job&id=42"), page);
        assert_eq!(
            Page::from_search("?page=company&id=c-1"),
            Page::Company(RowId::new("c-1"))
        );
    }

    #[test]
    fn test_missing_id_falls_back_to_home() {
        assert_eq!(Page::from_search("?page=job"), Page::Home);
        assert_eq!(Page::from_search("?page=company&id="), Page::Home);
    }

    #[test]
    fn test_unknown_page_is_home() {
        assert_eq!(Page::from_search("?page=admin"), Page::Home);
    }

    #[test]
    fn test_simple_pages() {
        for page in [
            Page::Saved,
            Page::Dashboard,
            Page::Login,
            Page::Register,
            Page::VerifyEmail,
        ] {
            assert_eq!(Page::from_search(&page.to_search()), page);
        }
    }
}
