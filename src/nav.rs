//! Navigation state for the top bar
//!
//! The router owns the current route and picks the content. This module
//! keeps the address bar path next to it and decides which tab carries the
//! active marker.

use crate::Route;

/// One of the three buttons in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    About,
    Services,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::About, Tab::Services];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::Services => "Services",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Tab::Home => "/",
            Tab::About => "/about",
            Tab::Services => "/services",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Home => Route::Home {},
            Tab::About => Route::About {},
            Tab::Services => Route::Services {},
        }
    }
}

/// Current location of the application
///
/// Built by the shell from the router and handed down to the top bar as a
/// prop, so the bar renders the same way with or without a live router.
/// `pathname` is the address bar path as typed, which may differ from the
/// canonical path of `route` (`/about/` still routes to `About`).
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    route: Route,
    pathname: String,
}

/// Drops the query string and fragment from a location.
fn pathname(location: &str) -> &str {
    location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
}

impl NavigationState {
    /// State reached by navigating to `route` through the router.
    pub fn new(route: Route) -> Self {
        let pathname = route.to_string();
        Self { route, pathname }
    }

    /// State for a route the router resolved from `location`.
    pub fn at(route: Route, location: &str) -> Self {
        Self {
            route,
            pathname: pathname(location).to_string(),
        }
    }

    /// Resolves a location typed in the address bar.
    ///
    /// Never fails: a path outside the route table lands on `Route::Unmatched`.
    pub fn from_path(location: &str) -> Self {
        let path = pathname(location);
        let route = path.parse::<Route>().unwrap_or_else(|_| Route::Unmatched {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        });
        Self {
            route,
            pathname: path.to_string(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> &str {
        &self.pathname
    }

    /// Exact path comparison: `/about/` and `/about/team` do not activate `/about`.
    pub fn is_active(&self, tab: Tab) -> bool {
        self.pathname == tab.path()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| self.is_active(*tab))
    }

    pub fn button_class(&self, tab: Tab) -> &'static str {
        if self.is_active(tab) {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    }
}
