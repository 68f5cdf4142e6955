//! Page routes of the brochure.

use std::fmt;

/// A routed page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Programs,
    Features,
    About,
    Contact,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Programs,
        Route::Features,
        Route::About,
        Route::Contact,
    ];

    /// Path of this route, as it appears after the `#` in the location.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Programs => "/dasturlar",
            Route::Features => "/afzalliklar",
            Route::About => "/biz-haqimizda",
            Route::Contact => "/aloqa",
        }
    }

    /// Resolve a path (optionally in `#/path` form) to a route.
    ///
    /// Unknown paths fall back to [`Route::Home`], mirroring the catch-all
    /// behavior of the layout route.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#');
        let path = path.trim_end_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);
        match path {
            "dasturlar" => Route::Programs,
            "afzalliklar" => Route::Features,
            "biz-haqimizda" => Route::About,
            "aloqa" => Route::Contact,
            _ => Route::Home,
        }
    }

    /// Position of this route in [`Route::ALL`].
    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Programs => 1,
            Route::Features => 2,
            Route::About => 3,
            Route::Contact => 4,
        }
    }

    /// Cycle to the next route.
    pub fn next(self) -> Self {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    /// Cycle to the previous route.
    pub fn prev(self) -> Self {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/dasturlar"), Route::Programs);
        assert_eq!(Route::from_path("#/afzalliklar"), Route::Features);
        assert_eq!(Route::from_path("biz-haqimizda/"), Route::About);
        assert_eq!(Route::from_path("#/aloqa"), Route::Contact);
        assert_eq!(Route::from_path("/unknown"), Route::Home);
    }

    #[test]
    fn test_path_resolves_back() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Route::Home.next(), Route::Programs);
        assert_eq!(Route::Contact.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Contact);
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::Contact.to_string(), "#/aloqa");
    }
}
