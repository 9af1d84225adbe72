//! Route table and page resolution.

use leveling_core::{normalize_path, RenderError, RouteConfig, RouteTable};
use serde::Serialize;

/// Pages the storefront can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    Login,
    Signup,
    Help,
    NotFound,
}

impl PageKind {
    /// Handler name used in route tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Help => "help",
            Self::NotFound => "not-found",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "login" => Some(Self::Login),
            "signup" => Some(Self::Signup),
            "help" => Some(Self::Help),
            "not-found" => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// A resolved request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub kind: PageKind,
    /// Normalized request path.
    pub path: String,
    pub title: String,
}

pub const NOT_FOUND_TITLE: &str = "Page Not Found | Leveling Store";

/// The storefront's routes.
pub fn route_table() -> RouteTable {
    RouteTable::new()
        .with_route(RouteConfig::new("/", PageKind::Home.name()))
        .with_route(RouteConfig::new("/login", PageKind::Login.name()).with_title("Sign In | Leveling Store"))
        .with_route(
            RouteConfig::new("/signup", PageKind::Signup.name()).with_title("Create Account | Leveling Store"),
        )
        .with_route(RouteConfig::new("/help", PageKind::Help.name()).with_title("Help | Leveling Store"))
}

/// Resolves request paths against a route table.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(route_table())
    }
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a path, failing when no route matches.
    pub fn try_resolve(&self, path: &str) -> Result<Route, RenderError> {
        let config = self
            .table
            .resolve(path)
            .ok_or_else(|| RenderError::RouteNotFound(normalize_path(path).to_string()))?;
        let kind =
            PageKind::from_name(&config.page).ok_or_else(|| RenderError::UnknownPage(config.page.clone()))?;
        Ok(Route {
            kind,
            path: config.pattern.clone(),
            title: config.title.clone(),
        })
    }

    /// Resolve a path, falling back to the not-found page.
    pub fn resolve(&self, path: &str) -> Route {
        self.try_resolve(path).unwrap_or_else(|err| {
            tracing::debug!(%err, path, "falling back to not-found page");
            Route {
                kind: PageKind::NotFound,
                path: normalize_path(path).to_string(),
                title: NOT_FOUND_TITLE.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_route() {
        let router = Router::default();

        assert_eq!(router.resolve("/").kind, PageKind::Home);
        assert_eq!(router.resolve("/login").kind, PageKind::Login);
        assert_eq!(router.resolve("/signup/").kind, PageKind::Signup);
        assert_eq!(router.resolve("/help?topic=returns").kind, PageKind::Help);
        assert_eq!(router.resolve("/").title, "Leveling Store");
    }

    #[test]
    fn test_unknown_path_falls_back() {
        let router = Router::default();
        let route = router.resolve("/cart");

        assert_eq!(route.kind, PageKind::NotFound);
        assert_eq!(route.path, "/cart");
        assert!(matches!(router.try_resolve("/cart"), Err(RenderError::RouteNotFound(p)) if p == "/cart"));
    }

    #[test]
    fn test_unknown_page_handler() {
        let router = Router::new(RouteTable::new().with_route(RouteConfig::new("/cart", "cart")));

        assert!(matches!(router.try_resolve("/cart"), Err(RenderError::UnknownPage(_))));
        assert_eq!(router.resolve("/cart").kind, PageKind::NotFound);
    }

    #[test]
    fn test_page_names_round_trip() {
        for kind in [PageKind::Home, PageKind::Login, PageKind::Signup, PageKind::Help, PageKind::NotFound] {
            assert_eq!(PageKind::from_name(kind.name()), Some(kind));
        }
    }
}
