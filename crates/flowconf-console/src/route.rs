//! Route table and navigation guard.
//!
//! Routes are either public or protected. The guard checks the session
//! before every navigation: unauthenticated users are sent to the login
//! page, and an already-authenticated user who navigates to the login
//! page is bounced to the root. Paths that match no route are treated
//! as protected.

use std::sync::Arc;

use flowconf_client::SessionTokens;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub public: bool,
    /// Target the route forwards to instead of rendering itself.
    pub redirect: Option<&'static str>,
}

pub static ROUTES: &[Route] = &[
    Route {
        path: "/login",
        name: "login",
        title: "Login",
        public: true,
        redirect: None,
    },
    Route {
        path: "/",
        name: "home",
        title: "Home",
        public: false,
        redirect: Some("/config/global"),
    },
    Route {
        path: "/config/global",
        name: "global-config",
        title: "Global Configuration",
        public: false,
        redirect: None,
    },
    Route {
        path: "/config/cluster",
        name: "cluster-config",
        title: "Cluster Configuration",
        public: false,
        redirect: None,
    },
    Route {
        path: "/config/cluster/:cluster",
        name: "cluster-detail",
        title: "Cluster Detail",
        public: false,
        redirect: None,
    },
    Route {
        path: "/config/cluster/:cluster/node/:node",
        name: "node-config",
        title: "Node Configuration",
        public: false,
        redirect: None,
    },
    Route {
        path: "/history",
        name: "history",
        title: "Configuration History",
        public: false,
        redirect: None,
    },
    Route {
        path: "/settings",
        name: "settings",
        title: "Settings",
        public: false,
        redirect: None,
    },
];

/// A matched route together with the values captured by `:param`
/// segments, in pattern order.
#[derive(Debug)]
pub struct RouteMatch {
    pub route: &'static Route,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Match a concrete path against the route table. Pattern segments
/// starting with `:` capture the corresponding path segment.
pub fn match_route(path: &str) -> Option<RouteMatch> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES.iter().find_map(|route| {
        let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            return None;
        }
        let mut params = Vec::new();
        for (pat, seg) in pattern.iter().zip(&segments) {
            if let Some(name) = pat.strip_prefix(':') {
                params.push((name, (*seg).to_string()));
            } else if pat != seg {
                return None;
            }
        }
        Some(RouteMatch { route, params })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Pre-navigation check against the current session.
pub struct RouteGuard {
    session: Arc<SessionTokens>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionTokens>) -> Self {
        Self { session }
    }

    pub fn evaluate(&self, to: &str) -> GuardDecision {
        let authenticated = self.session.is_authenticated();
        let matched = match_route(to);
        let public = matched.as_ref().is_some_and(|m| m.route.public);
        let is_login = matched.as_ref().is_some_and(|m| m.route.name == "login");

        if public {
            if is_login && authenticated {
                GuardDecision::Redirect(ROOT_PATH)
            } else {
                GuardDecision::Allow
            }
        } else if authenticated {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(LOGIN_PATH)
        }
    }
}
