//! flowconf-console - Client-side state and navigation
//!
//! The pieces of console state that live outside any single view: a
//! cache store for the two session-stable resources (field catalog and
//! default configuration), and the route table with its authentication
//! guard. Both take the shared [`SessionTokens`] and [`ConsoleClient`]
//! explicitly instead of reaching for globals.
//!
//! [`SessionTokens`]: flowconf_client::SessionTokens
//! [`ConsoleClient`]: flowconf_client::ConsoleClient

pub mod route;
pub mod store;

pub use route::{GuardDecision, Route, RouteGuard, RouteMatch, ROUTES, match_route};
pub use store::ConfigStore;
