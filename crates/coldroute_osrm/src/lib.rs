pub mod client;
pub mod provider;
pub mod response;

pub use client::{OsrmRouteClient, OsrmRouteClientParams};
pub use provider::{RouteError, RouteProvider, RoutedPath};
pub use response::parse_route_response;
