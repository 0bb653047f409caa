pub mod fragment;
pub mod route;

pub use fragment::{Fragment, ROUTING_PREFIX};
pub use route::{DocumentMeta, Page, RouteEntry, RouteTable};
