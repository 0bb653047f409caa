pub mod domain;
pub mod hash_router;
pub mod ports;

pub use hash_router::{HashRouter, RouteChange};
