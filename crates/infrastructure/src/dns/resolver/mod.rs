//! Resolver pinned to a caller-specified DNS server.
//!
//! - `targeted`: the `RecordResolver` implementation
//! - `factory`: binds a resolver to `server:port`
//! - `dispatch`: record type → answer normalization table
//! - `reverse`: PTR query names

pub mod dispatch;
pub mod factory;
pub mod reverse;
pub mod targeted;

pub use factory::{resolve_endpoint, TargetedResolverFactory};
pub use targeted::TargetedResolver;
