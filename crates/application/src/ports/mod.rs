pub mod record_resolver;

pub use record_resolver::{LookupResult, RecordResolver, ResolverFactory};
