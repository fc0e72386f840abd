pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use resolver::{TargetedResolver, TargetedResolverFactory};
pub use transport::{DnsConnector, FixedEndpointConnector};
