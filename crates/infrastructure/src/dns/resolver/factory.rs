use async_trait::async_trait;
use dnsprobe_application::ports::{RecordResolver, ResolverFactory};
use dnsprobe_application::CheckContext;
use dnsprobe_domain::ResolutionError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

use super::targeted::TargetedResolver;
use crate::dns::transport::FixedEndpointConnector;

/// Binds a [`TargetedResolver`] to the configured server.
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetedResolverFactory;

impl TargetedResolverFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResolverFactory for TargetedResolverFactory {
    async fn bind(
        &self,
        endpoint: &str,
        ctx: &CheckContext,
    ) -> Result<Box<dyn RecordResolver>, ResolutionError> {
        let addr = resolve_endpoint(endpoint, ctx).await?;
        debug!(endpoint = %endpoint, addr = %addr, "Resolver bound");

        let connector = Arc::new(FixedEndpointConnector::new(addr));
        Ok(Box::new(TargetedResolver::new(connector)))
    }
}

/// Turn `host:port` into a socket address. Literal addresses skip the system
/// resolver; host names go through it once, bounded by the context.
pub async fn resolve_endpoint(
    endpoint: &str,
    ctx: &CheckContext,
) -> Result<SocketAddr, ResolutionError> {
    if let Ok(addr) = endpoint.parse::<SocketAddr>() {
        return Ok(addr);
    }

    ctx.guard(endpoint, async {
        tokio::net::lookup_host(endpoint)
            .await
            .map_err(|e| ResolutionError::ServerLookup {
                server: endpoint.to_string(),
                message: e.to_string(),
            })?
            .next()
            .ok_or_else(|| ResolutionError::ServerLookup {
                server: endpoint.to_string(),
                message: "no addresses found".to_string(),
            })
    })
    .await
}
