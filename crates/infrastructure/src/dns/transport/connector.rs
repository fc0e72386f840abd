use super::{create_transport, Protocol, TransportResponse};
use async_trait::async_trait;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::ResolutionError;
use std::net::SocketAddr;
use tracing::debug;

/// The resolver's only way onto the network.
///
/// Whatever server the system would normally pick, an implementation always
/// talks to its own endpoint. Test doubles implement this to stub the wire.
#[async_trait]
pub trait DnsConnector: Send + Sync {
    async fn exchange(
        &self,
        protocol: Protocol,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError>;

    fn endpoint(&self) -> SocketAddr;
}

/// Connector pinned to one caller-supplied DNS server.
#[derive(Debug, Clone, Copy)]
pub struct FixedEndpointConnector {
    endpoint: SocketAddr,
}

impl FixedEndpointConnector {
    pub fn new(endpoint: SocketAddr) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl DnsConnector for FixedEndpointConnector {
    async fn exchange(
        &self,
        protocol: Protocol,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError> {
        debug!(
            endpoint = %self.endpoint,
            protocol = %protocol,
            remaining_ms = ctx.remaining().map(|d| d.as_millis() as u64),
            "Dialing fixed endpoint"
        );

        create_transport(protocol, self.endpoint)
            .send(message_bytes, ctx)
            .await
    }

    fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }
}
