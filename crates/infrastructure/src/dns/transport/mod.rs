pub mod connector;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::ResolutionError;
use std::fmt;
use std::net::SocketAddr;

pub use connector::{DnsConnector, FixedEndpointConnector};

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "UDP",
            Protocol::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for sending raw DNS messages over the wire.
///
/// Every await point inside `send` is bounded by the context's deadline and
/// cancellation token.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError>;

    fn protocol(&self) -> Protocol;
}

/// Enum-dispatched transport over the two plain DNS protocols.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, ctx).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, ctx).await,
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            Self::Udp(_) => Protocol::Udp,
            Self::Tcp(_) => Protocol::Tcp,
        }
    }
}

pub fn create_transport(protocol: Protocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        Protocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        Protocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

/// Query ID from the first two header bytes, if present.
pub(crate) fn message_id(message: &[u8]) -> Option<u16> {
    match message {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

pub(crate) fn io_error(server: SocketAddr, context: &str, e: std::io::Error) -> ResolutionError {
    ResolutionError::Io {
        server: server.to_string(),
        message: format!("{}: {}", context, e),
    }
}
