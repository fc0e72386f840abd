use super::{io_error, message_id, DnsTransport, Protocol, TransportResponse};
use async_trait::async_trait;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::ResolutionError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP to a single fixed server.
///
/// A fresh ephemeral socket is bound per query and connected to the server,
/// so the kernel drops datagrams from any other source.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError> {
        let server = self.server_addr;
        let label = server.to_string();
        let expected_id = message_id(message_bytes);

        let socket = ctx
            .guard(&label, async {
                let socket = UdpSocket::bind(self.bind_addr())
                    .await
                    .map_err(|e| io_error(server, "failed to bind UDP socket", e))?;
                socket
                    .connect(server)
                    .await
                    .map_err(|e| io_error(server, "failed to connect UDP socket", e))?;
                Ok(socket)
            })
            .await?;

        let bytes_sent = ctx
            .guard(&label, async {
                socket
                    .send(message_bytes)
                    .await
                    .map_err(|e| io_error(server, "failed to send UDP query", e))
            })
            .await?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Stray datagrams with a different ID are skipped until the deadline.
        let bytes_received = loop {
            let received = ctx
                .guard(&label, async {
                    socket
                        .recv(&mut recv_buf)
                        .await
                        .map_err(|e| io_error(server, "failed to receive UDP response", e))
                })
                .await?;

            let response_id = message_id(&recv_buf[..received]);
            if response_id.is_some() && response_id == expected_id {
                break received;
            }

            warn!(
                server = %server,
                expected_id = ?expected_id,
                received_id = ?response_id,
                "Discarding UDP datagram with mismatched ID"
            );
        };

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: Protocol::Udp,
        })
    }

    fn protocol(&self) -> Protocol {
        Protocol::Udp
    }
}
