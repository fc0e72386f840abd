use super::{io_error, message_id, DnsTransport, Protocol, TransportResponse};
use async_trait::async_trait;
use dnsprobe_application::CheckContext;
use dnsprobe_domain::ResolutionError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP with the 2-byte length prefix of RFC 1035 §4.2.2.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn frame(&self, message_bytes: &[u8]) -> Result<Vec<u8>, ResolutionError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| ResolutionError::Io {
            server: self.server_addr.to_string(),
            message: format!("query of {} bytes exceeds TCP frame size", message_bytes.len()),
        })?;

        let mut framed = Vec::with_capacity(2 + message_bytes.len());
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        Ok(framed)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        ctx: &CheckContext,
    ) -> Result<TransportResponse, ResolutionError> {
        let server = self.server_addr;
        let label = server.to_string();
        let framed = self.frame(message_bytes)?;

        let mut stream = ctx
            .guard(&label, async {
                TcpStream::connect(server)
                    .await
                    .map_err(|e| io_error(server, "failed to connect", e))
            })
            .await?;

        ctx.guard(&label, async {
            stream
                .write_all(&framed)
                .await
                .map_err(|e| io_error(server, "failed to send TCP query", e))
        })
        .await?;

        debug!(server = %server, bytes_sent = message_bytes.len(), "TCP query sent");

        let bytes = ctx
            .guard(&label, async {
                let mut len_buf = [0u8; 2];
                stream
                    .read_exact(&mut len_buf)
                    .await
                    .map_err(|e| io_error(server, "failed to read TCP length prefix", e))?;

                let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                stream
                    .read_exact(&mut response)
                    .await
                    .map_err(|e| io_error(server, "failed to read TCP response", e))?;
                Ok(response)
            })
            .await?;

        if message_id(&bytes) != message_id(message_bytes) {
            return Err(ResolutionError::MalformedResponse {
                server: label,
                message: "response ID does not match query ID".to_string(),
            });
        }

        debug!(server = %server, bytes_received = bytes.len(), "TCP response received");

        Ok(TransportResponse {
            bytes,
            protocol_used: Protocol::Tcp,
        })
    }

    fn protocol(&self) -> Protocol {
        Protocol::Tcp
    }
}
