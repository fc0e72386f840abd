use async_trait::async_trait;
use dnsprobe_application::ports::{LookupResult, RecordResolver};
use dnsprobe_application::CheckContext;
use dnsprobe_domain::{RecordType, ResolutionError};
use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
use std::sync::Arc;
use tracing::debug;

use super::dispatch::handler_for;
use super::reverse::reverse_query_name;
use crate::dns::forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
use crate::dns::transport::{DnsConnector, Protocol};

/// Resolver whose every exchange goes through one [`DnsConnector`].
pub struct TargetedResolver {
    connector: Arc<dyn DnsConnector>,
    server: String,
}

impl TargetedResolver {
    pub fn new(connector: Arc<dyn DnsConnector>) -> Self {
        let server = connector.endpoint().to_string();
        Self { connector, server }
    }

    fn query_name(record_type: RecordType, domain: &str) -> Result<Name, ResolutionError> {
        match record_type {
            RecordType::PTR => MessageBuilder::parse_name(&reverse_query_name(domain)?),
            _ => MessageBuilder::parse_name(domain),
        }
    }

    /// One query over UDP, repeated over TCP only when the answer came back
    /// truncated.
    async fn exchange(
        &self,
        qname: &Name,
        query_type: RecordType,
        ctx: &CheckContext,
    ) -> Result<DnsResponse, ResolutionError> {
        let (id, query_bytes) = MessageBuilder::build_query_with_id(qname, &query_type)?;
        let sent = SentQuery {
            id,
            name: qname,
            query_type: RecordTypeMapper::to_hickory(&query_type),
            bytes: &query_bytes,
        };

        let response = self.send_and_parse(Protocol::Udp, &sent, ctx).await?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(
            server = %self.server,
            "Response truncated (TC bit), retrying via TCP"
        );

        self.send_and_parse(Protocol::Tcp, &sent, ctx).await
    }

    async fn send_and_parse(
        &self,
        protocol: Protocol,
        sent: &SentQuery<'_>,
        ctx: &CheckContext,
    ) -> Result<DnsResponse, ResolutionError> {
        let transport_response = self.connector.exchange(protocol, sent.bytes, ctx).await?;
        let response = ResponseParser::parse(&transport_response.bytes, &self.server)?;

        if response.id != sent.id {
            return Err(ResolutionError::MalformedResponse {
                server: self.server.clone(),
                message: format!(
                    "response ID {} does not match query ID {}",
                    response.id, sent.id
                ),
            });
        }

        if !response.answers_question(sent.name, sent.query_type) {
            return Err(ResolutionError::MalformedResponse {
                server: self.server.clone(),
                message: format!(
                    "response question does not match {} {}",
                    sent.name, sent.query_type
                ),
            });
        }

        Ok(response)
    }
}

/// What went on the wire, kept to validate the response against.
struct SentQuery<'a> {
    id: u16,
    name: &'a Name,
    query_type: HickoryRecordType,
    bytes: &'a [u8],
}

#[async_trait]
impl RecordResolver for TargetedResolver {
    async fn lookup(
        &self,
        record_type: RecordType,
        domain: &str,
        ctx: &CheckContext,
    ) -> Result<LookupResult, ResolutionError> {
        let handler = handler_for(record_type);
        let qname = Self::query_name(record_type, domain)?;

        let response = self.exchange(&qname, handler.query_type, ctx).await?;

        if response.is_nxdomain() {
            return Err(ResolutionError::NxDomain {
                domain: qname.to_utf8(),
                server: self.server.clone(),
            });
        }

        if response.is_server_error() {
            return Err(ResolutionError::ServerFailure {
                domain: qname.to_utf8(),
                server: self.server.clone(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        let values = handler.collect(&qname, response.answers());

        if values.is_empty() {
            return Err(ResolutionError::NoRecords {
                domain: qname.to_utf8(),
                server: self.server.clone(),
                record_type: record_type.to_string(),
            });
        }

        debug!(
            server = %self.server,
            qname = %qname,
            record_type = %record_type,
            values = values.len(),
            "Lookup normalized"
        );

        Ok(LookupResult::new(record_type, values))
    }

    fn server(&self) -> &str {
        &self.server
    }
}
