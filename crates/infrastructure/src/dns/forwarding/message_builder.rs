//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dnsprobe_domain::{RecordType, ResolutionError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Parse `domain` as a fully qualified name (a trailing dot is implied).
    pub fn parse_name(domain: &str) -> Result<Name, ResolutionError> {
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        Name::from_str(&fqdn).map_err(|e| ResolutionError::InvalidName {
            name: domain.to_string(),
            message: e.to_string(),
        })
    }

    /// Build a query message and return both its ID and wire bytes.
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query_with_id(
        name: &Name,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), ResolutionError> {
        let hickory_type = RecordTypeMapper::to_hickory(record_type);

        let mut query = Query::new();
        query.set_name(name.clone());
        query.set_query_type(hickory_type);
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message.set_id(id);
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message, name)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message, name: &Name) -> Result<Vec<u8>, ResolutionError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| ResolutionError::InvalidName {
                name: name.to_utf8(),
                message: format!("failed to serialize DNS message: {}", e),
            })?;

        Ok(buf)
    }
}
