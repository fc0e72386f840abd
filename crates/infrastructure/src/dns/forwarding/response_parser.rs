use dnsprobe_domain::ResolutionError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, Record, RecordType};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub message: Message,
}

impl DnsResponse {
    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        self.rcode != ResponseCode::NoError && !self.is_nxdomain()
    }

    /// True when the question section repeats exactly the one question that
    /// was sent. Names compare case-insensitively.
    pub fn answers_question(&self, name: &Name, query_type: RecordType) -> bool {
        match self.message.queries() {
            [query] => {
                query.name() == name
                    && query.query_type() == query_type
                    && query.query_class() == DNSClass::IN
            }
            _ => false,
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a response received from `server`.
    pub fn parse(response_bytes: &[u8], server: &str) -> Result<DnsResponse, ResolutionError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| ResolutionError::MalformedResponse {
                server: server.to_string(),
                message: e.to_string(),
            })?;

        if message.message_type() != MessageType::Response {
            return Err(ResolutionError::MalformedResponse {
                server: server.to_string(),
                message: "message is not a response".to_string(),
            });
        }

        let rcode = message.response_code();
        let truncated = message.truncated();

        debug!(
            rcode = ?rcode,
            answers = message.answers().len(),
            truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            message,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
