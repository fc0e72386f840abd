//! Record-type dispatch table.
//!
//! Each supported record type maps to one entry describing how its answers
//! are turned into strings. Adding a type means adding one entry here and
//! one variant to `RecordType`.

use dnsprobe_domain::RecordType;
use hickory_proto::rr::{Name, RData, Record};
use tracing::warn;

/// How answers of one record type are normalized.
pub struct RecordHandler {
    pub record_type: RecordType,
    /// Type put on the wire. Canonical names are learned from an address
    /// query so that a name without records is not mistaken for its own alias.
    pub query_type: RecordType,
    collect: fn(&Name, &[Record]) -> Vec<String>,
}

impl RecordHandler {
    /// Normalize the answer section of a response to `qname`.
    pub fn collect(&self, qname: &Name, answers: &[Record]) -> Vec<String> {
        (self.collect)(qname, answers)
    }
}

/// Indexed by `RecordType` discriminant.
static HANDLERS: [RecordHandler; 7] = [
    RecordHandler {
        record_type: RecordType::A,
        query_type: RecordType::A,
        collect: collect_ipv4,
    },
    RecordHandler {
        record_type: RecordType::AAAA,
        query_type: RecordType::AAAA,
        collect: collect_ipv6,
    },
    RecordHandler {
        record_type: RecordType::CNAME,
        query_type: RecordType::A,
        collect: collect_canonical_name,
    },
    RecordHandler {
        record_type: RecordType::MX,
        query_type: RecordType::MX,
        collect: collect_mail_exchanges,
    },
    RecordHandler {
        record_type: RecordType::NS,
        query_type: RecordType::NS,
        collect: collect_name_servers,
    },
    RecordHandler {
        record_type: RecordType::PTR,
        query_type: RecordType::PTR,
        collect: collect_pointers,
    },
    RecordHandler {
        record_type: RecordType::TXT,
        query_type: RecordType::TXT,
        collect: collect_texts,
    },
];

pub fn handler_for(record_type: RecordType) -> &'static RecordHandler {
    &HANDLERS[record_type as usize]
}

/// `qname` followed by every alias target reachable from it.
///
/// Each hop must be owned by the previous name, so records about unrelated
/// owners never join the chain.
fn alias_chain(qname: &Name, answers: &[Record]) -> Vec<Name> {
    let mut chain = vec![qname.clone()];

    for _ in 0..answers.len() {
        let current = &chain[chain.len() - 1];
        let next = answers.iter().find_map(|record| match record.data() {
            Some(RData::CNAME(cname)) if record.name() == current => Some(cname.0.clone()),
            _ => None,
        });

        match next {
            Some(target) if !chain.contains(&target) => chain.push(target),
            _ => break,
        }
    }

    chain
}

fn collect_with(
    qname: &Name,
    answers: &[Record],
    extract: fn(&RData) -> Option<String>,
) -> Vec<String> {
    let chain = alias_chain(qname, answers);

    answers
        .iter()
        .filter(|record| chain.contains(record.name()))
        .filter_map(|record| record.data().and_then(extract))
        .collect()
}

fn collect_ipv4(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::A(a) => Some(a.0.to_string()),
        _ => None,
    })
}

fn collect_ipv6(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
        _ => None,
    })
}

/// End of the CNAME chain. The queried name counts as its own canonical
/// name only when the answer holds records owned by it; an empty answer
/// yields nothing.
fn collect_canonical_name(qname: &Name, answers: &[Record]) -> Vec<String> {
    let chain = alias_chain(qname, answers);

    match chain.last() {
        Some(canonical) if chain.len() > 1 => vec![canonical.to_utf8()],
        _ if answers.iter().any(|record| record.name() == qname) => vec![qname.to_utf8()],
        _ => Vec::new(),
    }
}

fn collect_mail_exchanges(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::MX(mx) => Some(mx.exchange().to_utf8()),
        _ => None,
    })
}

fn collect_name_servers(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::NS(ns) => Some(ns.to_utf8()),
        _ => None,
    })
}

fn collect_pointers(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::PTR(ptr) => Some(ptr.to_utf8()),
        _ => None,
    })
}

/// Character-strings of one TXT record are concatenated into one value.
/// A record that is not valid UTF-8 is skipped.
fn collect_texts(qname: &Name, answers: &[Record]) -> Vec<String> {
    collect_with(qname, answers, |rdata| match rdata {
        RData::TXT(txt) => {
            let bytes = txt.txt_data().concat();
            match String::from_utf8(bytes) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(error = %e, "Skipping TXT record that is not valid UTF-8");
                    None
                }
            }
        }
        _ => None,
    })
}
