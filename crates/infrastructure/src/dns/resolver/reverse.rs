use dnsprobe_domain::ResolutionError;
use std::net::IpAddr;

/// Name to query for a PTR check.
///
/// An IP address becomes its `in-addr.arpa` / `ip6.arpa` name. A name that is
/// already under `.arpa` is passed through untouched.
pub fn reverse_query_name(target: &str) -> Result<String, ResolutionError> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(ip_to_reverse_domain(&ip));
    }

    let lowered = target.trim_end_matches('.').to_ascii_lowercase();
    if lowered.ends_with(".in-addr.arpa") || lowered.ends_with(".ip6.arpa") {
        return Ok(target.to_string());
    }

    Err(ResolutionError::InvalidReverseAddress(target.to_string()))
}

pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa.", nibbles.join("."))
        }
    }
}
