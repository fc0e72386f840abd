use std::net::SocketAddr;

/// Names and values served by [`super::TestServer`].
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn alias() -> &'static str {
        "www.example.com"
    }

    pub fn nonexistent() -> &'static str {
        "nonexistent.invalid"
    }

    pub fn example_ipv4() -> &'static str {
        "93.184.216.34"
    }

    pub fn example_ipv6() -> &'static str {
        "2606:2800:220:1:248:1893:25c8:1946"
    }

    pub fn mail_exchange() -> &'static str {
        "mail.example.com."
    }

    pub fn spf() -> &'static str {
        "v=spf1 -all"
    }
}

/// JSON configuration blob pointing at `addr`.
pub fn blob(addr: SocketAddr, record: &str, domain: &str, expected: &str) -> String {
    serde_json::json!({
        "server": addr.ip().to_string(),
        "port": addr.port(),
        "record": record,
        "domain": domain,
        "expected_output": expected,
    })
    .to_string()
}
