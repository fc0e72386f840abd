
pub use dns_server_mock::{name, MockDnsServer, MockZone};
pub use mock_connector::MockConnector;
