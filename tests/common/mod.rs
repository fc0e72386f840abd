#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{blob, TestDomains};
pub use test_server::{TestServer, TestServerBuilder};
