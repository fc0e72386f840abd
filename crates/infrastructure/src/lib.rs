//! dnsprobe infrastructure: wire codec, fixed-endpoint transports and the
//! targeted resolver.
pub mod check;
pub mod dns;

pub use check::{check_executor, run_check};
