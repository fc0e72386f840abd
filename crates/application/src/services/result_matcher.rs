use dnsprobe_domain::CheckError;
use tracing::debug;

use crate::ports::LookupResult;

/// Exact-string membership test. No case folding, trailing-dot or IPv6
/// textual normalization is applied to either side.
pub struct ResultMatcher;

impl ResultMatcher {
    pub fn evaluate(expected: &str, result: LookupResult) -> Result<(), CheckError> {
        if let Some(position) = result.values.iter().position(|value| value == expected) {
            debug!(expected = %expected, position, "Expected output found");
            return Ok(());
        }

        Err(CheckError::MatchFailure {
            expected: expected.to_string(),
            actual: result.into_values(),
        })
    }
}
