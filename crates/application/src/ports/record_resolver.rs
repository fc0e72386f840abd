use async_trait::async_trait;
use dnsprobe_domain::{RecordType, ResolutionError};

use crate::context::CheckContext;

/// Answers of one lookup, normalized to strings in answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub record_type: RecordType,
    pub values: Vec<String>,
}

impl LookupResult {
    pub fn new(record_type: RecordType, values: Vec<String>) -> Self {
        Self {
            record_type,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// A resolver already bound to one DNS server.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn lookup(
        &self,
        record_type: RecordType,
        domain: &str,
        ctx: &CheckContext,
    ) -> Result<LookupResult, ResolutionError>;

    /// The `host:port` this resolver sends every query to.
    fn server(&self) -> &str;
}

/// Builds a [`RecordResolver`] that talks only to `endpoint`.
#[async_trait]
pub trait ResolverFactory: Send + Sync {
    async fn bind(
        &self,
        endpoint: &str,
        ctx: &CheckContext,
    ) -> Result<Box<dyn RecordResolver>, ResolutionError>;
}
