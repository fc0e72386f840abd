use dnsprobe_domain::{CheckConfig, CheckError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::context::CheckContext;
use crate::ports::ResolverFactory;
use crate::services::ResultMatcher;

/// Runs one DNS assertion: a single lookup against the configured server,
/// passing only if the expected value is among the answers.
pub struct ExecuteCheckUseCase {
    resolvers: Arc<dyn ResolverFactory>,
}

impl ExecuteCheckUseCase {
    pub fn new(resolvers: Arc<dyn ResolverFactory>) -> Self {
        Self { resolvers }
    }

    #[instrument(
        skip(self, config, ctx),
        fields(
            server = %config.endpoint(),
            record_type = %config.record_type(),
            domain = %config.domain(),
        )
    )]
    pub async fn execute(&self, config: &CheckConfig, ctx: &CheckContext) -> Result<(), CheckError> {
        // No deadline means no network I/O at all.
        ctx.require_deadline()?;

        let endpoint = config.endpoint();
        let resolver = self.resolvers.bind(&endpoint, ctx).await?;

        let result = resolver
            .lookup(config.record_type(), config.domain(), ctx)
            .await?;

        debug!(
            server = %resolver.server(),
            answers = result.len(),
            "Lookup completed"
        );

        let outcome = ResultMatcher::evaluate(config.expected_output(), result);

        match &outcome {
            Ok(()) => info!(expected = %config.expected_output(), "Check passed"),
            Err(e) => info!(error = %e, "Check failed"),
        }

        outcome
    }
}
