use async_trait::async_trait;

use crate::error::SummarizeError;
use crate::types::SummaryRequest;

/// Anything that can turn a validated request into a summary
///
/// Implemented by [`crate::SummarizationClient`]; the handler only sees
/// this trait.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a summary with a single attempt
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummarizeError>;
}
