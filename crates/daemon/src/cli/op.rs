use crate::http_server::api::client::ApiClient;

/// Shared context handed to every CLI operation.
pub struct OpContext {
    pub client: ApiClient,
}

/// A single CLI operation. Errors are op-specific; outputs are rendered to
/// stdout by the dispatcher.
#[async_trait::async_trait]
pub trait Op {
    type Error: std::error::Error + Send + Sync + 'static;
    type Output: std::fmt::Display;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}
