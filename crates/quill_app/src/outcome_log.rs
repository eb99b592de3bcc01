/// Append-one-line capability for the outcome log.
///
/// Appends are fire-and-forget at this seam; an implementation decides what
/// a failed append means. Callers that do not want logging simply omit the
/// collaborator instead of passing a no-op.
#[async_trait::async_trait]
pub trait OutcomeLogInfra: Send + Sync {
    async fn append(&self, message: &str, outcome: Option<bool>);
}
