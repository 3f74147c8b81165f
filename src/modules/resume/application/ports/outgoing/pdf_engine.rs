use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PdfEngineError {
    /// No renderer is installed. Callers fall back to printable HTML.
    #[error("no HTML-to-PDF renderer available")]
    Unavailable,
    #[error("rendering failed: {0}")]
    RenderFailed(String),
}

#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfEngineError>;
}
