use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::modules::resume::application::ports::outgoing::pdf_engine::{
    PdfEngine, PdfEngineError,
};

/// Candidate renderers, in preference order. Each reads HTML on stdin and
/// writes the PDF to stdout.
const RENDERERS: [(&str, &[&str]); 2] = [
    ("weasyprint", &["-", "-"]),
    ("wkhtmltopdf", &["--quiet", "-", "-"]),
];

/// Shells out to an external HTML-to-PDF binary. Availability is probed on
/// every call so installing a renderer takes effect without a restart.
pub struct ShellPdfEngine;

impl ShellPdfEngine {
    async fn run(binary: &str, args: &[&str], html: &str) -> Result<Vec<u8>, PdfEngineError> {
        let mut child = Command::new(binary)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PdfEngineError::RenderFailed(format!("failed to spawn {binary}: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(html.as_bytes())
                .await
                .map_err(|e| PdfEngineError::RenderFailed(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| PdfEngineError::RenderFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdfEngineError::RenderFailed(format!(
                "{binary} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(PdfEngineError::RenderFailed(format!(
                "{binary} produced no output"
            )));
        }
        Ok(output.stdout)
    }

    async fn is_on_path(binary: &str) -> bool {
        Command::new(binary)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl PdfEngine for ShellPdfEngine {
    async fn render(&self, html: &str) -> Result<Vec<u8>, PdfEngineError> {
        for (binary, args) in RENDERERS {
            if !Self::is_on_path(binary).await {
                debug!("{} not on PATH, trying next renderer", binary);
                continue;
            }
            match Self::run(binary, args, html).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    warn!("{} failed: {}, trying next renderer", binary, e);
                }
            }
        }
        Err(PdfEngineError::Unavailable)
    }
}
