use crate::core::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

/// Production sink: locked stdout, one line per write.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    async fn write_line(&self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
