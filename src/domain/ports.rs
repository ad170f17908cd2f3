use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for transcript lines. Stdout in production, an in-memory
/// buffer in tests.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn names(&self) -> &[String];
    fn addends(&self) -> (i32, i32);
}

/// The two phases of a run, in invocation order.
#[async_trait]
pub trait Program: Send + Sync {
    /// Greets every configured name in sequence. Returns the number of
    /// greetings emitted.
    async fn greet_all(&self) -> Result<usize>;

    /// Computes the configured sum and writes the result line. Returns the
    /// sum.
    async fn report_sum(&self) -> Result<i32>;
}
