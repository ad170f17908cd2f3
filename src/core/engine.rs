use crate::core::{Program, RunReport};
use crate::utils::error::Result;

pub struct GreeterEngine<P: Program> {
    program: P,
}

impl<P: Program> GreeterEngine<P> {
    pub fn new(program: P) -> Self {
        Self { program }
    }

    /// Runs the two phases in fixed order: greetings first, then the sum.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting greeter run");

        tracing::info!("Greeting roster...");
        let greetings_sent = self.program.greet_all().await?;
        tracing::info!("Sent {} greetings", greetings_sent);

        tracing::info!("Reporting sum...");
        let sum = self.program.report_sum().await?;
        tracing::info!("Reported sum: {}", sum);

        Ok(RunReport {
            greetings_sent,
            sum,
        })
    }
}
