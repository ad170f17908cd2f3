use crate::core::math;
use crate::core::{ConfigProvider, Greeting, OutputSink, Program};
use crate::utils::error::Result;

pub struct SimpleProgram<S: OutputSink, C: ConfigProvider> {
    pub(crate) sink: S,
    pub(crate) config: C,
}

impl<S: OutputSink, C: ConfigProvider> SimpleProgram<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

#[async_trait::async_trait]
impl<S: OutputSink, C: ConfigProvider> Program for SimpleProgram<S, C> {
    async fn greet_all(&self) -> Result<usize> {
        let mut sent = 0;
        for name in self.config.names() {
            tracing::debug!("Greeting: {}", name);
            let greeting = Greeting::new(name.clone());
            for line in greeting.lines() {
                self.sink.write_line(&line).await?;
            }
            sent += 1;
        }
        Ok(sent)
    }

    async fn report_sum(&self) -> Result<i32> {
        let (lhs, rhs) = self.config.addends();
        let sum = math::add(lhs, rhs);
        tracing::debug!("Computed {} + {} = {}", lhs, rhs, sum);
        self.sink.write_line(&format!("Add: {}", sum)).await?;
        Ok(sum)
    }
}
