//! One-shot question: run the agent loop once and print the answer.

use anyhow::Result;

use crate::config::KithConfig;

pub async fn ask(config: &KithConfig, question: &str) -> Result<()> {
    let agent = super::build_agent(config)?;

    tracing::info!(model = %config.llm.model, "processing question");
    let answer = agent.answer(question).await;

    println!("{answer}");
    Ok(())
}
