pub mod ask;
pub mod repl;

use anyhow::Result;

use crate::agent::llm::OpenAiCompatModel;
use crate::agent::Agent;
use crate::client::McpToolClient;
use crate::config::KithConfig;

/// Wire the configured LLM backend and tool client into an agent.
pub fn build_agent(config: &KithConfig) -> Result<Agent<OpenAiCompatModel, McpToolClient>> {
    let model = OpenAiCompatModel::new(&config.llm)?;
    let invoker = McpToolClient::from_config(&config.agent)?;
    Ok(Agent::new(model, invoker, config.agent.max_rounds))
}
