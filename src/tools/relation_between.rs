//! MCP `relation_between` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `relation_between` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RelationBetweenParams {
    /// First user's id.
    #[schemars(description = "First user's id")]
    pub user_id_a: u32,

    /// Second user's id.
    #[schemars(description = "Second user's id")]
    pub user_id_b: u32,
}
