//! MCP `list_relations` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `list_relations` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListRelationsParams {
    /// The user's id.
    #[schemars(description = "The user's id")]
    pub user_id: u32,

    /// Exact relation label to keep. Omit for all relations.
    #[schemars(
        description = "Exact relation label to keep: 'spouse', 'friend', 'sibling', 'parent_of', 'child_of'. Omit for all relations."
    )]
    pub relation: Option<String>,
}
