//! MCP `family_of` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `family_of` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FamilyOfParams {
    /// The user's id.
    #[schemars(description = "The user's id")]
    pub user_id: u32,
}
