//! MCP `get_user_by_id` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `get_user_by_id` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetUserByIdParams {
    /// The user's id.
    #[schemars(description = "The user's id")]
    pub user_id: u32,
}
