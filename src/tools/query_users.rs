//! MCP `query_users` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `query_users` MCP tool.
///
/// All filters are optional and ANDed; with none supplied the tool
/// returns every user.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct QueryUsersParams {
    /// Case-insensitive substring match on the name.
    #[schemars(description = "Case-insensitive substring match on the name")]
    pub name: Option<String>,

    /// Minimum age, inclusive (`age >= min_age`).
    #[schemars(description = "Minimum age, inclusive (age >= min_age)")]
    pub min_age: Option<u32>,

    /// Maximum age, inclusive (`age <= max_age`).
    #[schemars(description = "Maximum age, inclusive (age <= max_age)")]
    pub max_age: Option<u32>,

    /// Exclusive lower age bound (`age > age_greater_than`).
    #[schemars(description = "Age strictly greater than this (age > age_greater_than)")]
    pub age_greater_than: Option<u32>,

    /// Exclusive upper age bound (`age < age_less_than`).
    #[schemars(description = "Age strictly less than this (age < age_less_than)")]
    pub age_less_than: Option<u32>,

    /// Case-insensitive substring match on the email.
    #[schemars(description = "Case-insensitive substring match on the email")]
    pub email_contains: Option<String>,
}
