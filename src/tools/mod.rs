pub mod family_of;
pub mod get_user_by_id;
pub mod list_relations;
pub mod query_users;
pub mod relation_between;

use std::str::FromStr;
use std::sync::Arc;

use family_of::FamilyOfParams;
use get_user_by_id::GetUserByIdParams;
use list_relations::ListRelationsParams;
use query_users::QueryUsersParams;
use relation_between::RelationBetweenParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use crate::directory::store::PersonFilter;
use crate::directory::types::RelationLabel;
use crate::directory::{Directory, DirectoryError};

/// The kith MCP tool handler. Holds the shared immutable directory and
/// exposes all tools via the `#[tool_router]` macro. The tool set is
/// closed at startup; handlers are pure reads and keep no state between
/// calls. Domain misses come back as `{"error": ...}` payloads, never as
/// protocol failures.
#[derive(Clone)]
pub struct KithTools {
    tool_router: ToolRouter<Self>,
    directory: Arc<Directory>,
}

fn not_found(err: DirectoryError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

#[tool_router]
impl KithTools {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            directory,
        }
    }

    /// Filter users by name, age bounds, and email.
    #[tool(description = "Search users by any combination of filters: name substring, inclusive age bounds (min_age/max_age), exclusive age bounds (age_greater_than/age_less_than), email substring. All filters optional and ANDed; none returns every user.")]
    async fn query_users(
        &self,
        Parameters(params): Parameters<QueryUsersParams>,
    ) -> Result<String, String> {
        tracing::info!(params = ?params, "query_users called");

        let filter = PersonFilter {
            name_contains: params.name,
            email_contains: params.email_contains,
            min_age: params.min_age,
            max_age: params.max_age,
            age_greater_than: params.age_greater_than,
            age_less_than: params.age_less_than,
        };
        let users = self.directory.store().filter(&filter);

        tracing::info!(count = users.len(), "query_users matched");
        serde_json::to_string(&serde_json::json!({
            "status": "success",
            "count": users.len(),
            "users": users,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Fetch one user record.
    #[tool(description = "Fetch a single user record by id.")]
    async fn get_user_by_id(
        &self,
        Parameters(params): Parameters<GetUserByIdParams>,
    ) -> Result<String, String> {
        tracing::info!(user_id = params.user_id, "get_user_by_id called");

        match self.directory.store().get(params.user_id) {
            Some(user) => {
                serde_json::to_string(user).map_err(|e| format!("serialization failed: {e}"))
            }
            None => {
                tracing::warn!(user_id = params.user_id, "user not found");
                Ok(not_found(DirectoryError::NotFound(params.user_id)))
            }
        }
    }

    /// List a user's relations, optionally restricted to one label.
    #[tool(description = "List who a user is related to. Optionally restrict to one exact relation label: 'spouse', 'friend', 'sibling', 'parent_of', 'child_of'.")]
    async fn list_relations(
        &self,
        Parameters(params): Parameters<ListRelationsParams>,
    ) -> Result<String, String> {
        tracing::info!(user_id = params.user_id, relation = ?params.relation, "list_relations called");

        let label = match params.relation.as_deref() {
            None => None,
            Some(raw) => match RelationLabel::from_str(raw) {
                Ok(label) => Some(label),
                Err(_) => {
                    let known: Vec<_> = RelationLabel::ALL.iter().map(|l| l.as_str()).collect();
                    return Ok(serde_json::json!({
                        "error": format!(
                            "unknown relation label: {raw}. Known labels: {}",
                            known.join(", ")
                        ),
                    })
                    .to_string());
                }
            },
        };

        let relations = match self.directory.graph().filter_by_label(params.user_id, label) {
            Ok(relations) => relations,
            Err(err) => return Ok(not_found(err)),
        };

        serde_json::to_string(&serde_json::json!({
            "user_id": params.user_id,
            "count": relations.len(),
            "relations": relations,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Look up the relation connecting two users, if any.
    #[tool(description = "Look up how two users are related. Returns the relation label as seen from the first user, or null if no relation connects them.")]
    async fn relation_between(
        &self,
        Parameters(params): Parameters<RelationBetweenParams>,
    ) -> Result<String, String> {
        tracing::info!(a = params.user_id_a, b = params.user_id_b, "relation_between called");

        let relation = match self
            .directory
            .graph()
            .relation_between(params.user_id_a, params.user_id_b)
        {
            Ok(relation) => relation,
            Err(err) => return Ok(not_found(err)),
        };

        serde_json::to_string(&serde_json::json!({
            "user_id_a": params.user_id_a,
            "user_id_b": params.user_id_b,
            "relation": relation,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Fetch a user's immediate family.
    #[tool(description = "Fetch a user's immediate family: spouse (or null), children, and parents.")]
    async fn family_of(
        &self,
        Parameters(params): Parameters<FamilyOfParams>,
    ) -> Result<String, String> {
        tracing::info!(user_id = params.user_id, "family_of called");

        let id = params.user_id;
        let (spouse, children, parents) = match (
            self.directory.spouse_of(id),
            self.directory.children_of(id),
            self.directory.parents_of(id),
        ) {
            (Ok(s), Ok(c), Ok(p)) => (s, c, p),
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => return Ok(not_found(err)),
        };

        serde_json::to_string(&serde_json::json!({
            "user_id": id,
            "spouse": spouse,
            "children": children,
            "parents": parents,
        }))
        .map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for KithTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "kith serves a user directory with a typed relationship graph. \
                 Use query_users to search, get_user_by_id for one record, and \
                 list_relations / relation_between / family_of for the graph."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
