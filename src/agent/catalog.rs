//! Client-side mirror of the tool registry.
//!
//! The catalog is the fixed table of tool specs the agent works from: it
//! feeds the system prompt (names, parameters, semantics) and drives
//! argument coercion. It must stay in sync with the server-side router in
//! [`crate::tools`]; both are closed at startup. A name missing from the
//! catalog is an unknown-tool dispatch miss — the loop records it as a
//! tool error instead of invoking.

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    String,
}

/// One declared parameter of a tool.
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub doc: &'static str,
}

/// One tool: name, one-line semantics, declared parameters.
pub struct ToolSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub params: &'static [ParamSpec],
}

const fn param(name: &'static str, kind: ParamKind, required: bool, doc: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind,
        required,
        doc,
    }
}

static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "query_users",
        doc: "Search users by any combination of filters. All parameters are optional; \
              with none supplied it returns every user.",
        params: &[
            param(
                "name",
                ParamKind::String,
                false,
                "case-insensitive substring match on the name",
            ),
            param(
                "min_age",
                ParamKind::Integer,
                false,
                "minimum age, inclusive (age >= min_age)",
            ),
            param(
                "max_age",
                ParamKind::Integer,
                false,
                "maximum age, inclusive (age <= max_age)",
            ),
            param(
                "age_greater_than",
                ParamKind::Integer,
                false,
                "age strictly greater than this, exclusive (age > age_greater_than)",
            ),
            param(
                "age_less_than",
                ParamKind::Integer,
                false,
                "age strictly less than this, exclusive (age < age_less_than)",
            ),
            param(
                "email_contains",
                ParamKind::String,
                false,
                "case-insensitive substring match on the email",
            ),
        ],
    },
    ToolSpec {
        name: "get_user_by_id",
        doc: "Fetch a single user record by id.",
        params: &[param("user_id", ParamKind::Integer, true, "the user's id")],
    },
    ToolSpec {
        name: "list_relations",
        doc: "List who a user is related to, optionally restricted to one relation label. \
              Labels: spouse, friend, sibling, parent_of, child_of.",
        params: &[
            param("user_id", ParamKind::Integer, true, "the user's id"),
            param(
                "relation",
                ParamKind::String,
                false,
                "exact relation label to keep; omit for all relations",
            ),
        ],
    },
    ToolSpec {
        name: "relation_between",
        doc: "Look up how two users are related, if at all.",
        params: &[
            param("user_id_a", ParamKind::Integer, true, "first user's id"),
            param("user_id_b", ParamKind::Integer, true, "second user's id"),
        ],
    },
    ToolSpec {
        name: "family_of",
        doc: "Fetch a user's immediate family: spouse, children, and parents.",
        params: &[param("user_id", ParamKind::Integer, true, "the user's id")],
    },
];

/// The fixed set of tools the agent may call.
pub struct ToolCatalog;

impl ToolCatalog {
    pub fn get(name: &str) -> Option<&'static ToolSpec> {
        TOOLS.iter().find(|t| t.name == name)
    }

    pub fn iter() -> impl Iterator<Item = &'static ToolSpec> {
        TOOLS.iter()
    }

    /// Tool names, for unknown-tool error messages.
    pub fn names() -> Vec<&'static str> {
        TOOLS.iter().map(|t| t.name).collect()
    }
}
