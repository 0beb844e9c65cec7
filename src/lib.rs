//! Natural-language people-directory assistant over MCP.
//!
//! kith is one binary with two halves. `kith serve` runs an
//! [MCP](https://modelcontextprotocol.io/) server exposing a read-only
//! user directory and its typed relationship graph as tools. `kith ask`
//! and `kith repl` run the agentic client: a language model reads the
//! question, decides whether a tool call is needed, and the orchestration
//! loop coerces the arguments, invokes the tool through a per-call MCP
//! session, folds the result back into the model's context, and repeats —
//! bounded by a hard round cap — until the model answers in plain text.
//!
//! # Architecture
//!
//! - **Directory**: in-memory person store plus a precomputed
//!   bidirectional adjacency index with relation-label inversion, built
//!   once from static seed data on every start
//! - **Tools**: a fixed rmcp tool router (`query_users`,
//!   `get_user_by_id`, `list_relations`, `relation_between`, `family_of`)
//! - **Agent**: decide/execute/observe loop over a `ChatModel`
//!   (OpenAI-compatible `chat/completions`, Ollama by default) and a
//!   `ToolInvoker` (child-process MCP session per call)
//! - **Transport**: MCP over stdio (primary) or Streamable HTTP/SSE
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`directory`] — Person store, relationship graph, and the immutable context object
//! - [`tools`] — MCP tool handler and per-tool parameter schemas
//! - [`agent`] — Decision engine, argument coercion, and the bounded orchestration loop
//! - [`client`] — Per-call MCP child-process tool invocation

pub mod agent;
pub mod client;
pub mod config;
pub mod directory;
pub mod tools;
