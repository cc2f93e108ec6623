#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Callable tools over the catalog and labs clients.
//!
//! The host plugin runtime dispatches named tool calls through an
//! explicit [`ToolSet`] registry built at process start by
//! [`foundry_toolset`]; the heavy lifting lives in the `catalog-ox` and
//! `labs-ox` client crates.

pub mod foundry;
pub mod tool;

// Re-export main types
pub use foundry::{
    FoundryToolBox, GITHUB_MODEL_CODE_SAMPLE, GithubModelArgs, LABS_PROJECT_CODE_SAMPLE,
    LIST_LABS_PROJECTS, LIST_MODELS, LabsProjectArgs, ListLabsProjectsArgs, ListModelsArgs,
    foundry_toolset,
};
pub use tool::{FunctionMetadata, ToolBox, ToolError, ToolOutput, ToolSet, ToolUse};

// Re-export the client types callers wire into the toolset
pub use catalog_ox::Catalog;
pub use foundry_ox_common::ClientInfo;
pub use labs_ox::Labs;
