pub mod error;
pub mod set;
pub mod types;

pub use error::ToolError;
pub use set::ToolSet;
pub use types::{ToolOutput, ToolUse};

use futures_util::future::BoxFuture;
use schemars::{JsonSchema, generate::SchemaSettings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Metadata for a tool function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionMetadata {
    /// Name of the function
    pub name: String,

    /// Optional description of what the function does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON schema for the function's input parameters
    pub parameters: Value,
}

impl FunctionMetadata {
    /// Describe a function from its name, description, and parameter schema.
    pub fn with_parameters(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            parameters,
        }
    }
}

/// Trait for objects that provide tool functionality.
///
/// This trait allows objects to expose their available tools and handle
/// tool invocations in a standardized way. Implementations hold their
/// upstream clients and dispatch by function name.
pub trait ToolBox: Send + Sync + 'static {
    /// Returns the functions provided by this toolbox.
    fn tools(&self) -> Vec<FunctionMetadata>;

    /// Invokes a tool function with the given call parameters.
    fn invoke(&self, call: ToolUse) -> BoxFuture<'_, Result<ToolOutput, ToolError>>;

    /// Checks if this toolbox has a function with the given name.
    fn has_function(&self, name: &str) -> bool {
        self.tools().iter().any(|func| func.name == name)
    }
}

impl<T: ToolBox + ?Sized> ToolBox for Arc<T> {
    fn tools(&self) -> Vec<FunctionMetadata> {
        self.as_ref().tools()
    }

    fn invoke(&self, call: ToolUse) -> BoxFuture<'_, Result<ToolOutput, ToolError>> {
        self.as_ref().invoke(call)
    }

    fn has_function(&self, name: &str) -> bool {
        self.as_ref().has_function(name)
    }
}

/// Generates a JSON schema for the given type using schemars.
///
/// Subschemas are inlined so the host runtime receives one
/// self-contained parameter document per tool.
#[must_use]
pub fn schema_for_type<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::openapi3().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let generator = schemars::generate::SchemaGenerator::new(settings);
    let root_schema = generator.into_root_schema_for::<T>();
    let mut schema_value =
        serde_json::to_value(root_schema).expect("Failed to serialize schema to JSON");

    // Remove the title field if present
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("title");
    }

    schema_value
}
