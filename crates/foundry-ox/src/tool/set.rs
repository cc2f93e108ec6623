use super::{FunctionMetadata, ToolBox, ToolError, ToolOutput, ToolUse};
use log::debug;
use std::sync::Arc;

/// A container that holds multiple toolboxes and provides a unified
/// interface for tool discovery and invocation.
///
/// This is the explicit registry the host runtime dispatches through:
/// built once at process start, lookup by function name.
#[derive(Clone, Default)]
pub struct ToolSet {
    toolboxes: Vec<Arc<dyn ToolBox>>,
}

impl std::fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSet")
            .field("toolboxes_count", &self.toolboxes.len())
            .field("tools", &self.all_tools())
            .finish()
    }
}

impl ToolSet {
    /// Creates a new empty ToolSet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            toolboxes: Vec::new(),
        }
    }

    /// Adds a toolbox to this set.
    ///
    /// The provided toolbox is wrapped in an `Arc` internally; wrap it
    /// yourself first if you need to share one instance across sets.
    pub fn add_toolbox(&mut self, toolbox: impl ToolBox + 'static) {
        self.toolboxes.push(Arc::new(toolbox));
    }

    /// Adds a toolbox to this set using a builder pattern.
    #[must_use]
    pub fn with_toolbox(mut self, toolbox: impl ToolBox + 'static) -> Self {
        self.add_toolbox(toolbox);
        self
    }

    /// Returns all tools from all toolboxes in this set.
    #[must_use]
    pub fn all_tools(&self) -> Vec<FunctionMetadata> {
        let mut all_tools = Vec::new();

        for toolbox in &self.toolboxes {
            all_tools.extend(toolbox.tools());
        }

        all_tools
    }

    /// Finds the toolbox that contains the function with the given name.
    fn find_toolbox_for_function(&self, name: &str) -> Option<&Arc<dyn ToolBox>> {
        self.toolboxes
            .iter()
            .find(|toolbox| toolbox.has_function(name))
    }

    /// Checks if any toolbox in this set has a function with the given name.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.find_toolbox_for_function(name).is_some()
    }

    /// Invokes a tool function by finding the appropriate toolbox and
    /// delegating the call to it.
    pub async fn invoke(&self, call: ToolUse) -> Result<ToolOutput, ToolError> {
        let toolbox = self
            .find_toolbox_for_function(&call.name)
            .ok_or_else(|| ToolError::not_found(&call.name))?;

        debug!("dispatching tool call {} ({})", call.name, call.id);
        toolbox.invoke(call).await
    }
}
