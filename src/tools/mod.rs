//! Callable tools exposed to agents
//!
//! Tools are plain async functions over JSON params. The runtime receives
//! their declarations and decides when to call them; `ToolRegistry::call`
//! is the local dispatch path.

mod example_tool;
mod roll_die;
mod schema;

use std::sync::Arc;

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ToolError;

pub use example_tool::{default_examples, Content, Example, ExampleTool, Part};
pub use roll_die::RollDieTool;

/// Tool names
pub mod names {
    pub const ROLL_DIE: &str = "roll_die";
}

/// A function the model can call
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema for the tool's parameters
    fn schema(&self) -> Value;

    async fn call(&self, params: Value) -> Result<Value, ToolError>;

    /// Declaration handed to the runtime
    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.schema(),
        }
    }
}

/// Function declaration as published to the model
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Ordered registry of available tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    /// Tools available to the dice-rolling agent
    pub fn dice() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(RollDieTool));
        registry
    }

    /// Register a tool, replacing any existing tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(idx) => self.tools[idx] = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|t| t.name())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.tools.iter().map(|t| t.declaration()).collect()
    }

    /// Dispatch a call by tool name
    pub async fn call(&self, name: &str, params: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tracing::debug!("Calling tool {} with {}", name, params);
        tool.call(params).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Serialize for ToolRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.declarations().serialize(serializer)
    }
}
