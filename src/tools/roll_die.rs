//! Die rolling tool

use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use super::schema::{integer_at_least, object_schema};
use super::{names, Tool};
use crate::error::ToolError;

/// Rolls a die with a caller-chosen number of sides
pub struct RollDieTool;

#[derive(Debug, Deserialize)]
struct RollDieParams {
    sides: i64,
}

impl RollDieTool {
    pub const NAME: &'static str = names::ROLL_DIE;

    /// Roll a die, returning a value in `1..=sides`
    pub fn roll(sides: u32) -> u32 {
        rand::thread_rng().gen_range(1..=sides)
    }

    fn invalid(reason: impl Into<String>) -> ToolError {
        ToolError::InvalidParams {
            tool: Self::NAME.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for RollDieTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Roll a die and return the rolled result."
    }

    fn schema(&self) -> Value {
        object_schema()
            .property("sides", integer_at_least("Number of sides on the die", 1), true)
            .build()
    }

    async fn call(&self, params: Value) -> Result<Value, ToolError> {
        let params: RollDieParams =
            serde_json::from_value(params).map_err(|e| Self::invalid(e.to_string()))?;
        let sides = u32::try_from(params.sides)
            .ok()
            .filter(|&s| s >= 1)
            .ok_or_else(|| Self::invalid(format!("sides must be at least 1, got {}", params.sides)))?;

        let rolled = Self::roll(sides);
        tracing::debug!("Rolled {} on a {}-sided die", rolled, sides);
        Ok(json!(rolled))
    }
}
