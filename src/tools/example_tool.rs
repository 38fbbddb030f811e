//! Few-shot examples attached to an agent
//!
//! Unlike function tools, the example tool is never called by the model.
//! The runtime folds the rendered examples into the agent's instruction.

use serde::{Deserialize, Serialize};

/// A single piece of message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A message from one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::text("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::text("model", text)
    }

    fn text(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A user input and the model turns that should follow it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: Content,
    pub output: Vec<Content>,
}

/// Static set of few-shot examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleTool {
    examples: Vec<Example>,
}

impl ExampleTool {
    pub fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Render the examples as an instruction block.
    ///
    /// Returns an empty string when there are no examples.
    pub fn render(&self) -> String {
        if self.examples.is_empty() {
            return String::new();
        }

        let mut out = String::from(
            "<EXAMPLES>\nThe following examples show how to respond to typical requests.\n",
        );
        for (i, example) in self.examples.iter().enumerate() {
            out.push_str(&format!("\nEXAMPLE {}:\n", i + 1));
            render_content(&mut out, &example.input);
            for content in &example.output {
                render_content(&mut out, content);
            }
        }
        out.push_str("</EXAMPLES>");
        out
    }
}

fn render_content(out: &mut String, content: &Content) {
    for part in &content.parts {
        out.push_str(&format!("[{}]: {}\n", content.role, part.text));
    }
}

/// Examples for the dice and prime bot
pub fn default_examples() -> ExampleTool {
    ExampleTool::new(vec![
        Example {
            input: Content::user("Roll a 6-sided die."),
            output: vec![Content::model("I rolled a 4 for you.")],
        },
        Example {
            input: Content::user("Is 7 a prime number?"),
            output: vec![Content::model("Yes, 7 is a prime number.")],
        },
        Example {
            input: Content::user("Roll a 10-sided die and check if it's prime."),
            output: vec![
                Content::model("I rolled an 8 for you."),
                Content::model("8 is not a prime number."),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_examples() {
        let tool = default_examples();
        assert_eq!(tool.examples().len(), 3);
        assert_eq!(tool.examples()[2].output.len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let tool = ExampleTool::new(vec![Example {
            input: Content::user("Roll a 6-sided die."),
            output: vec![Content::model("I rolled a 4 for you.")],
        }]);

        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!([{
                "input": { "role": "user", "parts": [{ "text": "Roll a 6-sided die." }] },
                "output": [{ "role": "model", "parts": [{ "text": "I rolled a 4 for you." }] }]
            }])
        );
    }

    #[test]
    fn test_render() {
        let tool = ExampleTool::new(vec![Example {
            input: Content::user("Is 7 a prime number?"),
            output: vec![Content::model("Yes, 7 is a prime number.")],
        }]);

        assert_eq!(
            tool.render(),
            "<EXAMPLES>\n\
             The following examples show how to respond to typical requests.\n\
             \n\
             EXAMPLE 1:\n\
             [user]: Is 7 a prime number?\n\
             [model]: Yes, 7 is a prime number.\n\
             </EXAMPLES>"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ExampleTool::new(vec![]).render(), "");
    }
}
