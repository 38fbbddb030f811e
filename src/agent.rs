//! Agent definitions handed to the runtime
//!
//! These are plain data. Turn-taking, tool invocation and delegation are
//! performed by the runtime that consumes them.

use serde::{Deserialize, Serialize};

use crate::prompts;
use crate::remote::RemoteAgentRef;
use crate::tools::{ExampleTool, ToolRegistry};

/// Content categories the model's safety filter can block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
    HarmCategorySexuallyExplicit,
    HarmCategoryDangerousContent,
}

/// Blocking threshold for a harm category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Generation settings forwarded to the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerateContentConfig {
    /// Turn off the dangerous-content filter.
    ///
    /// Dice requests ("roll", "shoot", ...) otherwise trip it.
    pub fn dice_safe() -> Self {
        Self {
            safety_settings: vec![SafetySetting {
                category: HarmCategory::HarmCategoryDangerousContent,
                threshold: HarmBlockThreshold::Off,
            }],
        }
    }
}

/// A sub-agent the root can delegate to
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delegate {
    Local(LlmAgent),
    Remote(RemoteAgentRef),
}

impl Delegate {
    pub fn name(&self) -> &str {
        match self {
            Delegate::Local(agent) => agent.name(),
            Delegate::Remote(remote) => remote.name(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Delegate::Remote(_))
    }
}

impl From<LlmAgent> for Delegate {
    fn from(agent: LlmAgent) -> Self {
        Delegate::Local(agent)
    }
}

impl From<RemoteAgentRef> for Delegate {
    fn from(remote: RemoteAgentRef) -> Self {
        Delegate::Remote(remote)
    }
}

/// A model-driven agent definition
#[derive(Debug, Clone, Serialize)]
pub struct LlmAgent {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    global_instruction: Option<String>,
    tools: ToolRegistry,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<ExampleTool>,
    generate_content_config: GenerateContentConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sub_agents: Vec<Delegate>,
}

impl LlmAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            description: String::new(),
            instruction: String::new(),
            global_instruction: None,
            tools: ToolRegistry::empty(),
            examples: None,
            generate_content_config: GenerateContentConfig::default(),
            sub_agents: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_global_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.global_instruction = Some(instruction.into());
        self
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_examples(mut self, examples: ExampleTool) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn with_generate_content_config(mut self, config: GenerateContentConfig) -> Self {
        self.generate_content_config = config;
        self
    }

    pub fn with_sub_agents(mut self, sub_agents: Vec<Delegate>) -> Self {
        self.sub_agents = sub_agents;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn examples(&self) -> Option<&ExampleTool> {
        self.examples.as_ref()
    }

    pub fn generate_content_config(&self) -> &GenerateContentConfig {
        &self.generate_content_config
    }

    pub fn sub_agents(&self) -> &[Delegate] {
        &self.sub_agents
    }

    pub fn find_sub_agent(&self, name: &str) -> Option<&Delegate> {
        self.sub_agents.iter().find(|d| d.name() == name)
    }

    /// The instruction as the model sees it: global instruction, then the
    /// agent's own instruction, then any few-shot examples.
    pub fn full_instruction(&self) -> String {
        let mut sections: Vec<&str> = Vec::new();
        if let Some(global) = self.global_instruction.as_deref() {
            sections.push(global.trim());
        }
        if !self.instruction.trim().is_empty() {
            sections.push(self.instruction.trim());
        }

        let rendered = self.examples.as_ref().map(ExampleTool::render);
        if let Some(rendered) = rendered.as_deref().filter(|r| !r.is_empty()) {
            sections.push(rendered);
        }

        sections.join("\n\n")
    }
}

/// The local dice-rolling sub-agent
pub fn roll_agent() -> LlmAgent {
    LlmAgent::new(prompts::ROLL_AGENT_NAME)
        .with_description(prompts::ROLL_AGENT_DESCRIPTION)
        .with_instruction(prompts::ROLL_AGENT_INSTRUCTION)
        .with_tools(ToolRegistry::dice())
        .with_generate_content_config(GenerateContentConfig::dice_safe())
}

/// Local agents, in delegation order
pub fn local_agents() -> Vec<LlmAgent> {
    vec![roll_agent()]
}

/// Concatenate local agents and remote references, locals first.
pub fn compose_delegates(locals: Vec<LlmAgent>, remotes: Vec<RemoteAgentRef>) -> Vec<Delegate> {
    locals
        .into_iter()
        .map(Delegate::from)
        .chain(remotes.into_iter().map(Delegate::from))
        .collect()
}

/// The root delegator
pub fn root_agent(model: impl Into<String>, delegates: Vec<Delegate>) -> LlmAgent {
    LlmAgent::new(prompts::ROOT_AGENT_NAME)
        .with_model(model)
        .with_instruction(prompts::ROOT_AGENT_INSTRUCTION)
        .with_global_instruction(prompts::GLOBAL_INSTRUCTION)
        .with_sub_agents(delegates)
        .with_examples(crate::tools::default_examples())
        .with_generate_content_config(GenerateContentConfig::dice_safe())
}
