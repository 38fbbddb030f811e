//! Host initialization
//!
//! `initialize` runs once at startup and produces the immutable
//! configuration the runtime drives. It either succeeds completely or
//! returns the first configuration error.

use serde::Serialize;
use tracing::info;

use crate::agent::{compose_delegates, local_agents, root_agent, Delegate, LlmAgent};
use crate::config::{RuntimeEnv, Settings};
use crate::error::Result;
use crate::prompts::ROLL_AGENT_NAME;
use crate::registry::load_registry;
use crate::remote::RemoteAgentRef;

/// Where the runner persists sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionServiceConfig {
    VertexAi {
        project: Option<String>,
        location: Option<String>,
    },
}

/// Session-backed runner wiring, present only when an agent engine is named
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerConfig {
    pub app_name: String,
    /// Agent the runner drives
    pub agent: String,
    pub session: SessionServiceConfig,
}

impl RunnerConfig {
    /// Runner wiring for `env`, if `GOOGLE_AGENT_ENGINE` is set
    pub fn from_env(env: &RuntimeEnv) -> Option<Self> {
        let app_name = env.agent_engine.clone()?;
        Some(Self {
            app_name,
            agent: ROLL_AGENT_NAME.to_string(),
            session: SessionServiceConfig::VertexAi {
                project: env.cloud_project.clone(),
                location: env.cloud_location.clone(),
            },
        })
    }
}

/// Fully built host configuration
#[derive(Debug, Clone, Serialize)]
pub struct AgentHostConfig {
    root_agent: LlmAgent,
    #[serde(skip_serializing_if = "Option::is_none")]
    runner: Option<RunnerConfig>,
}

impl AgentHostConfig {
    pub fn root_agent(&self) -> &LlmAgent {
        &self.root_agent
    }

    /// Delegates in routing order: local agents, then remote agents in
    /// registry order
    pub fn delegates(&self) -> &[Delegate] {
        self.root_agent.sub_agents()
    }

    pub fn runner(&self) -> Option<&RunnerConfig> {
        self.runner.as_ref()
    }

    /// Serialize as the manifest handed to the runtime
    pub fn to_manifest(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the host configuration from settings and environment.
pub fn initialize(settings: &Settings, env: &RuntimeEnv) -> Result<AgentHostConfig> {
    let records = load_registry(&settings.registry.path)?;
    let remotes: Vec<RemoteAgentRef> = records.iter().map(RemoteAgentRef::from_record).collect();

    let delegates = compose_delegates(local_agents(), remotes);
    let root_agent = root_agent(settings.root.model.clone(), delegates);
    let runner = RunnerConfig::from_env(env);

    info!(
        "Initialized {} with {} delegates ({} remote) from {}",
        root_agent.name(),
        root_agent.sub_agents().len(),
        records.len(),
        settings.registry.path.display()
    );
    if let Some(runner) = &runner {
        info!("Session runner enabled for app {}", runner.app_name);
    }

    Ok(AgentHostConfig { root_agent, runner })
}
