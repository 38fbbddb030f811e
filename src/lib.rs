//! Agent Host - a root agent that delegates dice rolls and prime checks
//!
//! The crate builds the configuration an LLM agent runtime drives: a root
//! agent whose sub-agents are local agents plus remote A2A agents listed in
//! a registry file.
//!
//! # Example
//!
//! ```no_run
//! use agent_host::{initialize, RuntimeEnv, Settings};
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let config = initialize(&settings, &RuntimeEnv::from_env())?;
//!
//!     for delegate in config.delegates() {
//!         println!("{}", delegate.name());
//!     }
//!     println!("{}", config.to_manifest()?);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod host;
pub mod prompts;
pub mod registry;
pub mod remote;
pub mod tools;

// Re-export the public API
pub use agent::{Delegate, LlmAgent};
pub use config::{RuntimeEnv, Settings};
pub use error::{ConfigError, ToolError};
pub use host::{initialize, AgentHostConfig, RunnerConfig};
pub use registry::{load_registry, RegistryRecord};
pub use remote::{RemoteAgentRef, AGENT_CARD_WELL_KNOWN_PATH};
pub use tools::{Tool, ToolRegistry};
