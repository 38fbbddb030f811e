//! Centralized prompt definitions.
//!
//! Routing between sub-agents is expressed entirely in these instructions;
//! the runtime's model interprets them.

/// Name of the root agent
pub const ROOT_AGENT_NAME: &str = "agent_host";

/// Name of the local dice-rolling sub-agent
pub const ROLL_AGENT_NAME: &str = "roll_agent";

/// Model used by the root agent unless overridden
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const ROLL_AGENT_DESCRIPTION: &str = "Handles rolling dice of different sizes.";

/// Instruction for the dice-rolling sub-agent
pub const ROLL_AGENT_INSTRUCTION: &str = r#"You are responsible for rolling dice based on the user's request.
When asked to roll a die, you must call the roll_die tool with the number of sides as an integer.
"#;

/// Routing instruction for the root agent
pub const ROOT_AGENT_INSTRUCTION: &str = r#"You are a helpful assistant that can roll dice and check if numbers are prime.
You delegate rolling dice tasks to the roll_agent and prime checking tasks to the prime_agent.
Follow these steps:
1. If the user asks to roll a die, delegate to the roll_agent.
2. If the user asks to check primes, delegate to the prime_agent.
3. If the user asks to roll a die and then check if the result is prime, call roll_agent first, then pass the result to prime_agent.
Always clarify the results before proceeding.
"#;

/// Instruction applied to the root agent and everything below it
pub const GLOBAL_INSTRUCTION: &str =
    "You are DicePrimeBot, ready to roll dice and check prime numbers.";
