//! References to remote A2A agents

use serde::{Deserialize, Serialize};

use crate::registry::RegistryRecord;

/// Path where a remote agent publishes its agent card, relative to its base URL
pub const AGENT_CARD_WELL_KNOWN_PATH: &str = "/.well-known/agent-card.json";

/// Handle to a remote agent, resolved lazily by the runtime on first use.
///
/// Construction never touches the network; an unreachable card only
/// surfaces when the runtime tries to delegate to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAgentRef {
    name: String,
    agent_card_url: String,
}

impl RemoteAgentRef {
    pub fn new(name: impl Into<String>, agent_card_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_card_url: agent_card_url.into(),
        }
    }

    pub fn from_record(record: &RegistryRecord) -> Self {
        Self::new(
            record.name.clone(),
            format!("{}{}", record.base_url, AGENT_CARD_WELL_KNOWN_PATH),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agent_card_url(&self) -> &str {
        &self.agent_card_url
    }
}

impl From<&RegistryRecord> for RemoteAgentRef {
    fn from(record: &RegistryRecord) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_registry;

    #[test]
    fn test_agent_card_url() {
        let record = RegistryRecord {
            name: "weather".to_string(),
            base_url: "https://weather.example.com".to_string(),
        };
        let remote = RemoteAgentRef::from_record(&record);
        assert_eq!(remote.name(), "weather");
        assert_eq!(
            remote.agent_card_url(),
            "https://weather.example.com/.well-known/agent-card.json"
        );
    }

    #[test]
    fn test_agent_card_url_is_plain_concatenation() {
        let records = parse_registry(
            "prime_agent,http://localhost:8001\n\
             weather,https://weather.example.com\n\
             nested,https://agents.example.com:8443/a2a/nested\n",
        )
        .unwrap();

        for record in &records {
            let remote = RemoteAgentRef::from(record);
            let expected = [record.base_url.as_str(), AGENT_CARD_WELL_KNOWN_PATH].concat();
            assert_eq!(remote.agent_card_url().as_bytes(), expected.as_bytes());
        }
    }
}
