use std::collections::BTreeSet;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event as a structured log line
#[derive(Debug, Default)]
pub struct LogPublisher {
    topics: BTreeSet<String>,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for LogPublisher {
    fn topics(&self) -> Vec<String> {
        self.topics.iter().cloned().collect()
    }

    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        self.topics.insert(event.name.to_string());
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(), key = event.key.as_str(),
              "domain event {}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("item_added", "catalog", "101", &HashMap::new(), &data).expect("build event");
        let mut publisher = LogPublisher::new();
        publisher.publish(&event).expect("should publish");
        publisher.publish(&event).expect("should publish");
        assert_eq!(vec!["item_added".to_string()], publisher.topics());
    }
}
