use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

/// Keeps published events in memory. Clones share the same buffer, so a
/// handle kept by the caller sees what a service published.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.to_string()).collect()
    }
}

impl EventPublisher for MemoryPublisher {
    fn topics(&self) -> Vec<String> {
        let mut names = self.names();
        names.sort();
        names.dedup();
        names
    }

    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_to_memory() {
        let handle = MemoryPublisher::new();
        let mut publisher: Box<dyn EventPublisher> = Box::new(handle.clone());
        let borrowed = DomainEvent::updated("item_borrowed", "lending", "101", &HashMap::new(), &"x").expect("build event");
        let returned = DomainEvent::updated("item_returned", "lending", "101", &HashMap::new(), &"x").expect("build event");
        publisher.publish(&returned).expect("should publish");
        publisher.publish(&borrowed).expect("should publish");
        publisher.publish(&returned).expect("should publish");
        assert_eq!(3, handle.events().len());
        assert_eq!(vec!["item_borrowed".to_string(), "item_returned".to_string()], publisher.topics());
    }
}
