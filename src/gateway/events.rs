use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher {
    // names of the events seen so far
    fn topics(&self) -> Vec<String>;
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()>;
}
