use crate::core::clock::{Clock, SystemClock};
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;

pub fn create_lending_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn LendingService> {
    create_lending_service_with(config, Box::new(SystemClock), create_publisher(via))
}

pub fn create_lending_service_with(config: &Configuration, clock: Box<dyn Clock>,
                                   publisher: Box<dyn EventPublisher>) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config, clock, publisher))
}
