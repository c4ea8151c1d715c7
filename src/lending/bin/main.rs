use std::error::Error;
use tracing::info;
use libranet::core::command::Command;
use libranet::core::domain::Configuration;
use libranet::gateway::GatewayPublisherVia;
use libranet::items::dto::ItemDetail;
use libranet::lending::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use libranet::lending::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
use libranet::lending::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use libranet::lending::factory::create_lending_service;
use libranet::utils::logging::setup_tracing;

const DEV_MODE: bool = true;

fn main() -> Result<(), Box<dyn Error>> {
    // plain lines while developing, json otherwise
    setup_tracing(!DEV_MODE);

    let config = Configuration::new(if DEV_MODE { "dev" } else { "prod" });
    let mut svc = create_lending_service(&config, GatewayPublisherVia::Logs);

    let catalog = [
        AddItemCommandRequest::new(101, "Atomic Habits", "James Clear", ItemDetail::Pages { page_count: 320 }),
        AddItemCommandRequest::new(102, "Deep Work", "Cal Newport", ItemDetail::Duration { duration_minutes: 180 }),
        AddItemCommandRequest::new(103, "NatGeo", "Various", ItemDetail::Issue { issue_number: 2025 }),
    ];
    for req in catalog {
        let res = AddItemCommand::new(svc.as_mut()).execute(req)?;
        println!("{}", res.item.display);
    }

    for (item_id, duration) in [(101, "7"), (102, "5"), (103, "10")] {
        BorrowItemCommand::new(svc.as_mut()).execute(BorrowItemCommandRequest::new(item_id, duration))?;
    }

    println!("Pages in book: {}", svc.page_count(101)?);
    println!("{}", svc.play(102)?);
    println!("{}", svc.archive_issue(103)?);

    let res = ReturnItemCommand::new(svc.as_mut()).execute(ReturnItemCommandRequest::new(101))?;
    println!("Fine for book: {}", res.returned.fine);

    if svc.is_available(101)? {
        BorrowItemCommand::new(svc.as_mut()).execute(BorrowItemCommandRequest::new(101, "3"))?;
    }
    info!(total_fines = svc.total_fines(), "demo finished");
    Ok(())
}
