pub mod core;
pub mod fines;
pub mod gateway;
pub mod items;
pub mod lending;
pub mod utils;
