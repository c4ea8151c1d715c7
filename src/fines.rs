pub mod ledger;
pub mod policy;
