pub mod command;
pub mod config;
pub mod ledger;
pub mod report;
pub mod session;
pub mod time_model;
