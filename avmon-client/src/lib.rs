pub mod cli;
pub mod client;
pub mod components;
pub mod error;
pub mod poller;
pub mod time;
pub mod views;
