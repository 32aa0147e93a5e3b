// Library target holds everything; main.rs only wires the terminal.
pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod session;
pub mod store;
pub mod ui;
pub mod vocabulary;
