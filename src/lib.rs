//! Library entry for dexpage exposing the paging core for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_utils;
