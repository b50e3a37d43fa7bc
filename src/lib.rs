//! Trip viewer library
//!
//! This module exposes the application state, navigation, converter and data
//! modules for use by the binary and by integration tests.

pub mod accommodation;
pub mod app;
pub mod cli;
pub mod currency;
pub mod data;
pub mod info;
pub mod links;
pub mod logging;
pub mod navigator;
pub mod store;
pub mod ui;
