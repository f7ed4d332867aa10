//! PawMatch - a terminal client for finding dog playmates
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod swipe;
pub mod terminal;
pub mod traits;
pub mod ui;
