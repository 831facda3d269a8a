#![forbid(unsafe_code)]

pub mod charset;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod formats;
pub mod latest;
pub mod logging;
pub mod menu;
pub mod pipeline;
pub mod report;
pub mod store;
