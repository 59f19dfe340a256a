#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::uninlined_format_args,
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod monitor;
pub mod report;
pub mod selector;
