//! CLI library components for the USDM builder.

pub mod cli;
pub mod commands;
pub mod document;
pub mod logging;
pub mod options;
pub mod report;
