//! Application module

pub mod cli;
pub mod error;
pub mod startup;
pub mod summary;
