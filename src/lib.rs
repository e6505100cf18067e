pub mod app;
pub mod config;
pub mod core;
pub mod index;
pub mod scanner;
