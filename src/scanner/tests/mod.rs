//! Test modules for the scanner
//!
//! Scanner tests drive the real directory walk over temporary trees and use
//! an in-memory tag reader, so no audio fixtures are required.

pub mod helpers;
