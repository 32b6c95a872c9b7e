//!
//! Module with all dtos that are passed between services and their callers
//!

mod inoutput;
pub mod input;
pub mod output;
