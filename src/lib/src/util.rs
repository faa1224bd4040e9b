//! Various utility functions
//!

pub mod fs;
pub mod link_header;
pub mod logging;
