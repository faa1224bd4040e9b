//! Core algorithms that do not depend on a particular transport
//!

pub mod locator;

pub use crate::core::locator::{last_page, locate_oldest, PageSource};
