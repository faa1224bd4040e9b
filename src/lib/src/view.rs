pub mod page;

pub use crate::view::page::{Page, PageLinks};
