//! # API - read paged collections from a remote api
//!
//! The client module holds the http side, endpoint builds the urls
//!

pub mod client;
pub mod endpoint;
