//! Data models for the Daak register.
//!
//! Field names match the records written by the browser forms so that existing
//! collections load without conversion.

mod category;
mod entry;
mod listing;

pub use category::*;
pub use entry::*;
pub use listing::*;
