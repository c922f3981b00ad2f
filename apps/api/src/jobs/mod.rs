// Job listing, filtering and detail lookup.
// Data comes from the DataProvider in AppState; this module never owns it.

pub mod catalog;
pub mod filter;
pub mod format;
pub mod handlers;
