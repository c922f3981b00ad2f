// Profile view and editor.
// Edits go through a draft (session.rs); the committed profile lives in the DataProvider.

pub mod handlers;
pub mod seed;
pub mod session;
pub mod validation;
