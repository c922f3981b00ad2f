// Client preferences. Only the theme flag is persisted.

pub mod handlers;
pub mod theme;
