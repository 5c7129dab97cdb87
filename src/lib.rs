// Library target so integration tests can exercise the loading and query
// modules directly. The tui module stays binary-only (it needs a terminal).
pub mod article;
pub mod config;
pub mod query;
pub mod source;
