pub mod error;
pub mod filter;
pub mod links;
pub mod models;
pub mod picker;
pub mod prefs;
