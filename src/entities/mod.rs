pub mod activity;
pub mod project;
pub mod time_entry;
pub mod user;
