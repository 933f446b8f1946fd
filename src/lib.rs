pub mod core;
pub mod infrastructure;
pub mod scenarios;
pub mod sync;
