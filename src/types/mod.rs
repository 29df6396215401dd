pub mod capability;
pub mod filter;
pub mod into_utc_trait;
pub mod resolution;
pub mod selection;
pub mod station;
pub mod time_window;
