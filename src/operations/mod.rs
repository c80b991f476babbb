pub mod platform;
pub mod sweep;
