pub mod host;
pub mod input;
pub mod listeners;
