pub mod log;
pub mod wizard;
