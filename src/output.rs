pub mod log;
pub mod print;
