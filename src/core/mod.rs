pub mod action;
pub mod extension;
pub mod hypothesis;
pub mod state;
