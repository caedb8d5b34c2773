mod action;
mod extension;

pub use action::UnitAction;
pub use extension::UnitExtension;
