pub mod bindings;
pub mod dom;
mod error;
pub mod tooltip;

pub use error::TooltipError;
pub use tooltip::{HoverTooltip, HoverTooltipProps};
