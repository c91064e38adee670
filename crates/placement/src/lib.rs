//! Cursor-relative tooltip placement.
//!
//! The math lives here without any DOM dependency; the browser bindings in
//! `ui-components` plug a real page in through [`Environment`] and
//! [`PanelSurface`].
mod config;
mod controller;
mod placement;

pub use config::{ConfigError, TooltipConfig, DEFAULT_PANEL_CLASS};
pub use controller::{Environment, PanelSurface, TooltipController, Visibility};
pub use placement::{clamp_left, place, HorizontalClamp, Placement, Pointer, ScrollSources};
