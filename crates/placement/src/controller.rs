use strum_macros::{AsRefStr, Display, EnumString};

use crate::config::TooltipConfig;
use crate::placement::{place, HorizontalClamp, Placement, Pointer, ScrollSources};

/// Value written to the panel's `display` style property.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
pub enum Visibility {
    #[strum(serialize = "block")]
    Visible,
    #[strum(serialize = "none")]
    Hidden,
}

/// Ambient page state, read fresh on every call.
pub trait Environment {
    fn viewport_width(&self) -> f64;
    fn scroll(&self) -> ScrollSources;
}

/// Something the tooltip text can be written to.
pub trait PanelSurface {
    type Error;

    fn set_position(&self, top: f64, left: f64) -> Result<(), Self::Error>;
    fn set_visibility(&self, visibility: Visibility) -> Result<(), Self::Error>;
}

/// Shows and hides tooltip panels. Holds nothing but its config, every call
/// recomputes from the pointer and environment it's handed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipController {
    config: TooltipConfig,
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Position `panel` next to the pointer and reveal it.
    pub fn show_panel<E, P>(&self, pointer: Pointer, env: &E, panel: &P) -> Result<Placement, P::Error>
    where
        E: Environment + ?Sized,
        P: PanelSurface + ?Sized,
    {
        let width = env.viewport_width();
        let placement = place(&self.config, pointer, width, env.scroll());

        if placement.clamp == HorizontalClamp::InvertedBounds {
            log::warn!(
                "viewport width {} is narrower than {}, pinning tooltip to the left bound",
                width,
                self.config.min_viewport_width()
            );
        }

        log::debug!(
            "showing tooltip at top={} left={} (clamp: {})",
            placement.top,
            placement.left,
            placement.clamp
        );

        panel.set_position(placement.top, placement.left)?;
        panel.set_visibility(Visibility::Visible)?;
        Ok(placement)
    }

    pub fn hide_panel<P>(&self, panel: &P) -> Result<(), P::Error>
    where
        P: PanelSurface + ?Sized,
    {
        log::debug!("hiding tooltip");
        panel.set_visibility(Visibility::Hidden)
    }
}
