use strum_macros::Display;

use crate::config::TooltipConfig;

/// Pointer position relative to the viewport, i.e. `clientX`/`clientY`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub client_x: f64,
    pub client_y: f64,
}

impl Pointer {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// The two places a browser may report the vertical scroll position from.
/// Which one is authoritative depends on the rendering mode, so both are
/// read and the larger wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSources {
    /// `document.documentElement.scrollTop`
    pub root: f64,
    /// `document.body.scrollTop`
    pub body: f64,
}

impl ScrollSources {
    pub fn new(root: f64, body: f64) -> Self {
        Self { root, body }
    }

    pub fn offset(&self) -> f64 {
        self.root.max(self.body)
    }
}

/// Which horizontal rule produced the final `left`.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum HorizontalClamp {
    /// `clientX + offset` already sat within bounds.
    None,
    /// Raised to the minimum left.
    Lower,
    /// Pulled in to keep the right reserve free.
    Upper,
    /// Viewport too narrow for the right reserve, pinned to the minimum.
    InvertedBounds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub clamp: HorizontalClamp,
}

/// Horizontal position for a pointer at `client_x`.
///
/// The result lies in `[min_left, viewport_width - right_reserve]`. When that
/// range is empty the panel is pinned to `min_left`.
pub fn clamp_left(config: &TooltipConfig, client_x: f64, viewport_width: f64) -> (f64, HorizontalClamp) {
    let left = client_x + config.offset_x;
    let lower = config.min_left;
    let upper = viewport_width - config.right_reserve;

    if upper < lower {
        (lower, HorizontalClamp::InvertedBounds)
    } else if left < lower {
        (lower, HorizontalClamp::Lower)
    } else if left > upper {
        (upper, HorizontalClamp::Upper)
    } else {
        (left, HorizontalClamp::None)
    }
}

/// Compute where the panel goes. The vertical position is never clamped, a
/// pointer near the bottom can push the panel past the viewport.
pub fn place(
    config: &TooltipConfig,
    pointer: Pointer,
    viewport_width: f64,
    scroll: ScrollSources,
) -> Placement {
    let (left, clamp) = clamp_left(config, pointer.client_x, viewport_width);
    let top = pointer.client_y + config.offset_y + scroll.offset();

    Placement { left, top, clamp }
}

#[cfg(test)]
mod test {
    use super::*;

    fn place_default(x: f64, y: f64, width: f64, scroll: f64) -> Placement {
        place(
            &TooltipConfig::default(),
            Pointer::new(x, y),
            width,
            ScrollSources::new(scroll, 0.0),
        )
    }

    #[test]
    fn test_clamped_to_left_edge() {
        let res = place_default(10.0, 10.0, 1024.0, 0.0);
        assert_eq!(res.left, 20.0);
        assert_eq!(res.top, 30.0);
        assert_eq!(res.clamp, HorizontalClamp::Lower);
    }

    #[test]
    fn test_clamped_to_right_reserve() {
        let res = place_default(900.0, 10.0, 1024.0, 0.0);
        assert_eq!(res.left, 674.0);
        assert_eq!(res.top, 30.0);
        assert_eq!(res.clamp, HorizontalClamp::Upper);
    }

    #[test]
    fn test_scrolled_page() {
        let res = place_default(100.0, 100.0, 1024.0, 200.0);
        assert_eq!(res.left, 105.0);
        assert_eq!(res.top, 320.0);
        assert_eq!(res.clamp, HorizontalClamp::None);
    }

    #[test]
    fn test_inverted_bounds() {
        let res = place_default(100.0, 100.0, 300.0, 0.0);
        assert_eq!(res.left, 20.0);
        assert_eq!(res.clamp, HorizontalClamp::InvertedBounds);

        // Even a pointer far to the right stays pinned
        let res = place_default(5000.0, 0.0, 300.0, 0.0);
        assert_eq!(res.left, 20.0);
    }

    #[test]
    fn test_exact_minimum_width() {
        // At 370 the range collapses to a single point instead of inverting
        let res = place_default(200.0, 0.0, 370.0, 0.0);
        assert_eq!(res.left, 20.0);
        assert_eq!(res.clamp, HorizontalClamp::Upper);
    }

    #[test]
    fn test_left_within_bounds() {
        let config = TooltipConfig::default();
        for width in [0.0, 100.0, 369.0, 370.0, 371.0, 800.0, 1920.0] {
            let upper = (width - config.right_reserve).max(config.min_left);
            for x in [-1000.0, -5.0, 0.0, 14.0, 15.0, 16.0, 400.0, 1500.0, 1e9] {
                let (left, _) = clamp_left(&config, x, width);
                assert!(
                    left >= config.min_left && left <= upper,
                    "x={x} width={width} left={left}"
                );
            }
        }
    }

    #[test]
    fn test_top_not_clamped() {
        let res = place_default(100.0, 5000.0, 1024.0, 12.5);
        assert_eq!(res.top, 5000.0 + 20.0 + 12.5);

        let res = place_default(100.0, -300.0, 1024.0, 0.0);
        assert_eq!(res.top, -280.0);
    }

    #[test]
    fn test_scroll_takes_larger_source() {
        assert_eq!(ScrollSources::new(0.0, 75.0).offset(), 75.0);
        assert_eq!(ScrollSources::new(120.0, 0.0).offset(), 120.0);
        assert_eq!(ScrollSources::new(40.0, 30.0).offset(), 40.0);
        assert_eq!(ScrollSources::default().offset(), 0.0);

        let res = place(
            &TooltipConfig::default(),
            Pointer::new(100.0, 100.0),
            1024.0,
            ScrollSources::new(0.0, 200.0),
        );
        assert_eq!(res.top, 320.0);
    }

    #[test]
    fn test_custom_config() {
        let config = TooltipConfig {
            offset_x: 0.0,
            offset_y: 0.0,
            min_left: 0.0,
            right_reserve: 100.0,
            ..Default::default()
        };

        let res = place(&config, Pointer::new(450.0, 7.0), 500.0, ScrollSources::default());
        assert_eq!(res.left, 400.0);
        assert_eq!(res.top, 7.0);
    }

    #[test]
    fn test_clamp_display() {
        assert_eq!(HorizontalClamp::InvertedBounds.to_string(), "inverted_bounds");
        assert_eq!(HorizontalClamp::None.to_string(), "none");
    }
}
