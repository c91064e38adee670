//! Exports for pages that wire tooltips up in markup, e.g.
//! `<span onmouseover="tooltipShow(event,this)" onmouseout="tooltipHide(event,this)">`.
use hovertip_placement::{TooltipConfig, TooltipController};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom;
use crate::error::TooltipError;

#[wasm_bindgen(js_name = tooltipShow)]
pub fn tooltip_show(event: &MouseEvent, item: &Element) -> Result<(), JsValue> {
    dom::show(&TooltipController::default(), event, item).map_err(Into::into)
}

#[wasm_bindgen(js_name = tooltipHide)]
pub fn tooltip_hide(event: &MouseEvent, item: &Element) -> Result<(), JsValue> {
    dom::hide(&TooltipController::default(), event, item).map_err(Into::into)
}

/// Controller with its own placement constants, for pages that don't use
/// the defaults.
#[wasm_bindgen(js_name = TooltipController)]
pub struct JsTooltipController {
    inner: TooltipController,
}

#[wasm_bindgen(js_class = TooltipController)]
impl JsTooltipController {
    /// `config` is an optional object with any of the `TooltipConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsTooltipController, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            TooltipConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<TooltipConfig>(config).map_err(TooltipError::from)?
        };
        config.validate().map_err(TooltipError::from)?;

        Ok(Self {
            inner: TooltipController::new(config),
        })
    }

    pub fn show(&self, event: &MouseEvent, item: &Element) -> Result<(), JsValue> {
        dom::show(&self.inner, event, item).map_err(Into::into)
    }

    pub fn hide(&self, event: &MouseEvent, item: &Element) -> Result<(), JsValue> {
        dom::hide(&self.inner, event, item).map_err(Into::into)
    }
}
