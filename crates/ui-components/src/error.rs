use hovertip_placement::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum TooltipError {
    #[error("No element with class `{class}` inside the tooltip container")]
    PanelNotFound { class: String },
    #[error("Tooltip panel is not an HTML element")]
    NotAnHtmlElement,
    #[error("No global window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("DOM error: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid config object: {0}")]
    ConfigObject(#[from] serde_wasm_bindgen::Error),
}

impl TooltipError {
    pub fn panel_not_found(class: &str) -> Self {
        Self::PanelNotFound {
            class: class.to_string(),
        }
    }
}

impl From<JsValue> for TooltipError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

impl From<TooltipError> for JsValue {
    fn from(err: TooltipError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
