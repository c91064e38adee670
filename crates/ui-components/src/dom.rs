//! Browser side of the tooltip: reads the page through `web-sys` and writes
//! inline styles on the panel element.
use hovertip_placement::{
    Environment, PanelSurface, Placement, Pointer, ScrollSources, TooltipController, Visibility,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::error::TooltipError;

/// Snapshot handle on the current page. Values are read when asked for, so
/// create one per event rather than caching it.
pub struct DomEnvironment {
    window: Window,
    document: Document,
}

impl DomEnvironment {
    pub fn current() -> Result<Self, TooltipError> {
        let window = web_sys::window().ok_or(TooltipError::NoWindow)?;
        let document = window.document().ok_or(TooltipError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Environment for DomEnvironment {
    fn viewport_width(&self) -> f64 {
        match self.window.inner_width().map(|width| width.as_f64()) {
            Ok(Some(width)) => width,
            _ => {
                log::warn!("unable to read window.innerWidth, assuming 0");
                0.0
            }
        }
    }

    fn scroll(&self) -> ScrollSources {
        let root = self
            .document
            .document_element()
            .map(|el| el.scroll_top() as f64)
            .unwrap_or_default();
        let body = self
            .document
            .body()
            .map(|body| body.scroll_top() as f64)
            .unwrap_or_default();

        ScrollSources::new(root, body)
    }
}

/// A hoverable container that owns a tooltip panel.
pub trait PanelLookup {
    type Panel: PanelSurface<Error = TooltipError>;

    /// First descendant carrying `class`, if any.
    fn first_panel(&self, class: &str) -> Result<Option<Self::Panel>, TooltipError>;
}

/// The element holding the tooltip text.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPanel(HtmlElement);

impl TooltipPanel {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl PanelSurface for TooltipPanel {
    type Error = TooltipError;

    fn set_position(&self, top: f64, left: f64) -> Result<(), Self::Error> {
        let style = self.0.style();
        style.set_property("top", &css_px(top))?;
        style.set_property("left", &css_px(left))?;
        Ok(())
    }

    fn set_visibility(&self, visibility: Visibility) -> Result<(), Self::Error> {
        self.0.style().set_property("display", visibility.as_ref())?;
        Ok(())
    }
}

impl PanelLookup for Element {
    type Panel = TooltipPanel;

    fn first_panel(&self, class: &str) -> Result<Option<Self::Panel>, TooltipError> {
        match self.get_elements_by_class_name(class).item(0) {
            Some(element) => element
                .dyn_into::<HtmlElement>()
                .map(|el| Some(TooltipPanel::new(el)))
                .map_err(|_| TooltipError::NotAnHtmlElement),
            None => Ok(None),
        }
    }
}

pub fn pointer_from_event(event: &MouseEvent) -> Pointer {
    Pointer::new(event.client_x() as f64, event.client_y() as f64)
}

fn find_panel<C>(container: &C, class: &str) -> Result<C::Panel, TooltipError>
where
    C: PanelLookup + ?Sized,
{
    container
        .first_panel(class)?
        .ok_or_else(|| TooltipError::panel_not_found(class))
}

/// Position the panel inside `container` next to `pointer` and reveal it.
pub fn show_in<C, E>(
    controller: &TooltipController,
    pointer: Pointer,
    env: &E,
    container: &C,
) -> Result<Placement, TooltipError>
where
    C: PanelLookup + ?Sized,
    E: Environment + ?Sized,
{
    let panel = find_panel(container, &controller.config().panel_class)?;
    controller.show_panel(pointer, env, &panel)
}

/// Hide the panel inside `container`.
pub fn hide_in<C>(controller: &TooltipController, container: &C) -> Result<(), TooltipError>
where
    C: PanelLookup + ?Sized,
{
    let panel = find_panel(container, &controller.config().panel_class)?;
    controller.hide_panel(&panel)
}

/// Position the panel inside `container` next to the pointer and reveal it.
pub fn show(
    controller: &TooltipController,
    event: &MouseEvent,
    container: &Element,
) -> Result<(), TooltipError> {
    let env = DomEnvironment::current()?;
    show_in(controller, pointer_from_event(event), &env, container)?;
    Ok(())
}

/// Hide the panel inside `container`. The event only mirrors `show`.
pub fn hide(
    controller: &TooltipController,
    _event: &MouseEvent,
    container: &Element,
) -> Result<(), TooltipError> {
    hide_in(controller, container)
}

fn css_px(value: f64) -> String {
    format!("{}px", value)
}
