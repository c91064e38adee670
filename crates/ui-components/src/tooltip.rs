use std::rc::Rc;

use hovertip_placement::{TooltipConfig, TooltipController};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom::{pointer_from_event, DomEnvironment, TooltipPanel};
use crate::error::TooltipError;

#[derive(Properties, PartialEq)]
pub struct HoverTooltipProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub config: Rc<TooltipConfig>,
    /// Keep the panel under the cursor while it moves over the container.
    #[prop_or_default]
    pub follow: bool,
}

/// Wraps `children` and shows `label` in a panel next to the cursor while
/// the pointer is over them.
#[function_component(HoverTooltip)]
pub fn hover_tooltip(props: &HoverTooltipProps) -> Html {
    let panel_ref = use_node_ref();
    let controller = use_memo(
        |config| TooltipController::new((**config).clone()),
        props.config.clone(),
    );

    let onmouseenter = {
        let controller = controller.clone();
        let panel_ref = panel_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Err(err) = show_at_pointer(&controller, &panel_ref, &event) {
                log::error!("Unable to show tooltip: {}", err);
            }
        })
    };

    let onmouseleave = {
        let controller = controller.clone();
        let panel_ref = panel_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let res = panel_from_ref(&panel_ref, &controller.config().panel_class)
                .and_then(|panel| controller.hide_panel(&panel));

            if let Err(err) = res {
                log::error!("Unable to hide tooltip: {}", err);
            }
        })
    };

    let onmousemove = props.follow.then(|| onmouseenter.clone());

    let panel_styles = classes!(
        props.config.panel_class.clone(),
        "hidden",
        "py-1",
        "px-2",
        // Positioned against the page, top/left come from the controller
        "absolute",
        "rounded",
        "bg-neutral-900",
        "text-neutral-400",
        "text-sm",
        "z-50",
    );

    html! {
        <div
            class={classes!(props.classes.clone(), "inline-block")}
            {onmouseenter}
            {onmouseleave}
            {onmousemove}
        >
            {props.children.clone()}
            <div ref={panel_ref} class={panel_styles}>
                {props.label.clone()}
            </div>
        </div>
    }
}

fn panel_from_ref(panel_ref: &NodeRef, class: &str) -> Result<TooltipPanel, TooltipError> {
    panel_ref
        .cast::<HtmlElement>()
        .map(TooltipPanel::new)
        .ok_or_else(|| TooltipError::panel_not_found(class))
}

fn show_at_pointer(
    controller: &TooltipController,
    panel_ref: &NodeRef,
    event: &MouseEvent,
) -> Result<(), TooltipError> {
    let panel = panel_from_ref(panel_ref, &controller.config().panel_class)?;
    let env = DomEnvironment::current()?;
    controller.show_panel(pointer_from_event(event), &env, &panel)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use hovertip_placement::TooltipConfig;
    use yew::props;

    use super::HoverTooltipProps;

    #[test]
    fn test_props_defaults() {
        let props = props!(HoverTooltipProps { label: "Delete" });

        assert_eq!(&*props.label, "Delete");
        assert!(!props.follow);
        assert_eq!(*props.config, TooltipConfig::default());
    }
}
