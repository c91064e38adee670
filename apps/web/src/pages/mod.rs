use std::rc::Rc;

use hovertip_placement::TooltipConfig;
use ui_components::HoverTooltip;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppPageProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn AppPage(props: &AppPageProps) -> Html {
    html! {
        <div class="flex-col flex-1 min-h-screen">
            {props.children.clone()}
        </div>
    }
}

const COMPACT_CONFIG: &str = include_str!("compact.ron");

fn compact_config() -> TooltipConfig {
    TooltipConfig::from_ron(COMPACT_CONFIG).unwrap_or_else(|err| {
        log::error!("Falling back to default tooltip config: {}", err);
        TooltipConfig::default()
    })
}

#[function_component]
pub fn TooltipDemo() -> Html {
    let compact = use_memo(|_| compact_config(), ());

    let item_styles = classes!("p-2", "border", "border-neutral-600", "rounded-md", "cursor-default");

    html! {
        <div class="flex flex-col gap-4 p-8">
            <h2 class="text-xl">{"Component wiring"}</h2>
            <div class="flex flex-row gap-4">
                <HoverTooltip label="Shown on enter, hidden on leave" classes={item_styles.clone()}>
                    {"Default"}
                </HoverTooltip>
                <HoverTooltip label="Tracks the cursor" follow={true} classes={item_styles.clone()}>
                    {"Follow"}
                </HoverTooltip>
                <HoverTooltip label="Custom offsets" config={compact} classes={item_styles.clone()}>
                    {"Compact"}
                </HoverTooltip>
            </div>
            // Scroll far enough to check that panels stay with the cursor
            <div class="h-[200vh]" />
            <HoverTooltip label="Placed below a scrolled page" classes={item_styles}>
                {"Bottom"}
            </HoverTooltip>
        </div>
    }
}

#[cfg(test)]
mod test {
    use hovertip_placement::TooltipConfig;

    use super::{compact_config, COMPACT_CONFIG};

    #[test]
    fn test_compact_config_loads() {
        let config = TooltipConfig::from_ron(COMPACT_CONFIG).expect("Unable to parse compact.ron");
        assert_eq!(config.right_reserve, 200.0);
        assert_eq!(config.offset_y, 12.0);
        assert_eq!(config.panel_class, "tooltip_text");
        assert_eq!(compact_config(), config);
    }
}
