use yew::prelude::*;

mod pages;
use pages::{AppPage, TooltipDemo};

#[function_component]
fn App() -> Html {
    html! {
        <AppPage>
            <TooltipDemo />
        </AppPage>
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
