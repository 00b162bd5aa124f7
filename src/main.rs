mod api;
mod components;
mod config;
mod state;
mod storage;

use yew::prelude::*;

#[function_component]
fn App() -> Html {
    use crate::components::ChatWidget;

    let config = use_memo(|_| crate::config::WidgetConfig::default(), ());

    html! {
        <ChatWidget config={config} />
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
