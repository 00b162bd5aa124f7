use std::rc::Rc;

use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::{
    api::AskClient,
    config::WidgetConfig,
    state::{ChatAction, ChatEntry, ChatLog, Sender, TYPING_TEXT},
    storage,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatWidgetProps {
    pub config: Rc<WidgetConfig>,
}

// The collapsed panel is hidden, not unmounted, so the message list keeps
// its scroll position across toggles.
fn panel_classes(open: bool) -> Classes {
    classes!("chat-panel", (!open).then_some("hidden"))
}

/// Floating mascot chat widget: toggle control, message panel and send flow.
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let open = use_state(storage::panel_open);
    let log = use_reducer(ChatLog::default);
    let input_ref = use_node_ref();
    let scroll_ref = use_node_ref();

    let on_toggle = {
        let open = open.clone();
        move |_| {
            let next = !*open;
            storage::set_panel_open(next);
            open.set(next);
        }
    };

    // Shared by the send button and the Enter key binding so both paths
    // behave identically.
    let send = {
        let log = log.clone();
        let input_ref = input_ref.clone();
        let client = AskClient::new(&props.config.api_base_url);
        Rc::new(move || {
            let input = match input_ref.cast::<HtmlTextAreaElement>() {
                Some(input) => input,
                None => return,
            };
            let message = match log.accepts(&input.value()) {
                Some(message) => message,
                None => return,
            };
            input.set_value("");
            log.dispatch(ChatAction::Submit(message.clone()));

            let log = log.clone();
            let client = client.clone();
            spawn_local(async move {
                match client.ask(&message).await {
                    Ok(reply) => log.dispatch(ChatAction::Resolved(reply)),
                    Err(error) => {
                        debug!("ask request failed: {error}");
                        log.dispatch(ChatAction::Failed);
                    }
                }
            });
        })
    };

    let on_send = {
        let send = send.clone();
        move |_: MouseEvent| send()
    };

    let on_keydown = {
        let send = send.clone();
        move |event: KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                send();
            }
        }
    };

    use_effect_with_deps(
        {
            let scroll_ref = scroll_ref.clone();
            move |_: &(usize, bool)| {
                if let Some(list) = scroll_ref.cast::<HtmlElement>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || {}
            }
        },
        (log.entries.len(), log.pending),
    );

    let render_entry = |entry: &ChatEntry| {
        html! {
            <div class={classes!("chat-message", entry.sender.css_class())}>
                <strong>{ entry.sender.label() }{": "}</strong>
                { entry.text.clone() }
            </div>
        }
    };

    html! {
        <div class="chat-widget">
            <div class={panel_classes(*open)}>
                <div class="chat-messages" ref={scroll_ref}>
                    { for log.entries.iter().map(render_entry) }
                    if log.pending {
                        <div class={classes!("chat-message", Sender::Bot.css_class(), "typing")}>
                            <strong>{ Sender::Bot.label() }{": "}</strong>
                            { TYPING_TEXT }
                        </div>
                    }
                </div>
                <div class="chat-input-row">
                    <textarea
                        ref={input_ref}
                        placeholder="พิมพ์ข้อความ..."
                        onkeydown={on_keydown}
                    />
                    <button class="chat-send" onclick={on_send}>{ "ส่ง" }</button>
                </div>
            </div>
            <button class="chat-toggle" onclick={on_toggle}>
                <img src={props.config.mascot_icon(*open).to_owned()} alt="mascot" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_panel_is_hidden_but_stays_mounted() {
        assert!(panel_classes(true).contains("chat-panel"));
        assert!(!panel_classes(true).contains("hidden"));
        assert!(panel_classes(false).contains("chat-panel"));
        assert!(panel_classes(false).contains("hidden"));
    }
}
