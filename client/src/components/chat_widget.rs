//! Floating chat widget: conversation history, quick actions, input row.

use leptos::prelude::*;

use crate::state::chat::{ChatState, SendOutcome, Sender, bot_reply_lines};
use crate::state::shortcuts::QUICK_ACTIONS;

/// Chat widget with a floating launcher and a message window.
///
/// Shortcut sends resolve locally; anything else shows a typing
/// placeholder and fetches the reply from `/api/chat`, replacing the
/// placeholder by its correlation id when the call settles.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message visible whenever the conversation changes or
    // the window opens.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.messages.len(), state.open);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move |explicit: Option<String>| {
        let mut outcome = SendOutcome::Ignored;
        chat.update(|c| outcome = c.send(explicit.as_deref()));

        if let SendOutcome::Pending { id, message } = outcome {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    match crate::net::api::post_chat(&message).await {
                        Ok(text) => chat.update(|c| c.resolve_pending(id, &text)),
                        Err(_) => chat.update(|c| c.fail_pending(id)),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, message);
            }
        }
    };

    let on_send_click = move |_| do_send(None);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send(None);
        }
    };

    view! {
        <div class="chat-widget">
            <div class="chat-widget__window" class:chat-widget__window--open=move || chat.get().open>
                <div class="chat-widget__header">
                    <span>"BAHO Assistant"</span>
                    <button class="chat-widget__close" on:click=move |_| chat.update(|c| c.open = false)>
                        "×"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| {
                                match msg.sender {
                                    Sender::User => {
                                        let text = msg.text.clone();
                                        view! {
                                            <div class="chat-widget__msg chat-widget__msg--user">{text}</div>
                                        }
                                            .into_any()
                                    }
                                    Sender::Bot => {
                                        let lines = bot_reply_lines(&msg.text);
                                        view! {
                                            <div class="chat-widget__msg chat-widget__msg--bot">
                                                {lines
                                                    .into_iter()
                                                    .map(|line| view! { <p>{line}</p> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="chat-widget__quick-buttons">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|label| {
                            let label = *label;
                            view! {
                                <button on:click=move |_| do_send(Some(label.to_owned()))>{label}</button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || chat.get().input
                        on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary chat-widget__send" on:click=on_send_click>
                        "Send"
                    </button>
                </div>
            </div>

            <div class="chat-widget__launcher" on:click=move |_| chat.update(|c| c.open = true)>
                <span class="chat-widget__label">"Chat with Dr. Aline"</span>
                <img src="/assets/chat-icon.jpg" alt="Chat" class="chat-widget__launcher-image"/>
            </div>
        </div>
    }
}
