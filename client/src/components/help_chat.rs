//! Floating mentor-assistant chat: launcher button plus message panel.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::AssistantTurn;
#[cfg(feature = "hydrate")]
use crate::state::chat::CHAT_ERROR_TEXT;
use crate::state::chat::{ChatMessage, ChatRole, ChatState};

/// Launcher button and chat panel. Mounted once at the app root so the
/// conversation survives page navigation.
#[component]
pub fn HelpChat() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let toggle = move |_| chat.update(|c| c.open = !c.open);

    view! {
        <Show when=move || chat.get().open>
            <ChatPanel/>
        </Show>
        <button
            class="chat-launcher"
            class:chat-launcher--open=move || chat.get().open
            on:click=toggle
        >
            {move || if chat.get().open { "×" } else { "?" }}
        </button>
    }
}

/// The conversation panel: history, loading indicator, input row.
#[component]
fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message visible.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get().loading {
            return;
        }
        input.set(String::new());

        chat.update(|c| {
            c.messages.push(ChatMessage::new(ChatRole::User, text.trim()));
            c.loading = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let turns: Vec<AssistantTurn> = chat
                .get_untracked()
                .messages
                .iter()
                .map(|m| AssistantTurn { role: m.role.as_str().to_owned(), content: m.text.clone() })
                .collect();

            leptos::task::spawn_local(async move {
                let reply = match crate::net::api::ask_assistant(&turns).await {
                    Ok(reply) => reply,
                    Err(_) => CHAT_ERROR_TEXT.to_owned(),
                };
                chat.update(|c| {
                    c.messages.push(ChatMessage::new(ChatRole::Assistant, reply));
                    c.loading = false;
                });
            });
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Mentor Assistant"</span>
                <button class="chat-panel__close" on:click=move |_| chat.update(|c| c.open = false)>
                    "×"
                </button>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.role == ChatRole::User;
                            let text = msg.text.clone();
                            view! {
                                <div class="chat-panel__message" class:chat-panel__message--user=is_user>
                                    {text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about Shell, C, or Python..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
