use web_sys::InputEvent;
use yew::prelude::*;

use super::icons::icon_send;
use crate::models::{ChatMessage, Role};
use crate::view::paragraphs;

#[derive(Properties, PartialEq)]
pub struct AdvisorViewProps {
    pub messages: Vec<ChatMessage>,
    pub on_send: Callback<String>,
    pub replying: bool,
}

fn avatar() -> Html {
    html! {
        <div class="w-8 h-8 rounded-full bg-sky-500 flex items-center justify-center flex-shrink-0 text-white font-bold text-sm">{"AI"}</div>
    }
}

fn bubble(message: &ChatMessage) -> Html {
    let is_user = message.role == Role::User;
    let row = if is_user {
        "flex items-end gap-3 justify-end"
    } else {
        "flex items-end gap-3"
    };
    let tone = if is_user { "bg-sky-700" } else { "bg-slate-700" };

    html! {
        <div class={row}>
            { if is_user { html! {} } else { avatar() } }
            <div class={classes!("max-w-md", "md:max-w-lg", "rounded-lg", "px-4", "py-2", "text-white", tone)}>
                { for paragraphs(&message.content).into_iter().map(|p| html! {
                    <p class="mb-2 last:mb-0">{ p.to_string() }</p>
                }) }
            </div>
        </div>
    }
}

fn typing_indicator() -> Html {
    html! {
        <div class="flex items-end gap-3">
            { avatar() }
            <div class="max-w-md rounded-lg px-4 py-3 bg-slate-700">
                <div class="flex items-center justify-center space-x-1">
                    <div class="w-2 h-2 bg-slate-400 rounded-full animate-pulse"></div>
                    <div class="w-2 h-2 bg-slate-400 rounded-full animate-pulse"></div>
                    <div class="w-2 h-2 bg-slate-400 rounded-full animate-pulse"></div>
                </div>
            </div>
        </div>
    }
}

#[function_component(AdvisorView)]
pub fn advisor_view(props: &AdvisorViewProps) -> Html {
    let draft = use_state(String::new);
    let messages_end = use_node_ref();

    {
        let messages_end = messages_end.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(el) = messages_end.cast::<web_sys::Element>() {
                    el.scroll_into_view();
                }
                || ()
            },
            (props.messages.len(), props.replying),
        );
    }

    let send = {
        let draft = draft.clone();
        let on_send = props.on_send.clone();
        let replying = props.replying;
        Callback::from(move |_: ()| {
            if replying || draft.trim().is_empty() {
                return;
            }
            on_send.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let onkeydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                send.emit(());
            }
        })
    };
    let onclick = send.reform(|_: MouseEvent| ());

    html! {
        <div class="flex flex-col h-full">
            <div class="flex-grow space-y-4 pr-2">
                { for props.messages.iter().map(bubble) }
                { if props.replying { typing_indicator() } else { html! {} } }
                <div ref={messages_end}></div>
            </div>
            <div class="mt-4 flex-shrink-0">
                <div class="flex items-center space-x-2">
                    <input
                        type="text"
                        value={(*draft).clone()}
                        oninput={oninput}
                        onkeydown={onkeydown}
                        placeholder="Ask a follow-up question..."
                        disabled={props.replying}
                        class="flex-grow bg-slate-700 border border-slate-600 rounded-md shadow-sm py-2 px-3 focus:outline-none focus:ring-sky-500 focus:border-sky-500 sm:text-sm text-white disabled:bg-slate-800"
                    />
                    <button
                        type="button"
                        onclick={onclick}
                        disabled={props.replying || draft.trim().is_empty()}
                        class="p-2 bg-sky-600 rounded-md text-white hover:bg-sky-700 disabled:bg-slate-600 disabled:cursor-not-allowed"
                    >
                        { icon_send() }
                    </button>
                </div>
            </div>
        </div>
    }
}
