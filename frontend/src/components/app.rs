use yew::prelude::*;

use super::icons::icon_wallet_large;
use super::input_form::InputForm;
use super::report_display::ReportDisplay;
use crate::controller::use_session;
use crate::models::UserInput;
use crate::session::SessionEvent;

fn loading_panel() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full bg-slate-800/50 rounded-lg p-8">
            <div class="w-16 h-16 border-4 border-sky-400 border-t-transparent rounded-full animate-spin"></div>
            <p class="mt-4 text-lg font-semibold text-slate-300">{"Generating your financial analysis..."}</p>
            <p class="text-slate-400">{"This may take a moment."}</p>
        </div>
    }
}

fn error_panel(message: &str) -> Html {
    html! {
        <div class="flex items-center justify-center h-full bg-red-900/20 border border-red-500 text-red-300 rounded-lg p-8">
            <p>{ message.to_string() }</p>
        </div>
    }
}

fn placeholder_panel() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full bg-slate-800/50 rounded-lg p-8 border-2 border-dashed border-slate-700">
            <p class="text-xl font-semibold text-slate-400">{"Your Report Will Appear Here"}</p>
            <p class="text-slate-500 mt-2">{"Fill out the form and click \"Generate Report\" to start."}</p>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let state = session.snapshot();

    let on_submit = {
        let session = session.clone();
        Callback::from(move |input: UserInput| session.dispatch(SessionEvent::Submit(input)))
    };
    let on_send_message = {
        let session = session.clone();
        Callback::from(move |text: String| session.dispatch(SessionEvent::SendMessage(text)))
    };

    let panel = if state.is_generating() {
        loading_panel()
    } else if let Some(message) = state.error.as_deref() {
        error_panel(message)
    } else if let Some(report) = state.report.clone() {
        html! {
            <ReportDisplay
                report={report}
                chat_history={state.transcript.clone()}
                on_send_message={on_send_message}
                replying={state.is_replying()}
            />
        }
    } else {
        placeholder_panel()
    };

    html! {
        <div class="min-h-screen bg-slate-900 text-slate-200 font-sans">
            <div class="container mx-auto p-4 md:p-8">
                <header class="text-center mb-8 md:mb-12">
                    <div class="flex items-center justify-center gap-4">
                        { icon_wallet_large() }
                        <h1 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-sky-400 to-cyan-300 text-transparent bg-clip-text">
                            {"AI Personal Finance Assistant"}
                        </h1>
                    </div>
                    <p class="text-slate-400 mt-4 max-w-2xl mx-auto">
                        {"Input your financial details to receive a comprehensive analysis, and chat with an AI advisor to understand your report better."}
                    </p>
                </header>

                <main class="grid grid-cols-1 lg:grid-cols-12 gap-8">
                    <div class="lg:col-span-4">
                        <InputForm on_submit={on_submit} loading={state.is_generating()} />
                    </div>
                    <div class="lg:col-span-8">
                        { panel }
                    </div>
                </main>
            </div>
        </div>
    }
}
