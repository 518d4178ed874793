use yew::prelude::*;

use super::advisor_view::AdvisorView;
use super::calculator_view::CalculatorView;
use crate::models::{ChatMessage, FullReport};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Calculator,
    Advisor,
}

#[derive(Properties, PartialEq)]
pub struct ReportDisplayProps {
    pub report: FullReport,
    pub chat_history: Vec<ChatMessage>,
    pub on_send_message: Callback<String>,
    pub replying: bool,
}

fn tab_button(label: &'static str, mode: ViewMode, active: &UseStateHandle<ViewMode>) -> Html {
    let class_name = if **active == mode {
        "w-full py-2 px-4 rounded-md text-sm font-semibold transition-colors bg-sky-600 text-white"
    } else {
        "w-full py-2 px-4 rounded-md text-sm font-semibold transition-colors bg-transparent text-slate-300 hover:bg-slate-700"
    };
    let active = active.clone();
    html! {
        <button type="button" class={class_name} onclick={Callback::from(move |_| active.set(mode))}>
            { label }
        </button>
    }
}

#[function_component(ReportDisplay)]
pub fn report_display(props: &ReportDisplayProps) -> Html {
    let view_mode = use_state(|| ViewMode::Calculator);

    let content = match *view_mode {
        ViewMode::Calculator => html! { <CalculatorView data={props.report.calculator_mode.clone()} /> },
        ViewMode::Advisor => html! {
            <AdvisorView
                messages={props.chat_history.clone()}
                on_send={props.on_send_message.clone()}
                replying={props.replying}
            />
        },
    };

    html! {
        <div class="bg-slate-800/50 rounded-lg shadow-lg border border-slate-700 flex flex-col h-full max-h-[80vh]">
            <div class="p-4 border-b border-slate-700 flex-shrink-0">
                <div class="flex space-x-2 bg-slate-900 p-1 rounded-lg max-w-xs mx-auto">
                    { tab_button("Dashboard Report", ViewMode::Calculator, &view_mode) }
                    { tab_button("AI Advisor", ViewMode::Advisor, &view_mode) }
                </div>
            </div>
            <div class="flex-grow overflow-y-auto p-4 md:p-6">
                { content }
            </div>
        </div>
    }
}
