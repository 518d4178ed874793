use web_sys::InputEvent;
use yew::prelude::*;

use crate::form::{Field, FormState};
use crate::models::{FinancialPriority, UserInput};

#[derive(Properties, PartialEq)]
pub struct InputFormProps {
    pub on_submit: Callback<UserInput>,
    pub loading: bool,
}

fn input_field(
    form: &UseStateHandle<FormState>,
    label: &'static str,
    field: Field,
    numeric: bool,
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let (kind, class, placeholder) = if numeric {
        (
            "number",
            "block w-full bg-slate-700 border-slate-600 rounded-md sm:text-sm text-white focus:ring-sky-500 focus:border-sky-500 pl-7 py-2",
            "0",
        )
    } else {
        (
            "text",
            "block w-full bg-slate-700 border-slate-600 rounded-md sm:text-sm text-white focus:ring-sky-500 focus:border-sky-500 px-3 py-2",
            "",
        )
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-slate-300">{ label }</label>
            <div class="mt-1 relative rounded-md shadow-sm">
                {
                    if numeric {
                        html! {
                            <div class="pointer-events-none absolute inset-y-0 left-0 pl-3 flex items-center">
                                <span class="text-gray-400 sm:text-sm">{"$"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <input type={kind} class={class} placeholder={placeholder} value={form.get(field).to_string()} oninput={oninput} />
            </div>
        </div>
    }
}

fn section(title: &'static str, children: Html) -> Html {
    html! {
        <fieldset class="border border-slate-700 p-4 rounded-md">
            <legend class="px-2 text-lg font-semibold text-slate-400">{ title }</legend>
            <div class="space-y-4">{ children }</div>
        </fieldset>
    }
}

#[function_component(InputForm)]
pub fn input_form(props: &InputFormProps) -> Html {
    let form = use_state(FormState::default);

    let on_priority = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::Priority, select.value());
            form.set(next);
        })
    };

    let on_click = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        let loading = props.loading;
        Callback::from(move |_: MouseEvent| {
            if loading {
                return;
            }
            on_submit.emit(form.finalize());
        })
    };

    let selected = form.priority;

    html! {
        <div class="bg-slate-800 p-6 rounded-lg shadow-lg border border-slate-700">
            <h2 class="text-2xl font-bold mb-6 text-sky-400">{"Your Financial Details"}</h2>
            <div class="space-y-6">
                <div class="space-y-4">
                    { section("Income & Period", html! {
                        <>
                            { input_field(&form, "Monthly Income", Field::Income, true) }
                            { input_field(&form, "Analysis Period", Field::Period, false) }
                        </>
                    }) }
                    { section("Expenses", html! {
                        <>
                            { input_field(&form, "Rent/Mortgage", Field::Rent, true) }
                            { input_field(&form, "Utilities", Field::Utilities, true) }
                            { input_field(&form, "Subscriptions", Field::Subscriptions, true) }
                            { input_field(&form, "Food/Groceries", Field::Food, true) }
                            { input_field(&form, "Transport", Field::Transport, true) }
                            { input_field(&form, "Entertainment", Field::Entertainment, true) }
                        </>
                    }) }
                    { section("Goals & Debt", html! {
                        <>
                            { input_field(&form, "Monthly Savings Goal", Field::SavingsGoal, true) }
                            { input_field(&form, "Total Debt Amount", Field::DebtAmount, true) }
                            <div>
                                <label class="block text-sm font-medium text-slate-300">{"Financial Priority"}</label>
                                <select onchange={on_priority} class="mt-1 block w-full bg-slate-700 border border-slate-600 rounded-md shadow-sm py-2 px-3 focus:outline-none focus:ring-sky-500 focus:border-sky-500 sm:text-sm text-white">
                                    { for FinancialPriority::ALL.iter().map(|p| html! {
                                        <option value={p.label()} selected={*p == selected}>{ p.label() }</option>
                                    }) }
                                </select>
                            </div>
                        </>
                    }) }
                </div>
                <button
                    type="button"
                    onclick={on_click}
                    disabled={props.loading}
                    class="w-full flex justify-center py-3 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-sky-600 hover:bg-sky-700 disabled:bg-slate-600 disabled:cursor-not-allowed transition-colors"
                >
                    { if props.loading { "Generating..." } else { "Generate Report" } }
                </button>
            </div>
        </div>
    }
}
