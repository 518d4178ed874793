use yew::prelude::*;

use super::icons::{icon_alert, icon_budget, icon_debt, icon_savings, icon_tips};
use crate::models::CalculatorReport;
use crate::view::{
    adjustment_class, alert_lines, capitalize, expense_breakdown, format_currency, pie_slices,
    NO_ALERTS_MESSAGE,
};

const CURRENCY: &str = "$";

#[derive(Properties, PartialEq)]
pub struct CalculatorViewProps {
    pub data: CalculatorReport,
}

fn metric_card(title: &'static str, value: f64, color: &'static str) -> Html {
    html! {
        <div class="bg-slate-800 p-4 rounded-lg border border-slate-700 text-center">
            <p class="text-sm text-slate-400">{ title }</p>
            <p class={classes!("text-2xl", "font-bold", color)}>{ format_currency(value, CURRENCY) }</p>
        </div>
    }
}

fn info_card(title: &'static str, icon: Html, children: Html) -> Html {
    html! {
        <div class="bg-slate-800 p-6 rounded-lg border border-slate-700">
            <div class="flex items-center gap-3 mb-4">
                <div class="text-sky-400">{ icon }</div>
                <h3 class="text-xl font-semibold text-slate-300">{ title }</h3>
            </div>
            <div class="text-slate-300 space-y-2">{ children }</div>
        </div>
    }
}

fn bullet_list(items: &[String], class: &'static str) -> Html {
    html! {
        <ul class={class}>
            { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
        </ul>
    }
}

fn breakdown_chart(data: &CalculatorReport) -> Html {
    let slices = pie_slices(&expense_breakdown(&data.expense_summary), 100.0, 100.0, 80.0);
    if slices.is_empty() {
        return html! { <p class="text-slate-400 text-center py-12">{"No expenses to chart."}</p> };
    }

    html! {
        <div class="flex flex-col md:flex-row items-center justify-center gap-8">
            <svg viewBox="0 0 200 200" class="w-64 h-64">
                { for slices.iter().map(|slice| html! {
                    <path d={slice.path.clone()} fill={slice.color} stroke="#1e293b" stroke-width="1">
                        <title>{ slice.label() }</title>
                    </path>
                }) }
            </svg>
            <ul class="space-y-2">
                { for slices.iter().map(|slice| html! {
                    <li class="flex items-center gap-2 text-sm text-slate-300">
                        <span class="inline-block w-3 h-3 rounded-sm" style={format!("background-color: {}", slice.color)}></span>
                        { slice.label() }
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(CalculatorView)]
pub fn calculator_view(props: &CalculatorViewProps) -> Html {
    let data = &props.data;
    let adjustments = &data.budget_suggestions.adjustments;
    let adjustment_rows = [
        ("food", adjustments.food),
        ("entertainment", adjustments.entertainment),
        ("subscriptions", adjustments.subscriptions),
    ];
    let alerts = alert_lines(&data.alerts);

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                { metric_card("Total Expenses", data.expense_summary.total_expenses, "text-red-400") }
                { metric_card("Remaining Income", data.expense_summary.remaining_income, "text-green-400") }
                { metric_card("Expected Savings", data.savings_opportunities.expected_savings, "text-sky-400") }
            </div>

            <div class="bg-slate-800 p-6 rounded-lg border border-slate-700">
                <h3 class="text-xl font-semibold mb-4 text-slate-300">{"Expense Breakdown"}</h3>
                { breakdown_chart(data) }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                { info_card("Budget Suggestions", icon_budget(), html! {
                    <>
                        <p>
                            {"Next Month's Limit: "}
                            <span class="font-bold text-sky-400">{ format_currency(data.budget_suggestions.next_month_limit, CURRENCY) }</span>
                        </p>
                        <h4 class="font-semibold mt-3 mb-1 text-slate-400">{"Adjustments:"}</h4>
                        <ul class="list-disc list-inside space-y-1">
                            { for adjustment_rows.iter().map(|(name, delta)| html! {
                                <li>
                                    { format!("{}: ", capitalize(name)) }
                                    <span class={adjustment_class(*delta)}>{ format_currency(*delta, CURRENCY) }</span>
                                </li>
                            }) }
                        </ul>
                    </>
                }) }

                { info_card("Savings Opportunities", icon_savings(),
                    bullet_list(&data.savings_opportunities.actions, "list-disc list-inside space-y-1")) }

                { info_card("Debt Management", icon_debt(), html! {
                    <>
                        <p>{"Priority: "}<span class="font-bold text-sky-400">{ data.debt_management.priority.clone() }</span></p>
                        <p>{"Suggested Payment: "}<span class="font-bold text-sky-400">{ format_currency(data.debt_management.monthly_payment, CURRENCY) }</span></p>
                        <p>{"Strategy: "}<span class="font-bold text-sky-400">{ data.debt_management.strategy.clone() }</span></p>
                    </>
                }) }

                { info_card("Alerts", icon_alert(),
                    if alerts.is_empty() {
                        html! { <p class="text-green-400">{ NO_ALERTS_MESSAGE }</p> }
                    } else {
                        bullet_list(&alerts, "list-disc list-inside space-y-1 text-yellow-400")
                    }
                ) }
            </div>

            { info_card("Financial Tips", icon_tips(),
                bullet_list(&data.financial_tips, "list-disc list-inside space-y-2")) }
        </div>
    }
}
