use serde_json::{json, Value};

use crate::models::{CalculatorReport, ChatMessage, Role, UserInput};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn object(properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Response schema sent with the report request. Every property is required.
pub fn report_schema() -> Value {
    let calculator = object(json!({
        "expense_summary": object(json!({
            "rent": number(),
            "utilities": number(),
            "subscriptions": number(),
            "food": number(),
            "transport": number(),
            "entertainment": number(),
            "total_expenses": number(),
            "remaining_income": number(),
        })),
        "budget_suggestions": object(json!({
            "next_month_limit": number(),
            "adjustments": object(json!({
                "food": number(),
                "entertainment": number(),
                "subscriptions": number(),
            })),
        })),
        "savings_opportunities": object(json!({
            "expected_savings": number(),
            "actions": string_list(),
        })),
        "debt_management": object(json!({
            "priority": string(),
            "monthly_payment": number(),
            "strategy": string(),
        })),
        "financial_tips": string_list(),
        "alerts": object(json!({
            "overspending_categories": string_list(),
        })),
    }));

    let mut advisor = string();
    advisor["description"] = json!(
        "Professional, friendly advice explaining the numbers from calculator_mode. \
         Offer context, actionable recommendations, and financial tips in clear sentences. \
         Ensure all advice matches the data and calculations from Calculator Mode."
    );

    object(json!({
        "calculator_mode": calculator,
        "advisor_mode": advisor,
    }))
}

pub fn report_prompt(input: &UserInput) -> String {
    format!(
        r#"
You are an AI Personal Finance Assistant. Analyze the user's financial data and generate a comprehensive report in two modes: Calculator and Advisor.
The final output MUST be a single, valid JSON object that adheres to the provided schema.

User's Financial Data:
{}

Instructions:
1.  **Calculator Mode**: Generate a structured JSON report. All numbers and actions should be realistic and based on the input data. Do NOT include conversational sentences.
2.  **Advisor Mode**: Provide professional, friendly advice explaining the numbers. Offer context, actionable recommendations, and financial tips in clear sentences. This will be the FIRST message in a chat conversation. Ensure all advice matches the data from Calculator Mode.
"#,
        pretty(input)
    )
}

pub fn transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|m| {
            let speaker = match m.role {
                Role::User => "User",
                Role::Assistant => "Assistant",
            };
            format!("{}: {}", speaker, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn advisor_prompt(
    input: &UserInput,
    report: &CalculatorReport,
    history: &[ChatMessage],
    question: &str,
) -> String {
    format!(
        r#"
You are an AI Personal Finance Assistant.
Your role is to answer follow-up questions based on the user's financial data and the initial analysis you provided.
DO NOT provide advice outside of the financial context provided. Keep your answers concise and directly related to the question.

Here is the user's original financial data:
{}

Here is the data-driven report you generated:
{}

Here is the conversation history so far:
{}

New question from the user:
{}

Please provide a helpful and conversational response to the user's new question based ONLY on the context above.
"#,
        pretty(input),
        pretty(report),
        transcript(history),
        question
    )
}
