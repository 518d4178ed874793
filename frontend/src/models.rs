use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FinancialPriority {
    #[default]
    #[serde(rename = "emergency fund")]
    EmergencyFund,
    #[serde(rename = "investment")]
    Investment,
    #[serde(rename = "debt reduction")]
    DebtReduction,
}

impl FinancialPriority {
    pub const ALL: [FinancialPriority; 3] = [
        FinancialPriority::EmergencyFund,
        FinancialPriority::Investment,
        FinancialPriority::DebtReduction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FinancialPriority::EmergencyFund => "emergency fund",
            FinancialPriority::Investment => "investment",
            FinancialPriority::DebtReduction => "debt reduction",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Expenses {
    pub rent: f64,
    pub utilities: f64,
    pub subscriptions: f64,
    pub food: f64,
    pub transport: f64,
    pub entertainment: f64,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Debt {
    pub amount: f64,
}

/// Snapshot of the form taken at submit time. Field names follow the camelCase
/// shape embedded in the prompt.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub income: f64,
    pub expenses: Expenses,
    pub savings_goal: f64,
    pub debt: Debt,
    pub financial_priority: FinancialPriority,
    pub period: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseSummary {
    pub rent: f64,
    pub utilities: f64,
    pub subscriptions: f64,
    pub food: f64,
    pub transport: f64,
    pub entertainment: f64,
    pub total_expenses: f64,
    pub remaining_income: f64,
}

impl ExpenseSummary {
    /// Per-category amounts in display order, aggregates excluded.
    pub fn categories(&self) -> [(&'static str, f64); 6] {
        [
            ("rent", self.rent),
            ("utilities", self.utilities),
            ("subscriptions", self.subscriptions),
            ("food", self.food),
            ("transport", self.transport),
            ("entertainment", self.entertainment),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Adjustments {
    pub food: f64,
    pub entertainment: f64,
    pub subscriptions: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetSuggestions {
    pub next_month_limit: f64,
    pub adjustments: Adjustments,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavingsOpportunities {
    pub expected_savings: f64,
    pub actions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebtManagement {
    pub priority: String,
    pub monthly_payment: f64,
    pub strategy: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alerts {
    pub overspending_categories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorReport {
    pub expense_summary: ExpenseSummary,
    pub budget_suggestions: BudgetSuggestions,
    pub savings_opportunities: SavingsOpportunities,
    pub debt_management: DebtManagement,
    pub financial_tips: Vec<String>,
    pub alerts: Alerts,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullReport {
    pub calculator_mode: CalculatorReport,
    pub advisor_mode: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
