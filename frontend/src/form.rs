use chrono::{Datelike, Local, NaiveDate};

use crate::models::{Debt, Expenses, FinancialPriority, UserInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Income,
    Rent,
    Utilities,
    Subscriptions,
    Food,
    Transport,
    Entertainment,
    SavingsGoal,
    DebtAmount,
    Priority,
    Period,
}

/// Editable form contents. Everything stays text until `finalize`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub income: String,
    pub rent: String,
    pub utilities: String,
    pub subscriptions: String,
    pub food: String,
    pub transport: String,
    pub entertainment: String,
    pub savings_goal: String,
    pub debt_amount: String,
    pub priority: FinancialPriority,
    pub period: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl FormState {
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            income: String::new(),
            rent: String::new(),
            utilities: String::new(),
            subscriptions: String::new(),
            food: String::new(),
            transport: String::new(),
            entertainment: String::new(),
            savings_goal: String::new(),
            debt_amount: String::new(),
            priority: FinancialPriority::default(),
            period: period_label(today),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Income => &self.income,
            Field::Rent => &self.rent,
            Field::Utilities => &self.utilities,
            Field::Subscriptions => &self.subscriptions,
            Field::Food => &self.food,
            Field::Transport => &self.transport,
            Field::Entertainment => &self.entertainment,
            Field::SavingsGoal => &self.savings_goal,
            Field::DebtAmount => &self.debt_amount,
            Field::Priority => self.priority.label(),
            Field::Period => &self.period,
        }
    }

    /// Unknown priority labels leave the current selection untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Income => self.income = value,
            Field::Rent => self.rent = value,
            Field::Utilities => self.utilities = value,
            Field::Subscriptions => self.subscriptions = value,
            Field::Food => self.food = value,
            Field::Transport => self.transport = value,
            Field::Entertainment => self.entertainment = value,
            Field::SavingsGoal => self.savings_goal = value,
            Field::DebtAmount => self.debt_amount = value,
            Field::Priority => {
                if let Some(priority) = FinancialPriority::from_label(&value) {
                    self.priority = priority;
                }
            }
            Field::Period => self.period = value,
        }
    }

    pub fn finalize(&self) -> UserInput {
        UserInput {
            income: parse_amount(&self.income),
            expenses: Expenses {
                rent: parse_amount(&self.rent),
                utilities: parse_amount(&self.utilities),
                subscriptions: parse_amount(&self.subscriptions),
                food: parse_amount(&self.food),
                transport: parse_amount(&self.transport),
                entertainment: parse_amount(&self.entertainment),
            },
            savings_goal: parse_amount(&self.savings_goal),
            debt: Debt {
                amount: parse_amount(&self.debt_amount),
            },
            financial_priority: self.priority,
            period: self.period.clone(),
        }
    }
}

pub fn period_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.year())
}

/// Empty, unparsable, non-finite and negative text all coerce to 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn defaults() {
        let form = FormState::for_date(june_2024());
        assert_eq!(form.period, "June 2024");
        assert_eq!(form.priority, FinancialPriority::EmergencyFund);
        assert!(form.income.is_empty());
        assert_eq!(form.finalize().income, 0.0);
    }

    #[test]
    fn parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-40"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn finalize_coerces_each_field_independently() {
        let mut form = FormState::for_date(june_2024());
        form.set(Field::Income, "5000".into());
        form.set(Field::Rent, "1500".into());
        form.set(Field::Utilities, "two hundred".into());
        form.set(Field::Food, "400".into());
        form.set(Field::DebtAmount, "10000".into());
        form.set(Field::Priority, "debt reduction".into());
        form.set(Field::Period, "Q3".into());

        let input = form.finalize();
        assert_eq!(input.income, 5000.0);
        assert_eq!(input.expenses.rent, 1500.0);
        assert_eq!(input.expenses.utilities, 0.0);
        assert_eq!(input.expenses.food, 400.0);
        assert_eq!(input.debt.amount, 10000.0);
        assert_eq!(input.financial_priority, FinancialPriority::DebtReduction);
        assert_eq!(input.period, "Q3");
    }

    #[test]
    fn unknown_priority_is_ignored() {
        let mut form = FormState::for_date(june_2024());
        form.set(Field::Priority, "crypto".into());
        assert_eq!(form.get(Field::Priority), "emergency fund");
    }
}
