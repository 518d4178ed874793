//! Presentation helpers shared by the report components. Nothing in here
//! touches the DOM.

use crate::models::{Alerts, ExpenseSummary};

pub const CHART_COLORS: [&str; 6] = [
    "#0ea5e9", "#06b6d4", "#14b8a6", "#f97316", "#ef4444", "#8b5cf6",
];

pub const NO_ALERTS_MESSAGE: &str = "No overspending alerts. Great job!";

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownEntry {
    pub name: String,
    pub value: f64,
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn expense_breakdown(summary: &ExpenseSummary) -> Vec<BreakdownEntry> {
    summary
        .categories()
        .iter()
        .map(|(name, value)| BreakdownEntry {
            name: capitalize(name),
            value: *value,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub color: &'static str,
    pub path: String,
    pub percent: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{} {}%", self.name, self.percent.round() as i64)
    }
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG wedge paths for a pie centred on (cx, cy). Colours follow entry order
/// so the legend stays stable when a category is zero.
pub fn pie_slices(entries: &[BreakdownEntry], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = entries.iter().map(|e| e.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let tau = std::f64::consts::TAU;
    let mut angle = -tau / 4.0;
    let mut slices = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let value = entry.value.max(0.0);
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let color = CHART_COLORS[idx % CHART_COLORS.len()];
        let path = if fraction >= 0.9999 {
            let (tx, ty) = point(cx, cy, r, -tau / 4.0);
            let (bx, by) = point(cx, cy, r, tau / 4.0);
            format!(
                "M {tx:.3} {ty:.3} A {r} {r} 0 1 1 {bx:.3} {by:.3} A {r} {r} 0 1 1 {tx:.3} {ty:.3} Z"
            )
        } else {
            let end = angle + fraction * tau;
            let (x1, y1) = point(cx, cy, r, angle);
            let (x2, y2) = point(cx, cy, r, end);
            let large = if fraction > 0.5 { 1 } else { 0 };
            format!(
                "M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {large} 1 {x2:.3} {y2:.3} Z"
            )
        };
        angle += fraction * tau;
        slices.push(PieSlice {
            name: entry.name.clone(),
            color,
            path,
            percent: fraction * 100.0,
        });
    }
    slices
}

fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Thousands separators, at most two decimals, trailing zero decimals dropped.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = format_with_commas(cents / 100);
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}{}", sign, whole)
    } else if frac % 10 == 0 {
        format!("{}{}.{}", sign, whole, frac / 10)
    } else {
        format!("{}{}.{:02}", sign, whole, frac)
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Negative adjustments are cuts, rendered as good news.
pub fn adjustment_class(delta: f64) -> &'static str {
    if delta < 0.0 {
        "text-green-400"
    } else {
        "text-red-400"
    }
}

pub fn alert_lines(alerts: &Alerts) -> Vec<String> {
    alerts
        .overspending_categories
        .iter()
        .map(|cat| format!("High spending in {}", cat))
        .collect()
}

pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ExpenseSummary {
        ExpenseSummary {
            rent: 1500.0,
            utilities: 200.0,
            subscriptions: 50.0,
            food: 400.0,
            transport: 150.0,
            entertainment: 100.0,
            total_expenses: 2400.0,
            remaining_income: 2600.0,
        }
    }

    #[test]
    fn breakdown_has_six_capitalised_categories() {
        let entries = expense_breakdown(&summary());
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Rent", "Utilities", "Subscriptions", "Food", "Transport", "Entertainment"]
        );
        assert_eq!(entries.iter().map(|e| e.value).sum::<f64>(), 2400.0);
    }

    #[test]
    fn pie_percentages_cover_the_whole() {
        let slices = pie_slices(&expense_breakdown(&summary()), 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), 6);
        let total: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(slices[0].label(), "Rent 63%");
        assert_eq!(slices[0].color, CHART_COLORS[0]);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn pie_skips_zero_and_handles_single_category() {
        let entries = vec![
            BreakdownEntry {
                name: "Rent".into(),
                value: 0.0,
            },
            BreakdownEntry {
                name: "Food".into(),
                value: 300.0,
            },
        ];
        let slices = pie_slices(&entries, 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].color, CHART_COLORS[1]);
        assert_eq!(slices[0].label(), "Food 100%");
        assert!(slices[0].path.starts_with("M 50.000 10.000"));

        let empty = vec![BreakdownEntry {
            name: "Rent".into(),
            value: 0.0,
        }];
        assert!(pie_slices(&empty, 50.0, 50.0, 40.0).is_empty());
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(1500.5), "1,500.5");
        assert_eq!(format_amount(99.99), "99.99");
        assert_eq!(format_currency(-50.0, "$"), "-$50");
        assert_eq!(format_currency(2600.0, "$"), "$2,600");
    }

    #[test]
    fn adjustment_colours_by_sign() {
        assert_eq!(adjustment_class(-20.0), "text-green-400");
        assert_eq!(adjustment_class(0.0), "text-red-400");
        assert_eq!(adjustment_class(15.0), "text-red-400");
    }

    #[test]
    fn alert_lines_name_categories() {
        let alerts = Alerts {
            overspending_categories: vec!["food".into()],
        };
        assert_eq!(alert_lines(&alerts), ["High spending in food"]);
        let none = Alerts {
            overspending_categories: vec![],
        };
        assert!(alert_lines(&none).is_empty());
    }

    #[test]
    fn paragraphs_split_on_newlines() {
        assert_eq!(paragraphs("a\nb"), ["a", "b"]);
        assert_eq!(paragraphs("single"), ["single"]);
    }
}
