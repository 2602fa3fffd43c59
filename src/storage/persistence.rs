//! Persistence contract for the two stored entries
//!
//! Loads never fail: a missing or unreadable entry yields the default value
//! and a warning in the log. Saves report failure to the caller, which is free
//! to treat it as non-fatal.

use crate::error::BudgetResult;
use crate::models::{Expense, Money};

/// Durable storage for the total budget and the expense collection
pub trait Persistence {
    /// Stored total budget, or zero if absent or unparsable
    fn load_budget(&self) -> Money;

    /// Stored expenses, or an empty list if absent or unparsable
    fn load_expenses(&self) -> Vec<Expense>;

    /// Overwrite the stored budget
    fn save_budget(&mut self, value: Money) -> BudgetResult<()>;

    /// Overwrite the stored expense collection
    fn save_expenses(&mut self, expenses: &[Expense]) -> BudgetResult<()>;

    /// Remove both stored entries
    fn clear(&mut self) -> BudgetResult<()>;
}

/// Parse the stored text form of the budget
///
/// Surrounding whitespace is ignored. Non-numeric, non-finite and negative
/// values are rejected so the caller can fall back to zero.
pub fn parse_budget_text(text: &str) -> Option<Money> {
    let value: f64 = text.trim().parse().ok()?;
    let money = Money::from_rupees_f64(value)?;
    if money.is_negative() {
        None
    } else {
        Some(money)
    }
}

/// Parse the stored JSON form of the expense collection
pub fn parse_expenses_json(text: &str) -> BudgetResult<Vec<Expense>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_text() {
        assert_eq!(parse_budget_text("10000"), Some(Money::from_rupees(10000)));
        assert_eq!(parse_budget_text(" 2500.5\n"), Some(Money::from_paise(250050)));
        assert_eq!(parse_budget_text("0"), Some(Money::zero()));
        assert_eq!(parse_budget_text("NaN"), None);
        assert_eq!(parse_budget_text("inf"), None);
        assert_eq!(parse_budget_text("ten"), None);
        assert_eq!(parse_budget_text("-5"), None);
        assert_eq!(parse_budget_text(""), None);
        assert_eq!(parse_budget_text("1e300"), None);
    }

    #[test]
    fn test_parse_expenses_json() {
        let json = r#"[{"id":"1","category":"Food","amount":3000,"description":"","date":"2024-01-01"}]"#;
        let expenses = parse_expenses_json(json).unwrap();
        assert_eq!(expenses.len(), 1);

        assert!(parse_expenses_json("{\"not\": \"a list\"}").is_err());
        assert!(parse_expenses_json("[{\"id\": 1}]").is_err());
    }
}
