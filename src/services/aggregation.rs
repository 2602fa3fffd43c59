//! Aggregation over the budget state
//!
//! Pure functions: nothing here is cached or stored, every figure is derived
//! from the state passed in.

use crate::models::{BudgetState, Category, Expense, Money};

/// Total spent in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

impl CategoryTotal {
    /// Theme colour token for this slice of the chart
    pub fn color_token(&self) -> &'static str {
        self.category.color_token()
    }
}

/// Sum of all expense amounts
pub fn total_spent(state: &BudgetState) -> Money {
    state.expenses.iter().map(|e| e.amount).sum()
}

/// Budget left over; negative when over budget
pub fn remaining(state: &BudgetState) -> Money {
    state.total_budget - total_spent(state)
}

/// Percentage of the budget spent, or 0 when there is no budget
pub fn percent_used(state: &BudgetState) -> f64 {
    if !state.total_budget.is_positive() {
        return 0.0;
    }
    total_spent(state).paise() as f64 / state.total_budget.paise() as f64 * 100.0
}

/// Per-category totals in category order, omitting categories with no spend
pub fn category_totals(state: &BudgetState) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            total: state
                .expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum(),
        })
        .filter(|ct| ct.total.is_positive())
        .collect()
}

/// Share of total spending, or `None` when nothing has been spent
pub fn category_share(total: Money, spent: Money) -> Option<f64> {
    if !spent.is_positive() {
        return None;
    }
    Some(total.paise() as f64 / spent.paise() as f64 * 100.0)
}

/// Expenses newest first; expenses on the same date keep insertion order
pub fn sorted_by_date_descending(state: &BudgetState) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = state.expenses.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.date.instant().cmp(&a.date.instant()));
    sorted
}

/// The last `n` expenses in insertion order (not date order)
pub fn recent_expenses(state: &BudgetState, n: usize) -> &[Expense] {
    let start = state.expenses.len().saturating_sub(n);
    &state.expenses[start..]
}

/// Snapshot of the headline figures shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub percent_used: f64,
    pub expense_count: usize,
}

impl BudgetSummary {
    pub fn from_state(state: &BudgetState) -> Self {
        let spent = total_spent(state);
        Self {
            total_budget: state.total_budget,
            total_spent: spent,
            remaining: state.total_budget - spent,
            percent_used: percent_used(state),
            expense_count: state.expenses.len(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDate, ExpenseId};
    use proptest::prelude::*;

    fn expense(id: &str, category: Category, rupees: i64, date: &str) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            category,
            amount: Money::from_rupees(rupees),
            description: String::new(),
            date: ExpenseDate::parse(date).unwrap(),
        }
    }

    fn scenario() -> BudgetState {
        BudgetState::new(
            Money::from_rupees(10000),
            vec![
                expense("a", Category::Food, 3000, "2024-03-01"),
                expense("b", Category::Transportation, 1500, "2024-03-02"),
            ],
        )
    }

    #[test]
    fn test_scenario_figures() {
        let state = scenario();
        assert_eq!(total_spent(&state), Money::from_rupees(4500));
        assert_eq!(remaining(&state), Money::from_rupees(5500));
        assert_eq!(percent_used(&state), 45.0);
        assert_eq!(
            category_totals(&state),
            vec![
                CategoryTotal {
                    category: Category::Food,
                    total: Money::from_rupees(3000)
                },
                CategoryTotal {
                    category: Category::Transportation,
                    total: Money::from_rupees(1500)
                },
            ]
        );
    }

    #[test]
    fn test_over_budget_remaining_is_negative() {
        let mut state = scenario();
        state.total_budget = Money::from_rupees(4000);
        assert_eq!(remaining(&state), Money::from_rupees(-500));
        assert!(BudgetSummary::from_state(&state).is_over_budget());
    }

    #[test]
    fn test_percent_used_zero_budget() {
        let mut state = scenario();
        state.total_budget = Money::zero();
        assert_eq!(percent_used(&state), 0.0);
    }

    #[test]
    fn test_category_totals_follow_enumeration_order() {
        let state = BudgetState::new(
            Money::zero(),
            vec![
                expense("1", Category::Other, 10, "2024-01-01"),
                expense("2", Category::Healthcare, 500, "2024-01-01"),
                expense("3", Category::Food, 5, "2024-01-01"),
                expense("4", Category::Healthcare, 20, "2024-01-01"),
                expense("5", Category::Shopping, 0, "2024-01-01"),
            ],
        );

        let totals = category_totals(&state);
        let order: Vec<_> = totals.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![Category::Food, Category::Healthcare, Category::Other]
        );
        assert_eq!(totals[1].total, Money::from_rupees(520));
        assert_eq!(totals[1].color_token(), "expense-healthcare");
    }

    #[test]
    fn test_category_share_guard() {
        assert_eq!(category_share(Money::zero(), Money::zero()), None);
        assert_eq!(
            category_share(Money::from_rupees(25), Money::from_rupees(100)),
            Some(25.0)
        );
    }

    #[test]
    fn test_sorted_by_date_descending_is_stable() {
        let state = BudgetState::new(
            Money::zero(),
            vec![
                expense("first", Category::Food, 1, "2024-03-02"),
                expense("older", Category::Food, 1, "2024-03-01"),
                expense("second", Category::Food, 1, "2024-03-02"),
                expense("newest", Category::Food, 1, "2024-03-05"),
                expense("third", Category::Food, 1, "2024-03-02"),
            ],
        );

        let ids: Vec<_> = sorted_by_date_descending(&state)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["newest", "first", "second", "third", "older"]);
    }

    #[test]
    fn test_recent_expenses_uses_insertion_order() {
        let state = BudgetState::new(
            Money::zero(),
            vec![
                expense("1", Category::Food, 1, "2024-03-09"),
                expense("2", Category::Food, 1, "2024-01-01"),
                expense("3", Category::Food, 1, "2024-05-01"),
            ],
        );

        let ids: Vec<_> = recent_expenses(&state, 2)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(recent_expenses(&state, 10).len(), 3);
        assert!(recent_expenses(&state, 0).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = BudgetSummary::from_state(&scenario());
        assert_eq!(summary.total_spent, Money::from_rupees(4500));
        assert_eq!(summary.remaining, Money::from_rupees(5500));
        assert_eq!(summary.expense_count, 2);
        assert!(!summary.is_over_budget());
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_expenses() -> impl Strategy<Value = Vec<(Category, i64, u32)>> {
        prop::collection::vec((arb_category(), 0i64..10_000_000, 1u32..28), 0..40)
    }

    fn build(items: &[(Category, i64, u32)], budget: i64) -> BudgetState {
        let expenses = items
            .iter()
            .enumerate()
            .map(|(i, (category, paise, day))| Expense {
                id: ExpenseId::from(i.to_string().as_str()),
                category: *category,
                amount: Money::from_paise(*paise),
                description: String::new(),
                date: ExpenseDate::parse(&format!("2024-02-{:02}", day)).unwrap(),
            })
            .collect();
        BudgetState::new(Money::from_paise(budget), expenses)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Total spent equals the plain sum no matter the insertion order
        #[test]
        fn prop_total_spent_is_order_independent(items in arb_expenses()) {
            let expected: i64 = items.iter().map(|(_, p, _)| *p).sum();
            let forward = build(&items, 0);
            let mut reversed_items = items.clone();
            reversed_items.reverse();
            let reversed = build(&reversed_items, 0);

            prop_assert_eq!(total_spent(&forward).paise(), expected);
            prop_assert_eq!(total_spent(&reversed).paise(), expected);
        }

        /// remaining == budget - spent, including negative results
        #[test]
        fn prop_remaining_identity(items in arb_expenses(), budget in 0i64..50_000_000) {
            let state = build(&items, budget);
            prop_assert_eq!(remaining(&state), state.total_budget - total_spent(&state));
        }

        /// Category totals add up to total spent and never include zero rows
        #[test]
        fn prop_category_totals_sum(items in arb_expenses()) {
            let state = build(&items, 0);
            let totals = category_totals(&state);
            let sum: Money = totals.iter().map(|t| t.total).sum();
            prop_assert_eq!(sum, total_spent(&state));
            prop_assert!(totals.iter().all(|t| t.total.is_positive()));
            prop_assert!(totals.windows(2).all(|w| w[0].category < w[1].category));
        }

        /// Equal dates keep insertion order after sorting
        #[test]
        fn prop_date_sort_is_stable(items in arb_expenses()) {
            let state = build(&items, 0);
            let sorted = sorted_by_date_descending(&state);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].date.instant() >= pair[1].date.instant());
                if pair[0].date.instant() == pair[1].date.instant() {
                    let a: usize = pair[0].id.as_str().parse().unwrap();
                    let b: usize = pair[1].id.as_str().parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
