use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::{category::Category, models::Expense, state::SortOrder};

/// Expenses matching the category and calendar-day filters, ordered by date.
/// The sort is stable, so same-day expenses keep the order the backend sent.
pub fn visible_expenses(
    expenses: &[Expense],
    category: Option<Category>,
    date: Option<NaiveDate>,
    order: SortOrder,
) -> Vec<Expense> {
    let day = date.map(|date| date.format("%Y-%m-%d").to_string());

    let mut visible: Vec<Expense> = expenses
        .iter()
        .filter(|expense| category.map_or(true, |category| expense.category == category))
        .filter(|expense| {
            day.as_deref()
                .map_or(true, |day| expense.date.starts_with(day))
        })
        .cloned()
        .collect();

    match order {
        SortOrder::NewestFirst => visible.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::OldestFirst => visible.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    visible
}

pub fn total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

pub fn category_counts(expenses: &[Expense]) -> HashMap<Category, usize> {
    let mut counts = HashMap::new();
    for expense in expenses {
        *counts.entry(expense.category).or_insert(0) += 1;
    }
    counts
}

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let cents = (rounded.abs() * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
    format!(
        "{}₹{}.{:02}",
        sign,
        format_with_commas(cents / 100),
        cents % 100
    )
}
