use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(rename = "code")]
    pub join_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    #[serde(rename = "paid_by")]
    pub paid_by_name: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub detail: Option<String>,
}

/// `{message}` on success, `{detail}` on an application-level failure.
#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewGroup {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NewExpense {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub group_id: i64,
    pub paid_by_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ExpenseUpdate {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw values from the add/edit expense form.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: Category,
    pub description: String,
}

impl ExpenseDraft {
    pub fn parsed_amount(&self) -> Option<Decimal> {
        Decimal::from_str_exact(self.amount.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_uses_backend_field_names() {
        let raw = r#"{"id":3,"amount":12.5,"category":"Fuel","description":"gas","date":"2024-05-01","paid_by":"alice"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.paid_by_name, "alice");
        assert_eq!(expense.amount, Decimal::new(125, 1));
        assert_eq!(expense.category, Category::Fuel);
    }

    #[test]
    fn group_code_is_the_join_code() {
        let group: Group = serde_json::from_str(r#"{"id":7,"name":"Flat","code":"GRP1234"}"#).unwrap();
        assert_eq!(group.join_code, "GRP1234");
    }

    #[test]
    fn update_omits_untouched_fields() {
        let update = ExpenseUpdate {
            amount: Some(Decimal::from(4)),
            category: None,
            description: None,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"amount":4.0}"#);
    }

    #[test]
    fn draft_amount_parsing() {
        let mut draft = ExpenseDraft {
            amount: " 12.50 ".to_string(),
            category: Category::Fuel,
            description: "gas".to_string(),
        };
        assert_eq!(draft.parsed_amount(), Some(Decimal::new(1250, 2)));

        draft.amount = "twelve".to_string();
        assert_eq!(draft.parsed_amount(), None);

        draft.amount = "inf".to_string();
        assert_eq!(draft.parsed_amount(), None);
    }
}
