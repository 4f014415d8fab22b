mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    error::{ApiError, Result},
    models::{
        Credentials, Expense, ExpenseUpdate, Group, LoginResponse, MessageResponse, NewExpense,
        NewGroup,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One round trip to the backend. Implementations only move bytes; status
/// handling belongs to [`ApiClient`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<String>,
    ) -> Result<R> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
            token,
        };
        let res = self.transport.send(request).await?;

        if res.is_success() {
            return Ok(serde_json::from_str(&res.body)?);
        }

        let message = match serde_json::from_str::<ErrorBody>(&res.body) {
            Ok(err) => err.detail,
            Err(_) => Some(res.status_text.clone()).filter(|text| !text.is_empty()),
        }
        .unwrap_or_else(|| "Request failed".to_string());

        if res.status == 401 {
            return Err(ApiError::Unauthorized(message));
        }
        Err(ApiError::Request {
            status: res.status,
            message,
        })
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.call(Method::Post, "/login", Some(to_body(credentials)?), None)
            .await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<MessageResponse> {
        self.call(Method::Post, "/register", Some(to_body(credentials)?), None)
            .await
    }

    pub async fn groups(&self, user_id: i64, token: Option<String>) -> Result<Vec<Group>> {
        self.call(Method::Get, &format!("/groups/{user_id}"), None, token)
            .await
    }

    pub async fn create_group(
        &self,
        user_id: i64,
        group: &NewGroup,
        token: Option<String>,
    ) -> Result<Group> {
        let path = format!("/groups?user_id={user_id}");
        self.call(Method::Post, &path, Some(to_body(group)?), token)
            .await
    }

    pub async fn join_group(
        &self,
        user_id: i64,
        code: &str,
        token: Option<String>,
    ) -> Result<MessageResponse> {
        let path = format!(
            "/groups/join?code={}&user_id={user_id}",
            urlencoding::encode(code.trim())
        );
        self.call(Method::Post, &path, None, token).await
    }

    pub async fn expenses(&self, group_id: i64, token: Option<String>) -> Result<Vec<Expense>> {
        self.call(Method::Get, &format!("/group/{group_id}/expenses"), None, token)
            .await
    }

    /// The backend answers with either the created row or a bare message,
    /// neither of which the client keeps.
    pub async fn add_expense(
        &self,
        expense: &NewExpense,
        token: Option<String>,
    ) -> Result<serde_json::Value> {
        self.call(Method::Post, "/expenses", Some(to_body(expense)?), token)
            .await
    }

    pub async fn update_expense(
        &self,
        expense_id: i64,
        update: &ExpenseUpdate,
        token: Option<String>,
    ) -> Result<MessageResponse> {
        let path = format!("/expenses/{expense_id}");
        self.call(Method::Put, &path, Some(to_body(update)?), token)
            .await
    }

    pub async fn delete_expense(
        &self,
        expense_id: i64,
        token: Option<String>,
    ) -> Result<MessageResponse> {
        self.call(Method::Delete, &format!("/expenses/{expense_id}"), None, token)
            .await
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn success_body_is_decoded() {
        let transport = MockTransport::default();
        transport.respond(Method::Get, "/groups/1", 200, r#"[{"id":7,"name":"Flat","code":"GRP1"}]"#);
        let client = ApiClient::new(transport.clone());

        let groups = block_on(client.groups(1, Some("t1".to_string()))).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Flat");

        let sent = transport.requests();
        assert_eq!(sent[0].token.as_deref(), Some("t1"));
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn detail_is_lifted_from_error_body() {
        let transport = MockTransport::default();
        transport.respond(Method::Post, "/login", 400, r#"{"detail":"Invalid credentials"}"#);
        let client = ApiClient::new(transport);

        let credentials = Credentials {
            username: "alice".to_string(),
            password: "nope".to_string(),
        };
        let err = block_on(client.login(&credentials)).unwrap_err();
        match err {
            ApiError::Request { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_text_is_the_fallback_message() {
        let transport = MockTransport::default();
        transport.respond_with(
            Method::Get,
            "/group/7/expenses",
            ApiResponse {
                status: 502,
                status_text: "Bad Gateway".to_string(),
                body: "<html>upstream down</html>".to_string(),
            },
        );
        let client = ApiClient::new(transport);

        let err = block_on(client.expenses(7, None)).unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn unauthorized_is_its_own_error() {
        let transport = MockTransport::default();
        transport.respond(Method::Get, "/groups/1", 401, r#"{"detail":"Token expired"}"#);
        let client = ApiClient::new(transport);

        let err = block_on(client.groups(1, None)).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "System Error: Token expired");
    }

    #[test]
    fn join_code_is_query_encoded() {
        let transport = MockTransport::default();
        transport.respond(
            Method::Post,
            "/groups/join?code=GRP%201&user_id=4",
            200,
            r#"{"message":"Already a member"}"#,
        );
        let client = ApiClient::new(transport.clone());

        let res = block_on(client.join_group(4, " GRP 1 ", None)).unwrap();
        assert_eq!(res.message.as_deref(), Some("Already a member"));
        assert_eq!(transport.requests()[0].body, None);
    }

    #[test]
    fn new_expense_body_uses_numbers() {
        let transport = MockTransport::default();
        transport.respond(Method::Post, "/expenses", 200, r#"{"message":"Expense added"}"#);
        let client = ApiClient::new(transport.clone());

        let expense = NewExpense {
            amount: rust_decimal::Decimal::new(125, 1),
            category: crate::category::Category::Fuel,
            description: "gas".to_string(),
            group_id: 7,
            paid_by_id: 1,
        };
        block_on(client.add_expense(&expense, None)).unwrap();

        assert_eq!(
            transport.requests()[0].body,
            Some(json!({
                "amount": 12.5,
                "category": "Fuel",
                "description": "gas",
                "group_id": 7,
                "paid_by_id": 1
            }))
        );
    }
}
