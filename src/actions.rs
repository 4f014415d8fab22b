use std::{cell::RefCell, future::Future, rc::Rc};

use rust_decimal::Decimal;

use crate::{
    api::{ApiClient, HttpTransport, Transport},
    config::AppConfig,
    error::Result,
    history::HistoryEntry,
    models::{
        Credentials, ExpenseDraft, ExpenseUpdate, Group, NewExpense, NewGroup, Session, User,
    },
    session::{BrowserStorage, KeyValueStore, SessionStore},
    state::Msg,
};

const JOINED_MESSAGE: &str = "Joined group successfully";

/// Blocking user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub type Dispatch = Rc<dyn Fn(Msg)>;

/// User-triggered operations. Each one talks to the backend, then feeds the
/// outcome to the store through `dispatch`.
///
/// The signed-in session is held here and mirrors `AppState::session`;
/// storage is only written for the next page load.
pub struct Actions<T, K, N> {
    client: ApiClient<T>,
    sessions: SessionStore<K>,
    session: RefCell<Option<Session>>,
    notifier: N,
    dispatch: Dispatch,
}

pub type BrowserActions = Actions<HttpTransport, BrowserStorage, BrowserNotifier>;

impl BrowserActions {
    pub fn browser(config: &AppConfig, dispatch: Dispatch) -> Self {
        Self::new(
            ApiClient::new(HttpTransport::new(&config.api_base_url)),
            SessionStore::new(BrowserStorage, config),
            BrowserNotifier,
            dispatch,
        )
    }
}

impl<T: Transport, K: KeyValueStore, N: Notifier> Actions<T, K, N> {
    pub fn new(
        client: ApiClient<T>,
        sessions: SessionStore<K>,
        notifier: N,
        dispatch: Dispatch,
    ) -> Self {
        let session = RefCell::new(sessions.load());
        Self {
            client,
            sessions,
            session,
            notifier,
            dispatch,
        }
    }

    fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|session| session.token.clone())
    }

    /// Every failed call ends here: a 401 signs the user out, and the
    /// message is always shown before the error goes back to the caller.
    async fn guarded<R>(&self, endpoint: &str, call: impl Future<Output = Result<R>>) -> Result<R> {
        call.await.map_err(|err| {
            match err.status() {
                Some(status) => log::error!("API error at {endpoint} ({status}): {err}"),
                None => log::error!("API error at {endpoint}: {err}"),
            }
            if err.is_unauthorized() {
                self.logout();
            }
            self.notifier.notify(&err.message());
            err
        })
    }

    pub async fn login(&self, username: &str, password: &str) {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let Ok(res) = self.guarded("/login", self.client.login(&credentials)).await else {
            return;
        };

        match (res.access_token, res.user_id, res.username) {
            (Some(token), Some(id), Some(username)) => {
                let session = Session {
                    user: User { id, username },
                    token,
                };
                self.sessions.save(&session);
                *self.session.borrow_mut() = Some(session.clone());
                log::info!("signed in as {}", session.user.username);
                (self.dispatch)(Msg::SessionStarted(session));
                self.fetch_groups().await;
            }
            _ => {
                let reason = res.detail.unwrap_or_else(|| "Login failed".to_string());
                self.notifier.notify(&reason);
            }
        }
    }

    pub async fn register(&self, username: &str, password: &str) {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self
            .guarded("/register", self.client.register(&credentials))
            .await
        {
            Ok(res) if res.message.is_some() => {
                self.notifier
                    .notify("Registration successful! Please login.");
                (self.dispatch)(Msg::ShowLogin);
            }
            Ok(_) => {}
            Err(err) => log::debug!("registration failed: {err}"),
        }
    }

    pub fn logout(&self) {
        self.session.borrow_mut().take();
        self.sessions.clear();
        log::info!("signed out");
        (self.dispatch)(Msg::SessionEnded);
    }

    pub async fn fetch_groups(&self) {
        let Some(session) = self.session() else {
            return;
        };
        let path = format!("/groups/{}", session.user.id);
        let groups = self
            .guarded(&path, self.client.groups(session.user.id, Some(session.token)))
            .await
            .unwrap_or_default();
        (self.dispatch)(Msg::GroupsLoaded(groups));
    }

    pub async fn create_group(&self, name: &str) {
        let Some(session) = self.session() else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let group = NewGroup {
            name: name.to_string(),
        };
        let created = self
            .guarded(
                "/groups",
                self.client
                    .create_group(session.user.id, &group, Some(session.token)),
            )
            .await;
        if let Ok(group) = created {
            log::info!("created group {} ({})", group.name, group.join_code);
        }
        self.fetch_groups().await;
    }

    pub async fn join_group(&self, code: &str) {
        let Some(session) = self.session() else {
            return;
        };
        if code.trim().is_empty() {
            return;
        }
        let Ok(res) = self
            .guarded(
                "/groups/join",
                self.client.join_group(session.user.id, code, Some(session.token)),
            )
            .await
        else {
            return;
        };

        if res.message.as_deref() == Some(JOINED_MESSAGE) {
            self.fetch_groups().await;
        } else {
            let reason = res
                .detail
                .or(res.message)
                .unwrap_or_else(|| "Could not join group".to_string());
            self.notifier.notify(&reason);
        }
    }

    pub async fn open_group(&self, group: Group) {
        let group_id = group.id;
        (self.dispatch)(Msg::OpenGroup(group));
        self.fetch_expenses(group_id).await;
    }

    /// Decodes a `popstate` payload and replays it. A payload that cannot be
    /// read sends the user to the fallback screen.
    pub async fn replay(&self, raw: Option<String>) {
        match HistoryEntry::decode(raw.as_deref()) {
            Ok(entry) => self.restore(entry).await,
            Err(err) => self.fail(err.to_string()),
        }
    }

    /// Replays a browser history entry. Group screens reload their expenses.
    pub async fn restore(&self, entry: HistoryEntry) {
        if self.session.borrow().is_none() {
            return;
        }
        log::debug!("history restore {entry:?}");
        let group_id = match &entry {
            HistoryEntry::Dashboard => None,
            HistoryEntry::Group { group } | HistoryEntry::Category { group, .. } => Some(group.id),
        };
        (self.dispatch)(Msg::Restore(entry));
        if let Some(group_id) = group_id {
            self.fetch_expenses(group_id).await;
        }
    }

    pub async fn fetch_expenses(&self, group_id: i64) {
        let Some(token) = self.token() else {
            return;
        };
        let path = format!("/group/{group_id}/expenses");
        if let Ok(expenses) = self
            .guarded(&path, self.client.expenses(group_id, Some(token)))
            .await
        {
            (self.dispatch)(Msg::ExpensesLoaded { group_id, expenses });
        }
    }

    pub async fn add_expense(&self, group_id: i64, draft: &ExpenseDraft) {
        let Some(session) = self.session() else {
            return;
        };
        let Some(amount) = self.valid_amount(draft) else {
            return;
        };
        let expense = NewExpense {
            amount,
            category: draft.category,
            description: draft.description.trim().to_string(),
            group_id,
            paid_by_id: session.user.id,
        };
        let _ = self
            .guarded("/expenses", self.client.add_expense(&expense, Some(session.token)))
            .await;
        self.fetch_expenses(group_id).await;
    }

    pub async fn update_expense(&self, group_id: i64, expense_id: i64, draft: &ExpenseDraft) {
        let Some(token) = self.token() else {
            return;
        };
        let Some(amount) = self.valid_amount(draft) else {
            return;
        };
        let update = ExpenseUpdate {
            amount: Some(amount),
            category: Some(draft.category),
            description: Some(draft.description.trim().to_string()),
        };
        let path = format!("/expenses/{expense_id}");
        let _ = self
            .guarded(
                &path,
                self.client
                    .update_expense(expense_id, &update, Some(token)),
            )
            .await;
        self.fetch_expenses(group_id).await;
    }

    pub async fn delete_expense(&self, group_id: i64, expense_id: i64) {
        let Some(token) = self.token() else {
            return;
        };
        let path = format!("/expenses/{expense_id}");
        let _ = self
            .guarded(
                &path,
                self.client.delete_expense(expense_id, Some(token)),
            )
            .await;
        self.fetch_expenses(group_id).await;
    }

    fn valid_amount(&self, draft: &ExpenseDraft) -> Option<Decimal> {
        let amount = draft.parsed_amount();
        if amount.is_none() {
            self.notifier.notify("Amount must be a number");
        }
        amount
    }

    /// Route a failure raised outside the API layer to the fallback screen.
    pub fn fail(&self, message: String) {
        log::error!("{message}");
        (self.dispatch)(Msg::Fault(message));
    }
}
