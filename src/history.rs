use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::{category::Category, error::HistoryError, models::Group, screen::Screen};

/// Payload stored with each browser history entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum HistoryEntry {
    Dashboard,
    Group { group: Group },
    Category { group: Group, category: Category },
}

impl HistoryEntry {
    pub fn encode(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Entries without a payload (the page's initial entry) mean the dashboard.
    pub fn decode(raw: Option<&str>) -> Result<Self, HistoryError> {
        match raw {
            None => Ok(Self::Dashboard),
            Some(raw) if raw.is_empty() => Ok(Self::Dashboard),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }
}

pub trait HistoryBackend {
    fn current(&self) -> Option<HistoryEntry>;
    fn push(&self, entry: &HistoryEntry) -> Result<(), HistoryError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn history() -> Option<web_sys::History> {
        web_sys::window().and_then(|window| window.history().ok())
    }
}

impl HistoryBackend for BrowserHistory {
    fn current(&self) -> Option<HistoryEntry> {
        let state = Self::history()?.state().ok()?;
        let raw = state.as_string()?;
        HistoryEntry::decode(Some(&raw)).ok()
    }

    fn push(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let history = Self::history().ok_or_else(|| HistoryError::Js("no window".to_string()))?;
        let payload = entry.encode()?;
        history
            .push_state(&JsValue::from_str(&payload), "")
            .map_err(|err| HistoryError::Js(format!("{err:?}")))
    }
}

/// Keeps browser history in step with navigation.
#[derive(Debug, Clone)]
pub struct HistoryBridge<B> {
    backend: B,
}

impl<B: HistoryBackend> HistoryBridge<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Push an entry for `screen` unless it was reached by replaying history
    /// or is already the current entry. Returns whether an entry was pushed.
    pub fn record(&self, screen: &Screen, restored: bool) -> bool {
        if restored {
            return false;
        }
        let Some(entry) = screen.history_entry() else {
            return false;
        };
        if self.backend.current().as_ref() == Some(&entry) {
            return false;
        }
        match self.backend.push(&entry) {
            Ok(()) => {
                log::debug!("history push {entry:?}");
                true
            }
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Session, User},
        state::{AppState, Msg},
        test_support::MemoryHistory,
    };

    fn group() -> Group {
        Group {
            id: 7,
            name: "Flat".to_string(),
            join_code: "GRP7".to_string(),
        }
    }

    fn signed_in() -> AppState {
        AppState::with_session(Some(Session {
            user: User {
                id: 1,
                username: "alice".to_string(),
            },
            token: "t1".to_string(),
        }))
    }

    /// What the root component does after every state change.
    fn settle(bridge: &HistoryBridge<MemoryHistory>, state: &AppState) {
        bridge.record(&Screen::select(state), state.restored);
    }

    #[test]
    fn entries_are_tagged_json() {
        let entry = HistoryEntry::Category {
            group: group(),
            category: Category::Fuel,
        };
        let raw = entry.encode().unwrap();
        assert!(raw.contains(r#""view":"category""#));
        assert_eq!(HistoryEntry::decode(Some(&raw)).unwrap(), entry);
    }

    #[test]
    fn missing_payload_is_the_dashboard() {
        assert_eq!(HistoryEntry::decode(None).unwrap(), HistoryEntry::Dashboard);
        assert_eq!(HistoryEntry::decode(Some("")).unwrap(), HistoryEntry::Dashboard);
        assert!(HistoryEntry::decode(Some("{\"view\":\"wallet\"}")).is_err());
    }

    #[test]
    fn dashboard_is_pushed_once() {
        let history = MemoryHistory::default();
        let bridge = HistoryBridge::new(history.clone());

        assert!(bridge.record(&Screen::Dashboard, false));
        assert!(!bridge.record(&Screen::Dashboard, false));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn auth_screens_leave_history_alone() {
        let history = MemoryHistory::default();
        let bridge = HistoryBridge::new(history.clone());
        assert!(!bridge.record(&Screen::Login, false));
        assert!(!bridge.record(&Screen::Register, false));
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn back_walks_category_then_group_then_dashboard() {
        let history = MemoryHistory::default();
        let bridge = HistoryBridge::new(history.clone());
        let mut state = signed_in();
        settle(&bridge, &state);

        state.apply(Msg::OpenGroup(group()));
        settle(&bridge, &state);
        state.apply(Msg::SelectCategory(Category::Fuel));
        settle(&bridge, &state);
        assert_eq!(history.len(), 3);

        let entry = history.back().unwrap();
        state.apply(Msg::Restore(entry));
        settle(&bridge, &state);
        assert_eq!(Screen::select(&state), Screen::GroupDetail(group()));

        let entry = history.back().unwrap();
        state.apply(Msg::Restore(entry));
        settle(&bridge, &state);
        assert_eq!(Screen::select(&state), Screen::Dashboard);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn parametric_changes_do_not_push() {
        let history = MemoryHistory::default();
        let bridge = HistoryBridge::new(history.clone());
        let mut state = signed_in();
        state.apply(Msg::OpenGroup(group()));
        settle(&bridge, &state);

        state.apply(Msg::SetSort(crate::state::SortOrder::OldestFirst));
        settle(&bridge, &state);
        state.apply(Msg::SetFilterDate(chrono::NaiveDate::from_ymd_opt(2024, 5, 1)));
        settle(&bridge, &state);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn leaving_a_group_pushes_the_dashboard() {
        let history = MemoryHistory::default();
        let bridge = HistoryBridge::new(history.clone());
        let mut state = signed_in();
        settle(&bridge, &state);
        state.apply(Msg::OpenGroup(group()));
        settle(&bridge, &state);

        state.apply(Msg::CloseGroup);
        settle(&bridge, &state);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), Some(HistoryEntry::Dashboard));
    }
}
