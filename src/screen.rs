use crate::{
    category::Category,
    history::HistoryEntry,
    models::Group,
    state::{AppState, AuthMode},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    GroupDetail(Group),
    CategoryDetail(Group, Category),
    Failed(String),
}

impl Screen {
    /// The screen for a state snapshot.
    pub fn select(state: &AppState) -> Self {
        if let Some(message) = &state.fault {
            return Self::Failed(message.clone());
        }
        if state.session.is_none() {
            return match state.auth_mode {
                AuthMode::Login => Self::Login,
                AuthMode::Register => Self::Register,
            };
        }
        match (state.view.current_group(), state.view.current_category()) {
            (Some(group), Some(category)) => Self::CategoryDetail(group.clone(), category),
            (Some(group), None) => Self::GroupDetail(group.clone()),
            (None, Some(category)) => {
                Self::Failed(format!("category {category} selected without a group"))
            }
            (None, None) => Self::Dashboard,
        }
    }

    /// Navigational screens have a history entry; auth and fault screens do not.
    pub fn history_entry(&self) -> Option<HistoryEntry> {
        match self {
            Self::Dashboard => Some(HistoryEntry::Dashboard),
            Self::GroupDetail(group) => Some(HistoryEntry::Group {
                group: group.clone(),
            }),
            Self::CategoryDetail(group, category) => Some(HistoryEntry::Category {
                group: group.clone(),
                category: *category,
            }),
            Self::Login | Self::Register | Self::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Session, User},
        state::Msg,
    };

    fn signed_in() -> AppState {
        AppState::with_session(Some(Session {
            user: User {
                id: 1,
                username: "alice".to_string(),
            },
            token: "t1".to_string(),
        }))
    }

    fn group() -> Group {
        Group {
            id: 7,
            name: "Flat".to_string(),
            join_code: "GRP7".to_string(),
        }
    }

    #[test]
    fn no_session_picks_an_auth_screen() {
        let mut state = AppState::default();
        assert_eq!(Screen::select(&state), Screen::Login);
        state.apply(Msg::ShowRegister);
        assert_eq!(Screen::select(&state), Screen::Register);
        state.apply(Msg::ShowLogin);
        assert_eq!(Screen::select(&state), Screen::Login);
    }

    #[test]
    fn session_walks_dashboard_group_category() {
        let mut state = signed_in();
        assert_eq!(Screen::select(&state), Screen::Dashboard);

        state.apply(Msg::OpenGroup(group()));
        assert_eq!(Screen::select(&state), Screen::GroupDetail(group()));

        state.apply(Msg::SelectCategory(Category::Fuel));
        assert_eq!(
            Screen::select(&state),
            Screen::CategoryDetail(group(), Category::Fuel)
        );
    }

    #[test]
    fn fault_wins_over_everything() {
        let mut state = signed_in();
        state.apply(Msg::Fault("boom".to_string()));
        assert_eq!(Screen::select(&state), Screen::Failed("boom".to_string()));
    }

    #[test]
    fn only_navigational_screens_have_entries() {
        assert_eq!(Screen::Login.history_entry(), None);
        assert_eq!(Screen::Register.history_entry(), None);
        assert_eq!(
            Screen::Dashboard.history_entry(),
            Some(HistoryEntry::Dashboard)
        );
        assert_eq!(
            Screen::CategoryDetail(group(), Category::Dining).history_entry(),
            Some(HistoryEntry::Category {
                group: group(),
                category: Category::Dining
            })
        );
    }
}
