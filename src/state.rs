use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::{
    category::Category,
    history::HistoryEntry,
    models::{Expense, Group, Session},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::NewestFirst => Self::OldestFirst,
            Self::OldestFirst => Self::NewestFirst,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest first",
            Self::OldestFirst => "Oldest first",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Which screen and filters are active. A category or date filter only
/// exists while a group is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    current_group: Option<Group>,
    current_category: Option<Category>,
    pub sort_order: SortOrder,
    filter_date: Option<NaiveDate>,
}

impl ViewState {
    pub fn current_group(&self) -> Option<&Group> {
        self.current_group.as_ref()
    }

    pub fn current_category(&self) -> Option<Category> {
        self.current_category
    }

    pub fn filter_date(&self) -> Option<NaiveDate> {
        self.filter_date
    }

    pub fn open_group(&mut self, group: Group) {
        self.current_group = Some(group);
        self.current_category = None;
        self.filter_date = None;
    }

    pub fn close_group(&mut self) {
        self.current_group = None;
        self.current_category = None;
        self.filter_date = None;
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        if self.current_group.is_some() {
            self.current_category = category;
        }
    }

    pub fn set_filter_date(&mut self, date: Option<NaiveDate>) {
        if self.current_group.is_some() {
            self.filter_date = date;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    pub auth_mode: AuthMode,
    pub groups: Vec<Group>,
    pub groups_fetched: bool,
    pub expenses: Vec<Expense>,
    pub view: ViewState,
    /// The last navigation replayed a browser history entry and must not
    /// record a new one.
    pub restored: bool,
    /// Set when a screen cannot be produced; rendered as the fallback screen.
    pub fault: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    ShowLogin,
    ShowRegister,
    SessionStarted(Session),
    SessionEnded,
    GroupsLoaded(Vec<Group>),
    ExpensesLoaded { group_id: i64, expenses: Vec<Expense> },
    OpenGroup(Group),
    CloseGroup,
    SelectCategory(Category),
    CloseCategory,
    SetSort(SortOrder),
    SetFilterDate(Option<NaiveDate>),
    Restore(HistoryEntry),
    Fault(String),
}

impl AppState {
    pub fn with_session(session: Option<Session>) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::ShowLogin => self.auth_mode = AuthMode::Login,
            Msg::ShowRegister => self.auth_mode = AuthMode::Register,
            Msg::SessionStarted(session) => {
                *self = Self::with_session(Some(session));
            }
            Msg::SessionEnded => {
                *self = Self::default();
            }
            Msg::GroupsLoaded(groups) => {
                self.groups = groups;
                self.groups_fetched = true;
            }
            Msg::ExpensesLoaded { group_id, expenses } => {
                // a response for a group that is no longer open is dropped
                if self.view.current_group().map(|group| group.id) == Some(group_id) {
                    self.expenses = expenses;
                }
            }
            Msg::OpenGroup(group) => {
                self.enter_group(group);
                self.restored = false;
            }
            Msg::CloseGroup => {
                self.view.close_group();
                self.expenses.clear();
                self.restored = false;
            }
            Msg::SelectCategory(category) => {
                self.view.select_category(Some(category));
                self.restored = false;
            }
            Msg::CloseCategory => {
                self.view.select_category(None);
                self.restored = false;
            }
            Msg::SetSort(order) => self.view.sort_order = order,
            Msg::SetFilterDate(date) => self.view.set_filter_date(date),
            Msg::Restore(entry) => {
                match entry {
                    HistoryEntry::Dashboard => {
                        self.view.close_group();
                        self.expenses.clear();
                    }
                    HistoryEntry::Group { group } => {
                        self.enter_group(group);
                    }
                    HistoryEntry::Category { group, category } => {
                        self.enter_group(group);
                        self.view.select_category(Some(category));
                    }
                }
                self.restored = true;
            }
            Msg::Fault(message) => self.fault = Some(message),
        }
    }

    fn enter_group(&mut self, group: Group) {
        if self.view.current_group().map(|current| current.id) != Some(group.id) {
            self.expenses.clear();
        }
        self.view.open_group(group);
    }
}

impl Reducible for AppState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
