use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    actions::{BrowserActions, Dispatch},
    category::Category,
    components::{AuthScreen, CategoryDetail, Dashboard, ErrorScreen, ExpenseHandlers, GroupDetail},
    config::AppConfig,
    history::{BrowserHistory, HistoryBridge},
    models::{ExpenseDraft, Group},
    screen::Screen,
    session::{BrowserStorage, SessionStore},
    state::{AppState, AuthMode, Msg, SortOrder},
};

/// Runs an action on the UI task without blocking the event handler.
fn run<F, Fut>(actions: &Rc<BrowserActions>, task: F)
where
    F: FnOnce(Rc<BrowserActions>) -> Fut,
    Fut: std::future::Future<Output = ()> + 'static,
{
    spawn_local(task(actions.clone()));
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || {
            AppState::with_session(SessionStore::new(BrowserStorage, &config).load())
        })
    };

    let actions: Rc<BrowserActions> = {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();
        use_memo(
            move |_| {
                let dispatch: Dispatch = Rc::new(move |msg| dispatcher.dispatch(msg));
                BrowserActions::browser(&config, dispatch)
            },
            (),
        )
    };

    // a restored session still needs its groups
    {
        let actions = actions.clone();
        use_effect_with_deps(
            move |_| {
                run(&actions, |actions| async move { actions.fetch_groups().await });
                || ()
            },
            (),
        );
    }

    // browser back/forward
    {
        let actions = actions.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
                    move |event: web_sys::PopStateEvent| {
                        let raw = event.state().as_string();
                        run(&actions, |actions| async move { actions.replay(raw).await });
                    },
                );
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "popstate",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            (),
        );
    }

    let screen = Screen::select(&state);

    {
        let restored = state.restored;
        use_effect_with_deps(
            move |screen: &Screen| {
                HistoryBridge::new(BrowserHistory).record(screen, restored);
                || ()
            },
            screen.clone(),
        );
    }

    let on_logout = {
        let actions = actions.clone();
        Callback::from(move |_: ()| actions.logout())
    };

    match screen {
        Screen::Failed(message) => html! {
            <ErrorScreen message={message} on_reset={on_logout} />
        },
        Screen::Login => auth_screen(&state, &actions, AuthMode::Login),
        Screen::Register => auth_screen(&state, &actions, AuthMode::Register),
        Screen::Dashboard => {
            let username = state
                .session
                .as_ref()
                .map(|session| session.user.username.clone())
                .unwrap_or_default();
            let on_open_group = {
                let actions = actions.clone();
                Callback::from(move |group: Group| {
                    run(&actions, |actions| async move { actions.open_group(group).await });
                })
            };
            let on_create_group = {
                let actions = actions.clone();
                Callback::from(move |name: String| {
                    run(&actions, |actions| async move { actions.create_group(&name).await });
                })
            };
            let on_join_group = {
                let actions = actions.clone();
                Callback::from(move |code: String| {
                    run(&actions, |actions| async move { actions.join_group(&code).await });
                })
            };
            html! {
                <Dashboard
                    username={username}
                    groups={state.groups.clone()}
                    groups_fetched={state.groups_fetched}
                    on_open_group={on_open_group}
                    on_create_group={on_create_group}
                    on_join_group={on_join_group}
                    on_logout={on_logout} />
            }
        }
        Screen::GroupDetail(group) => {
            let handlers = expense_handlers(&state, &actions, group.id, Msg::CloseGroup);
            let on_select_category = {
                let state = state.clone();
                Callback::from(move |category: Category| state.dispatch(Msg::SelectCategory(category)))
            };
            html! {
                <GroupDetail
                    group={group}
                    expenses={state.expenses.clone()}
                    sort_order={state.view.sort_order}
                    filter_date={state.view.filter_date()}
                    on_select_category={on_select_category}
                    handlers={handlers} />
            }
        }
        Screen::CategoryDetail(group, category) => {
            let handlers = expense_handlers(&state, &actions, group.id, Msg::CloseCategory);
            html! {
                <CategoryDetail
                    group={group}
                    category={category}
                    expenses={state.expenses.clone()}
                    sort_order={state.view.sort_order}
                    filter_date={state.view.filter_date()}
                    handlers={handlers} />
            }
        }
    }
}

fn auth_screen(
    state: &UseReducerHandle<AppState>,
    actions: &Rc<BrowserActions>,
    mode: AuthMode,
) -> Html {
    let on_submit = {
        let actions = actions.clone();
        Callback::from(move |(username, password): (String, String)| {
            run(&actions, |actions| async move {
                match mode {
                    AuthMode::Login => actions.login(&username, &password).await,
                    AuthMode::Register => actions.register(&username, &password).await,
                }
            });
        })
    };
    let on_switch = {
        let state = state.clone();
        Callback::from(move |mode: AuthMode| {
            state.dispatch(match mode {
                AuthMode::Login => Msg::ShowLogin,
                AuthMode::Register => Msg::ShowRegister,
            })
        })
    };
    html! { <AuthScreen mode={mode} on_submit={on_submit} on_switch={on_switch} /> }
}

fn expense_handlers(
    state: &UseReducerHandle<AppState>,
    actions: &Rc<BrowserActions>,
    group_id: i64,
    back: Msg,
) -> ExpenseHandlers {
    let on_back = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(back.clone()))
    };
    let on_sort = {
        let state = state.clone();
        Callback::from(move |order: SortOrder| state.dispatch(Msg::SetSort(order)))
    };
    let on_filter_date = {
        let state = state.clone();
        Callback::from(move |date: Option<NaiveDate>| state.dispatch(Msg::SetFilterDate(date)))
    };
    let on_add = {
        let actions = actions.clone();
        Callback::from(move |draft: ExpenseDraft| {
            run(&actions, |actions| async move {
                actions.add_expense(group_id, &draft).await
            });
        })
    };
    let on_update = {
        let actions = actions.clone();
        Callback::from(move |(expense_id, draft): (i64, ExpenseDraft)| {
            run(&actions, |actions| async move {
                actions.update_expense(group_id, expense_id, &draft).await
            });
        })
    };
    let on_delete = {
        let actions = actions.clone();
        Callback::from(move |expense_id: i64| {
            run(&actions, |actions| async move {
                actions.delete_expense(group_id, expense_id).await
            });
        })
    };

    ExpenseHandlers {
        on_back,
        on_sort,
        on_filter_date,
        on_add,
        on_update,
        on_delete,
    }
}
