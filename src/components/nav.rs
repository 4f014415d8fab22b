use yew::prelude::*;

use super::icons::{icon_arrow_left, icon_log_out};

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub username: Option<AttrValue>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    html! {
        <nav class="bg-indigo-600 p-4 text-white shadow-lg sticky top-0 z-10">
            <div class="container mx-auto flex justify-between items-center gap-4">
                <div class="flex items-center gap-4">
                    if let Some(on_back) = props.on_back.clone() {
                        <button class="flex items-center gap-1 text-indigo-200 hover:text-white" onclick={Callback::from(move |_| on_back.emit(()))}>
                            { icon_arrow_left() }
                            <span>{"Back"}</span>
                        </button>
                    }
                    <h1 class="text-xl font-bold">{ props.title.clone() }</h1>
                </div>
                <div class="flex items-center gap-4">
                    if let Some(username) = props.username.clone() {
                        <span>{ username }</span>
                    }
                    if let Some(on_logout) = props.on_logout.clone() {
                        <button class="flex items-center gap-2 bg-indigo-800 px-3 py-1 rounded hover:bg-indigo-900 text-sm" onclick={Callback::from(move |_| on_logout.emit(()))}>
                            { icon_log_out() }
                            <span>{"Logout"}</span>
                        </button>
                    }
                </div>
            </div>
        </nav>
    }
}
