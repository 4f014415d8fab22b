use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use super::{icons::icon_plus, nav::TopBar};
use crate::models::Group;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub username: AttrValue,
    pub groups: Vec<Group>,
    pub groups_fetched: bool,
    pub on_open_group: Callback<Group>,
    pub on_create_group: Callback<String>,
    pub on_join_group: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let join_code = use_state(|| "".to_string());
    let new_group = use_state(|| "".to_string());
    let show_create = use_state(|| false);

    let on_join = {
        let join_code = join_code.clone();
        let on_join_group = props.on_join_group.clone();
        Callback::from(move |_| {
            let code = join_code.trim().to_string();
            if !code.is_empty() {
                on_join_group.emit(code);
                join_code.set("".to_string());
            }
        })
    };

    let on_toggle_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(!*show_create))
    };

    let on_create = {
        let new_group = new_group.clone();
        let show_create = show_create.clone();
        let on_create_group = props.on_create_group.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = new_group.trim().to_string();
            if name.is_empty() {
                return;
            }
            on_create_group.emit(name);
            new_group.set("".to_string());
            show_create.set(false);
        })
    };

    let group_cards = props
        .groups
        .iter()
        .map(|group| {
            let on_open_group = props.on_open_group.clone();
            let selected = group.clone();
            html! {
                <div key={group.id.to_string()} onclick={Callback::from(move |_| on_open_group.emit(selected.clone()))}
                    class="bg-white p-6 rounded-xl shadow-md hover:shadow-xl transition transform hover:-translate-y-1 border-l-4 border-indigo-500 cursor-pointer">
                    <h3 class="text-xl font-semibold mb-2">{ group.name.clone() }</h3>
                    <p class="text-gray-500 text-sm">
                        {"Code: "}
                        <span class="font-mono bg-gray-100 px-1 rounded">{ group.join_code.clone() }</span>
                    </p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="min-h-screen bg-gray-50 fade-in">
            <TopBar title="Expense Tracker" username={props.username.clone()} on_logout={props.on_logout.clone()} />
            <div class="container mx-auto p-6">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-gray-800">{"Your Groups"}</h2>
                    <div class="flex gap-2">
                        <input type="text" placeholder="Enter Code" class="p-2 border rounded text-sm w-32"
                            value={(*join_code).clone()}
                            oninput={{
                                let join_code = join_code.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    join_code.set(input.value());
                                })
                            }} />
                        <button onclick={on_join} class="bg-gray-200 text-gray-700 px-3 py-2 rounded text-sm hover:bg-gray-300">{"Join"}</button>
                        <button onclick={on_toggle_create} class="flex items-center gap-1 bg-pink-500 text-white px-4 py-2 rounded shadow-lg hover:bg-pink-600 transition text-sm">
                            { icon_plus() }
                            <span>{"New Group"}</span>
                        </button>
                    </div>
                </div>

                if *show_create {
                    <form class="flex gap-2 mb-6" onsubmit={on_create}>
                        <input type="text" placeholder="Group name" class="flex-1 p-2 border rounded text-sm"
                            value={(*new_group).clone()}
                            oninput={{
                                let new_group = new_group.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    new_group.set(input.value());
                                })
                            }} />
                        <button type="submit" class="bg-indigo-600 text-white px-4 py-2 rounded text-sm">{"Create"}</button>
                    </form>
                }

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { if !props.groups_fetched {
                        html! { <p class="text-gray-500 col-span-3 text-center">{"Loading groups..."}</p> }
                    } else if props.groups.is_empty() {
                        html! { <p class="text-gray-500 col-span-3 text-center">{"No groups yet. Create or join one!"}</p> }
                    } else {
                        group_cards
                    }}
                </div>
            </div>
        </div>
    }
}
