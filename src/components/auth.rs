use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use crate::state::AuthMode;

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub mode: AuthMode,
    pub on_submit: Callback<(String, String)>,
    pub on_switch: Callback<AuthMode>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let is_login = props.mode == AuthMode::Login;

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();

            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            error.set(None);
            submit.emit((username_val, password_val));
        })
    };

    let on_switch = {
        let switch = props.on_switch.clone();
        let target = if is_login {
            AuthMode::Register
        } else {
            AuthMode::Login
        };
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            switch.emit(target);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 fade-in">
            <div class="bg-white p-8 rounded shadow-md w-full max-w-md">
                if is_login {
                    <h1 class="text-3xl font-bold text-center text-indigo-600 mb-6">{"Expense Tracker"}</h1>
                }
                <h2 class="text-2xl font-bold mb-6 text-center text-indigo-600">
                    { if is_login { "Login" } else { "Register" } }
                </h2>
                <form onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Username"
                        class="w-full mb-4 p-2 border rounded"
                        value={(*username).clone()}
                        oninput={{
                            let username = username.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                username.set(input.value());
                            })
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="w-full mb-6 p-2 border rounded"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            })
                        }}
                    />
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500 mb-4">{ msg.clone() }</p>
                    }
                    <button type="submit" class="w-full bg-indigo-600 text-white p-2 rounded hover:bg-indigo-700">
                        { if is_login { "Login" } else { "Register" } }
                    </button>
                </form>
                <p class="mt-4 text-center text-sm">
                    { if is_login { "New here? " } else { "Already have an account? " } }
                    <a href="#" class="text-indigo-600" onclick={on_switch}>
                        { if is_login { "Register" } else { "Login" } }
                    </a>
                </p>
            </div>
        </div>
    }
}
