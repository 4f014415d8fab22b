use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub message: AttrValue,
    pub on_reset: Callback<()>,
}

#[function_component(ErrorScreen)]
pub fn error_screen(props: &ErrorScreenProps) -> Html {
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    html! {
        <div class="p-8 text-center text-red-600">
            <h2 class="text-xl font-bold">{"Something went wrong"}</h2>
            <pre class="text-xs mt-2 text-left bg-gray-100 p-2 overflow-auto">{ props.message.clone() }</pre>
            <button onclick={on_reset} class="mt-4 bg-gray-200 px-4 py-2 rounded">{"Logout & Reset"}</button>
        </div>
    }
}
