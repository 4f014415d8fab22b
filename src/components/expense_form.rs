use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::prelude::*;

use crate::{
    category::Category,
    models::{Expense, ExpenseDraft},
};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    /// Prefills the form when editing.
    #[prop_or_default]
    pub initial: Option<Expense>,
    #[prop_or(Category::Grocery)]
    pub default_category: Category,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_cancel: Callback<()>,
}

/// Modal used for both adding and editing an expense.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let description = {
        let initial = props.initial.clone();
        use_state(move || initial.map(|e| e.description).unwrap_or_default())
    };
    let amount = {
        let initial = props.initial.clone();
        use_state(move || initial.map(|e| e.amount.to_string()).unwrap_or_default())
    };
    let category = {
        let initial = props.initial.as_ref().map(|e| e.category);
        let fallback = props.default_category;
        use_state(move || initial.unwrap_or(fallback))
    };
    let error = use_state(|| None::<String>);

    let on_submit = {
        let description = description.clone();
        let amount = amount.clone();
        let category = category.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = ExpenseDraft {
                amount: amount.trim().to_string(),
                category: *category,
                description: description.trim().to_string(),
            };

            if draft.description.is_empty() || draft.amount.is_empty() {
                error.set(Some("Please complete all fields.".to_string()));
                return;
            }

            error.set(None);
            submit.emit(draft);
        })
    };

    let on_cancel = {
        let cancel = props.on_cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
            <div class="bg-white p-6 rounded-lg w-full max-w-sm fade-in">
                <h3 class="text-xl font-bold mb-4">{ props.title.clone() }</h3>
                <form onsubmit={on_submit}>
                    <input type="text" placeholder="Description" class="w-full border p-2 rounded mb-4"
                        value={(*description).clone()}
                        oninput={{
                            let description = description.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                description.set(input.value());
                            })
                        }} />
                    <input type="number" step="0.01" placeholder="Amount (INR)" class="w-full border p-2 rounded mb-4"
                        value={(*amount).clone()}
                        oninput={{
                            let amount = amount.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                amount.set(input.value());
                            })
                        }} />
                    <select class="w-full border p-2 rounded mb-4"
                        onchange={{
                            let category = category.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                category.set(Category::parse(&select.value()));
                            })
                        }}>
                        { for Category::ALL.into_iter().map(|option| html! {
                            <option value={option.label()} selected={option == *category}>{ option.label() }</option>
                        }) }
                    </select>
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500 mb-4">{ msg.clone() }</p>
                    }
                    <div class="flex justify-end gap-2">
                        <button type="button" onclick={on_cancel} class="text-gray-500 px-3 py-1">{"Cancel"}</button>
                        <button type="submit" class="bg-indigo-600 text-white px-4 py-2 rounded">{ props.submit_label.clone() }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
