use chrono::NaiveDate;
use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use super::{
    expense_form::ExpenseForm,
    icons::{icon_pencil, icon_plus, icon_sort, icon_trash},
};
use crate::{
    category::Category,
    ledger,
    models::{Expense, ExpenseDraft},
    state::SortOrder,
};

#[derive(Properties, PartialEq)]
struct ExpenseRowProps {
    expense: Expense,
    on_edit: Callback<Expense>,
    on_delete: Callback<i64>,
}

#[function_component(ExpenseRow)]
fn expense_row(props: &ExpenseRowProps) -> Html {
    let expense = &props.expense;
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let expense = expense.clone();
        Callback::from(move |_| on_edit.emit(expense.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = expense.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <div class="p-4 border-b last:border-0 flex justify-between items-center hover:bg-gray-50 transition group">
            <div class="flex items-center gap-4">
                <div class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "text-white", "font-bold", expense.category.color_class())}>
                    { expense.category.initial().to_string() }
                </div>
                <div>
                    <h4 class="font-semibold text-gray-800">{ expense.description.clone() }</h4>
                    <p class="text-xs text-gray-500">{ format!("{} • {}", expense.paid_by_name, expense.date) }</p>
                </div>
            </div>
            <div class="flex items-center gap-3">
                <span class="font-bold text-gray-800">{ ledger::format_amount(expense.amount) }</span>
                <button class="text-gray-400 hover:text-indigo-600" title="Edit" onclick={on_edit}>{ icon_pencil() }</button>
                <button class="text-gray-400 hover:text-red-600" title="Delete" onclick={on_delete}>{ icon_trash() }</button>
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Add,
    Edit(Expense),
}

#[derive(Properties, PartialEq)]
pub struct ExpensePanelProps {
    /// The group's full cached list; filtering happens here.
    pub expenses: Vec<Expense>,
    #[prop_or_default]
    pub category: Option<Category>,
    pub sort_order: SortOrder,
    #[prop_or_default]
    pub filter_date: Option<NaiveDate>,
    pub on_sort: Callback<SortOrder>,
    pub on_filter_date: Callback<Option<NaiveDate>>,
    pub on_add: Callback<ExpenseDraft>,
    pub on_update: Callback<(i64, ExpenseDraft)>,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpensePanel)]
pub fn expense_panel(props: &ExpensePanelProps) -> Html {
    let dialog = use_state(|| Dialog::Closed);

    let visible = ledger::visible_expenses(
        &props.expenses,
        props.category,
        props.filter_date,
        props.sort_order,
    );
    let total = ledger::total(&visible);

    let on_sort = {
        let on_sort = props.on_sort.clone();
        let next = props.sort_order.toggled();
        Callback::from(move |_| on_sort.emit(next))
    };

    let on_date = {
        let on_filter_date = props.on_filter_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_filter_date.emit(NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok());
        })
    };

    let on_clear_date = {
        let on_filter_date = props.on_filter_date.clone();
        Callback::from(move |_| on_filter_date.emit(None))
    };

    let open_add = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(Dialog::Add))
    };

    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |expense: Expense| dialog.set(Dialog::Edit(expense)))
    };

    let on_cancel = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(Dialog::Closed))
    };

    let modal = match &*dialog {
        Dialog::Closed => html! {},
        Dialog::Add => {
            let dialog = dialog.clone();
            let on_add = props.on_add.clone();
            html! {
                <ExpenseForm
                    title="Add Expense"
                    submit_label="Add"
                    default_category={props.category.unwrap_or(Category::Grocery)}
                    on_submit={Callback::from(move |draft: ExpenseDraft| {
                        on_add.emit(draft);
                        dialog.set(Dialog::Closed);
                    })}
                    on_cancel={on_cancel.clone()} />
            }
        }
        Dialog::Edit(expense) => {
            let dialog = dialog.clone();
            let on_update = props.on_update.clone();
            let id = expense.id;
            html! {
                <ExpenseForm
                    key={id.to_string()}
                    title="Edit Expense"
                    submit_label="Save"
                    initial={expense.clone()}
                    on_submit={Callback::from(move |draft: ExpenseDraft| {
                        on_update.emit((id, draft));
                        dialog.set(Dialog::Closed);
                    })}
                    on_cancel={on_cancel.clone()} />
            }
        }
    };

    let date_value = props
        .filter_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <>
            <div class="flex flex-wrap justify-between items-center gap-3 mb-4">
                <div class="flex items-center gap-2">
                    <button onclick={on_sort} class="flex items-center gap-1 bg-white border px-3 py-1 rounded text-sm shadow-sm">
                        { icon_sort() }
                        <span>{ props.sort_order.label() }</span>
                    </button>
                    <input type="date" class="bg-white border px-2 py-1 rounded text-sm" value={date_value} oninput={on_date} />
                    if props.filter_date.is_some() {
                        <button onclick={on_clear_date} class="text-xs text-indigo-600">{"Clear date"}</button>
                    }
                </div>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-gray-600">{ format!("Total: {}", ledger::format_amount(total)) }</span>
                    <button onclick={open_add} class="flex items-center gap-1 bg-pink-500 text-white px-4 py-2 rounded-full shadow-lg hover:bg-pink-600 transition whitespace-nowrap">
                        { icon_plus() }
                        <span>{"Add Expense"}</span>
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow overflow-hidden">
                { if visible.is_empty() {
                    html! { <div class="p-8 text-center text-gray-500">{"No expenses yet."}</div> }
                } else {
                    visible.into_iter().map(|expense| {
                        let key = expense.id.to_string();
                        html! {
                            <ExpenseRow key={key} expense={expense} on_edit={on_edit.clone()} on_delete={props.on_delete.clone()} />
                        }
                    }).collect::<Html>()
                }}
            </div>

            { modal }
        </>
    }
}
