use chrono::NaiveDate;
use yew::prelude::*;

use super::{expense_list::ExpensePanel, nav::TopBar};
use crate::{
    category::Category,
    ledger,
    models::{Expense, ExpenseDraft, Group},
    state::SortOrder,
};

/// Callbacks shared by the group and category screens.
#[derive(Clone, PartialEq)]
pub struct ExpenseHandlers {
    pub on_back: Callback<()>,
    pub on_sort: Callback<SortOrder>,
    pub on_filter_date: Callback<Option<NaiveDate>>,
    pub on_add: Callback<ExpenseDraft>,
    pub on_update: Callback<(i64, ExpenseDraft)>,
    pub on_delete: Callback<i64>,
}

#[derive(Properties, PartialEq)]
pub struct GroupDetailProps {
    pub group: Group,
    pub expenses: Vec<Expense>,
    pub sort_order: SortOrder,
    #[prop_or_default]
    pub filter_date: Option<NaiveDate>,
    pub on_select_category: Callback<Category>,
    pub handlers: ExpenseHandlers,
}

#[function_component(GroupDetail)]
pub fn group_detail(props: &GroupDetailProps) -> Html {
    let counts = ledger::category_counts(&props.expenses);
    let handlers = &props.handlers;

    html! {
        <div class="min-h-screen bg-gray-50 fade-in">
            <TopBar title={props.group.name.clone()} on_back={handlers.on_back.clone()} />
            <div class="container mx-auto p-6">
                <div class="flex gap-2 overflow-x-auto pb-2 mb-4">
                    { for Category::ALL.into_iter().map(|category| {
                        let on_select = props.on_select_category.clone();
                        let count = counts.get(&category).copied().unwrap_or(0);
                        html! {
                            <button onclick={Callback::from(move |_| on_select.emit(category))}
                                class="flex items-center gap-2 px-3 py-1 bg-white text-gray-600 rounded-full text-xs shadow-sm border whitespace-nowrap hover:border-indigo-400">
                                <span class={classes!("w-2", "h-2", "rounded-full", category.color_class())}></span>
                                <span>{ category.label() }</span>
                                <span class="text-gray-400">{ count.to_string() }</span>
                            </button>
                        }
                    }) }
                </div>
                <ExpensePanel
                    expenses={props.expenses.clone()}
                    sort_order={props.sort_order}
                    filter_date={props.filter_date}
                    on_sort={handlers.on_sort.clone()}
                    on_filter_date={handlers.on_filter_date.clone()}
                    on_add={handlers.on_add.clone()}
                    on_update={handlers.on_update.clone()}
                    on_delete={handlers.on_delete.clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryDetailProps {
    pub group: Group,
    pub category: Category,
    pub expenses: Vec<Expense>,
    pub sort_order: SortOrder,
    #[prop_or_default]
    pub filter_date: Option<NaiveDate>,
    pub handlers: ExpenseHandlers,
}

#[function_component(CategoryDetail)]
pub fn category_detail(props: &CategoryDetailProps) -> Html {
    let handlers = &props.handlers;
    let title = format!("{} · {}", props.group.name, props.category.label());

    html! {
        <div class="min-h-screen bg-gray-50 fade-in">
            <TopBar title={title} on_back={handlers.on_back.clone()} />
            <div class="container mx-auto p-6">
                <div class="flex items-center gap-3 mb-4">
                    <div class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "text-white", "font-bold", props.category.color_class())}>
                        { props.category.initial().to_string() }
                    </div>
                    <h2 class="text-2xl font-bold text-gray-800">{ props.category.label() }</h2>
                </div>
                <ExpensePanel
                    expenses={props.expenses.clone()}
                    category={props.category}
                    sort_order={props.sort_order}
                    filter_date={props.filter_date}
                    on_sort={handlers.on_sort.clone()}
                    on_filter_date={handlers.on_filter_date.clone()}
                    on_add={handlers.on_add.clone()}
                    on_update={handlers.on_update.clone()}
                    on_delete={handlers.on_delete.clone()} />
            </div>
        </div>
    }
}
