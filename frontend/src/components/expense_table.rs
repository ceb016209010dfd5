use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_expense_store::ExpensesContext;
use crate::services::aggregation::parse_amount;
use crate::services::api::ApiClient;
use crate::services::date_utils::format_for_display;
use crate::services::logging::Logger;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub api: ApiClient,
    pub on_navigate: Callback<Route>,
}

/// The list view: the full expense table with refresh, edit, and delete
/// controls. While the store is loading only the indicator is shown; a
/// fetch error replaces the table with its message.
#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let store = use_context::<ExpensesContext>().expect("ExpensesContext not provided");
    let delete_error = use_state(|| None::<String>);

    if store.loading {
        return html! { <div class="loading">{"Loading... Please Wait!"}</div> };
    }
    if let Some(error) = store.error.as_ref() {
        return html! { <div class="form-message error">{error}</div> };
    }

    let on_delete = {
        let api = props.api.clone();
        let refresh = store.refresh.clone();
        let delete_error = delete_error.clone();

        Callback::from(move |id: String| {
            let api = api.clone();
            let refresh = refresh.clone();
            let delete_error = delete_error.clone();

            spawn_local(async move {
                match api.delete_expense(&id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        refresh.emit(());
                    }
                    Err(message) => {
                        // The row stays until a successful refresh removes it.
                        Logger::error("ExpenseTable", &message);
                        delete_error.set(Some(message));
                    }
                }
            });
        })
    };

    let on_refresh = {
        let refresh = store.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    let dismiss_delete_error = {
        let delete_error = delete_error.clone();
        Callback::from(move |_| delete_error.set(None))
    };

    let on_add = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::AddExpense))
    };

    html! {
        <div class="home-page">
            <h1>
                {"Expense List "}
                <button class="refresh-btn" onclick={on_refresh} disabled={store.loading}>
                    {"Refresh"}
                </button>
            </h1>

            {if let Some(message) = (*delete_error).as_ref() {
                html! {
                    <div class="form-message error delete-notice">
                        {format!("Failed to delete expense: {}", message)}
                        <button class="dismiss-btn" onclick={dismiss_delete_error}>
                            {"Dismiss"}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}

            {if store.expenses.is_empty() {
                html! { <p class="empty-state">{"No expenses available."}</p> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="expenses-table">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for store.expenses.iter().map(|expense| {
                                    let on_edit = {
                                        let on_navigate = props.on_navigate.clone();
                                        let expense = expense.clone();
                                        Callback::from(move |_| {
                                            on_navigate.emit(Route::EditExpense(expense.clone()))
                                        })
                                    };
                                    let on_delete = {
                                        let on_delete = on_delete.clone();
                                        let id = expense.id.clone();
                                        Callback::from(move |_| on_delete.emit(id.clone()))
                                    };

                                    html! {
                                        <tr key={expense.id.clone()}>
                                            <td class="title">{&expense.title}</td>
                                            <td class="amount">
                                                {format!("${:.2}", parse_amount(&expense.amount))}
                                            </td>
                                            <td class="date">{format_for_display(&expense.date)}</td>
                                            <td class="category">{&expense.category}</td>
                                            <td class="actions">
                                                <button class="btn edit-btn" title="Edit" onclick={on_edit}>
                                                    {"Edit"}
                                                </button>
                                                <button class="btn delete-btn" title="Delete" onclick={on_delete}>
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}

            <button class="floating-button" title="Add Expense" onclick={on_add}>
                {"+"}
            </button>
        </div>
    }
}
