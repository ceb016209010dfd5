use yew::prelude::*;

use shared::Expense;

use crate::components::forms::ExpenseForm;
use crate::hooks::use_expense_form::{use_expense_form, FormMode};
use crate::hooks::use_expense_store::ExpensesContext;
use crate::services::api::ApiClient;
use crate::Route;

/// The update form. The record under edit arrives through the route state
/// (the `Route::EditExpense` variant owns it), so the page can never be
/// reached without an id to address.
#[derive(Properties, PartialEq)]
pub struct EditExpensePageProps {
    pub api: ApiClient,
    pub expense: Expense,
    pub on_navigate: Callback<Route>,
}

#[function_component(EditExpensePage)]
pub fn edit_expense_page(props: &EditExpensePageProps) -> Html {
    let store = use_context::<ExpensesContext>().expect("ExpensesContext not provided");
    let form = use_expense_form(
        &props.api,
        &store,
        FormMode::Update(props.expense.clone()),
        &props.on_navigate,
    );

    html! {
        <ExpenseForm
            heading="Update Expense"
            submit_label="Update"
            state={form.state}
            actions={form.actions}
        />
    }
}
