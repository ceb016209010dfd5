use yew::prelude::*;

use crate::components::forms::ExpenseForm;
use crate::hooks::use_expense_form::{use_expense_form, FormMode};
use crate::hooks::use_expense_store::ExpensesContext;
use crate::services::api::ApiClient;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AddExpensePageProps {
    pub api: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(AddExpensePage)]
pub fn add_expense_page(props: &AddExpensePageProps) -> Html {
    let store = use_context::<ExpensesContext>().expect("ExpensesContext not provided");
    let form = use_expense_form(&props.api, &store, FormMode::Create, &props.on_navigate);

    html! {
        <ExpenseForm
            heading="Add Expense"
            submit_label="Submit"
            state={form.state}
            actions={form.actions}
        />
    }
}
