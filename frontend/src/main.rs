use yew::prelude::*;

use shared::Expense;

mod components;
mod hooks;
mod services;

use components::{AddExpensePage, EditExpensePage, ExpenseTable, Navbar, StatisticsPage};
use hooks::use_expense_store::{use_expense_store, ExpensesContext};
use services::api::ApiClient;

/// Client-side navigation state. `EditExpense` owns the record selected in
/// the list, so the update form can never be reached without one.
#[derive(Clone, PartialEq)]
pub enum Route {
    Home,
    AddExpense,
    Statistics,
    EditExpense(Expense),
}

#[function_component(App)]
fn app() -> Html {
    let api = ApiClient::new();
    let store = use_expense_store(&api);
    let route = use_state(|| Route::Home);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    let page = match &*route {
        Route::Home => html! {
            <ExpenseTable api={api.clone()} on_navigate={on_navigate.clone()} />
        },
        Route::AddExpense => html! {
            <AddExpensePage api={api.clone()} on_navigate={on_navigate.clone()} />
        },
        Route::Statistics => html! {
            <StatisticsPage on_navigate={on_navigate.clone()} />
        },
        Route::EditExpense(expense) => html! {
            <EditExpensePage
                api={api.clone()}
                expense={expense.clone()}
                on_navigate={on_navigate.clone()}
            />
        },
    };

    html! {
        <ContextProvider<ExpensesContext> context={store}>
            <Navbar route={(*route).clone()} on_navigate={on_navigate} />
            <main class="main">
                {page}
            </main>
        </ContextProvider<ExpensesContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
