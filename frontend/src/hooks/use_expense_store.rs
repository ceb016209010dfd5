use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::Expense;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// The shared expense store: the single in-memory copy of the remote
/// collection plus its loading/error status.
///
/// Built once by [`use_expense_store`] in the root component and handed to
/// every view through a `ContextProvider`, so the list, forms, and
/// statistics all react to the same state without prop-threading.
#[derive(Clone, PartialEq)]
pub struct ExpensesContext {
    /// Current records, in the order the service returned them.
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
    /// Re-fetches the whole collection. Emitted once on mount and after
    /// every create/update/delete elsewhere in the app.
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_expense_store(api_client: &ApiClient) -> ExpensesContext {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refresh = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_expenses().await {
                    Ok(records) => {
                        expenses.set(records);
                        error.set(None);
                    }
                    Err(message) => {
                        // Keep the previous collection; the list view shows
                        // the message instead of the table.
                        Logger::error("ExpenseStore", &message);
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial load when the store is first mounted.
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    ExpensesContext {
        expenses: (*expenses).clone(),
        loading: *loading,
        error: (*error).clone(),
        refresh,
    }
}
