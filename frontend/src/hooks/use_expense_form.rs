use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{Expense, ExpenseDraft};

use crate::hooks::use_expense_store::ExpensesContext;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::Route;

/// Whether the form creates a new record or replaces an existing one.
/// `Update` owns the record being edited, so an update submit always has an
/// id to address.
#[derive(Clone, PartialEq)]
pub enum FormMode {
    Create,
    Update(Expense),
}

#[derive(Clone, PartialEq)]
pub struct ExpenseFormState {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub category: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct ExpenseFormActions {
    pub on_title_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub submit: Callback<()>,
}

pub struct UseExpenseFormResult {
    pub state: ExpenseFormState,
    pub actions: ExpenseFormActions,
}

/// Field state and submit flow shared by the create and update pages.
///
/// On success the fields are cleared (create only), a success notice is
/// shown briefly, the store is refreshed, and the app navigates back to the
/// list. On failure the entered values stay put for correction.
#[hook]
pub fn use_expense_form(
    api_client: &ApiClient,
    store: &ExpensesContext,
    mode: FormMode,
    on_navigate: &Callback<Route>,
) -> UseExpenseFormResult {
    let initial = match &mode {
        FormMode::Create => None,
        FormMode::Update(expense) => Some(expense.clone()),
    };

    let title = use_state(|| initial.as_ref().map(|e| e.title.clone()).unwrap_or_default());
    let amount = use_state(|| initial.as_ref().map(|e| e.amount.clone()).unwrap_or_default());
    let date = use_state(|| initial.as_ref().map(|e| e.date.clone()).unwrap_or_default());
    let category = use_state(|| {
        initial
            .as_ref()
            .map(|e| e.category.clone())
            .unwrap_or_default()
    });
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let submit = {
        let api_client = api_client.clone();
        let refresh = store.refresh.clone();
        let on_navigate = on_navigate.clone();
        let mode = mode.clone();
        let title = title.clone();
        let amount = amount.clone();
        let date = date.clone();
        let category = category.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let success = success.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let on_navigate = on_navigate.clone();
            let mode = mode.clone();
            let title = title.clone();
            let amount = amount.clone();
            let date = date.clone();
            let category = category.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let success = success.clone();

            spawn_local(async move {
                error.set(None);
                success.set(None);
                submitting.set(true);

                let draft = ExpenseDraft {
                    title: (*title).clone(),
                    amount: (*amount).clone(),
                    date: (*date).clone(),
                    category: (*category).clone(),
                };

                let result = match &mode {
                    FormMode::Create => api_client.create_expense(&draft).await,
                    FormMode::Update(expense) => {
                        api_client.update_expense(&expense.id, &draft).await
                    }
                };

                match result {
                    Ok(()) => {
                        let message = match &mode {
                            FormMode::Create => {
                                title.set(String::new());
                                amount.set(String::new());
                                date.set(String::new());
                                category.set(String::new());
                                "Expense added successfully!"
                            }
                            FormMode::Update(_) => "Expense updated successfully!",
                        };
                        success.set(Some(message.to_string()));
                        refresh.emit(());
                        submitting.set(false);

                        // Let the notice show before returning to the list.
                        gloo::timers::future::TimeoutFuture::new(1200).await;
                        on_navigate.emit(Route::Home);
                    }
                    Err(message) => {
                        Logger::warn("ExpenseForm", &message);
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_title_change = {
        let title = title.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
            error.set(None);
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            error.set(None);
        })
    };

    let on_date_change = {
        let date = date.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
            error.set(None);
        })
    };

    let on_category_change = {
        let category = category.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
            error.set(None);
        })
    };

    UseExpenseFormResult {
        state: ExpenseFormState {
            title: (*title).clone(),
            amount: (*amount).clone(),
            date: (*date).clone(),
            category: (*category).clone(),
            submitting: *submitting,
            error: (*error).clone(),
            success: (*success).clone(),
        },
        actions: ExpenseFormActions {
            on_title_change,
            on_amount_change,
            on_date_change,
            on_category_change,
            submit,
        },
    }
}
