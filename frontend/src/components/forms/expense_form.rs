use yew::prelude::*;

use shared::CATEGORIES;

use crate::hooks::use_expense_form::{ExpenseFormActions, ExpenseFormState};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub heading: String,
    pub submit_label: String,
    pub state: ExpenseFormState,
    pub actions: ExpenseFormActions,
}

/// Presentational expense form shared by the create and update pages. Field
/// presence is enforced by the `required` attributes; there is no further
/// client-side validation.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="form-page">
            <h1>{&props.heading}</h1>

            {if let Some(error) = state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}
            {if let Some(success) = state.success.as_ref() {
                html! { <div class="form-message success">{success}</div> }
            } else {
                html! {}
            }}

            <form class="expense-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input
                        type="text"
                        id="title"
                        value={state.title.clone()}
                        onchange={actions.on_title_change.clone()}
                        disabled={state.submitting}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        step="0.01"
                        value={state.amount.clone()}
                        onchange={actions.on_amount_change.clone()}
                        disabled={state.submitting}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={state.date.clone()}
                        onchange={actions.on_date_change.clone()}
                        disabled={state.submitting}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        value={state.category.clone()}
                        onchange={actions.on_category_change.clone()}
                        disabled={state.submitting}
                        required=true
                    >
                        <option value="" selected={state.category.is_empty()}>
                            {"Select a category"}
                        </option>
                        {for CATEGORIES.iter().map(|category| {
                            html! {
                                <option
                                    value={*category}
                                    selected={state.category == *category}
                                >
                                    {category}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                    {if state.submitting {
                        "Submitting..."
                    } else {
                        props.submit_label.as_str()
                    }}
                </button>
            </form>
        </div>
    }
}
