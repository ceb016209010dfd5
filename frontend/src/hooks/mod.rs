pub mod use_expense_form;
pub mod use_expense_store;
