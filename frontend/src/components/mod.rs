pub mod add_expense_page;
pub mod edit_expense_page;
pub mod expense_table;
pub mod forms;
pub mod navbar;
pub mod statistics;

pub use add_expense_page::AddExpensePage;
pub use edit_expense_page::EditExpensePage;
pub use expense_table::ExpenseTable;
pub use navbar::Navbar;
pub use statistics::StatisticsPage;
