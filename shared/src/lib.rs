use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One expense record as stored by the remote data service.
///
/// `id` is assigned by the service on create and is immutable afterwards.
/// `amount` travels as text exactly as the user entered it; it is only
/// parsed to a number when the statistics view aggregates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub category: String,
}

/// Request body for create and update calls. The service assigns the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

/// The fixed category label set offered by the expense forms.
pub const CATEGORIES: [&str; 5] = [
    "Groceries",
    "Transport",
    "Entertainment",
    "Utilities",
    "Other",
];

/// Calendar month names in order. The statistics month filter always offers
/// all twelve, regardless of which months appear in the data.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Expense {
    /// Parse the record's date field. `None` when the field does not hold a
    /// valid `YYYY-MM-DD` date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Month name derived from the date, e.g. "May" for `2024-05-01`.
    pub fn month_name(&self) -> Option<&'static str> {
        self.parsed_date()
            .map(|date| MONTH_NAMES[date.month0() as usize])
    }

    /// Calendar year derived from the date.
    pub fn year(&self) -> Option<i32> {
        self.parsed_date().map(|date| date.year())
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.clone(),
            date: expense.date.clone(),
            category: expense.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str) -> Expense {
        Expense {
            id: "1".to_string(),
            title: "Lunch".to_string(),
            amount: "250".to_string(),
            date: date.to_string(),
            category: "Groceries".to_string(),
        }
    }

    #[test]
    fn month_name_derived_from_date() {
        assert_eq!(expense("2024-05-01").month_name(), Some("May"));
        assert_eq!(expense("2024-01-31").month_name(), Some("January"));
        assert_eq!(expense("2024-12-25").month_name(), Some("December"));
    }

    #[test]
    fn year_derived_from_date() {
        assert_eq!(expense("2024-05-01").year(), Some(2024));
        assert_eq!(expense("1999-01-01").year(), Some(1999));
    }

    #[test]
    fn invalid_date_yields_none() {
        assert_eq!(expense("not-a-date").month_name(), None);
        assert_eq!(expense("2024-13-01").year(), None);
        assert_eq!(expense("").parsed_date(), None);
    }

    #[test]
    fn draft_copies_all_fields_except_id() {
        let record = expense("2024-05-01");
        let draft = ExpenseDraft::from(&record);
        assert_eq!(draft.title, "Lunch");
        assert_eq!(draft.amount, "250");
        assert_eq!(draft.date, "2024-05-01");
        assert_eq!(draft.category, "Groceries");
    }

    #[test]
    fn expense_matches_wire_format() {
        let json = r#"{"id":"7","title":"Bus","amount":"30","date":"2024-06-02","category":"Transport"}"#;
        let record: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.title, "Bus");
        assert_eq!(record.amount, "30");
        assert_eq!(record.category, "Transport");
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = ExpenseDraft::from(&expense("2024-05-01"));
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Lunch");
        assert_eq!(json["amount"], "250");
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["category"], "Groceries");
    }

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(MONTH_NAMES[0], "January");
        assert_eq!(MONTH_NAMES[11], "December");
    }
}
