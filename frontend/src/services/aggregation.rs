//! Pure aggregation logic behind the statistics view: category totals,
//! conjunctive category/month/year filtering, and dropdown option derivation.

use shared::Expense;

/// Placeholder category shown when a chart would otherwise be empty.
pub const NO_DATA_LABEL: &str = "No Data";

/// The three independent statistics filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl ExpenseFilter {
    /// Build a filter from dropdown values, where the empty string is the
    /// "all" option.
    pub fn from_selections(category: &str, month: &str, year: &str) -> Self {
        fn selection(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        Self {
            category: selection(category),
            month: selection(month),
            year: selection(year),
        }
    }

    /// A record passes only if every selected filter matches; an unselected
    /// filter always passes. Records with unparsable dates fail any active
    /// month or year filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| expense.category == category);
        let month_ok = self
            .month
            .as_deref()
            .map_or(true, |month| expense.month_name() == Some(month));
        let year_ok = self.year.as_deref().map_or(true, |year| {
            expense.year().map_or(false, |y| y.to_string() == year)
        });

        category_ok && month_ok && year_ok
    }
}

/// Parse an amount field. Unparsable values count as zero rather than
/// failing the aggregation.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Records passing all active filters, in their original order.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect()
}

/// Category -> summed amount, in first-seen category order.
pub fn category_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let amount = parse_amount(&expense.amount);
        match totals.iter_mut().find(|(category, _)| *category == expense.category) {
            Some((_, total)) => *total += amount,
            None => totals.push((expense.category.clone(), amount)),
        }
    }

    totals
}

/// De-duplicated categories present in the collection, in first-seen order.
pub fn unique_categories(expenses: &[Expense]) -> Vec<String> {
    let mut categories = Vec::new();
    for expense in expenses {
        if !categories.contains(&expense.category) {
            categories.push(expense.category.clone());
        }
    }
    categories
}

/// De-duplicated years derived from the dates, in first-seen order. Records
/// without a parsable date contribute no year.
pub fn unique_years(expenses: &[Expense]) -> Vec<String> {
    let mut years = Vec::new();
    for expense in expenses {
        if let Some(year) = expense.year() {
            let year = year.to_string();
            if !years.contains(&year) {
                years.push(year);
            }
        }
    }
    years
}

/// Substitute an empty mapping with a single zero-valued placeholder so the
/// charts always have something to draw.
pub fn or_placeholder(totals: Vec<(String, f64)>) -> Vec<(String, f64)> {
    if totals.is_empty() {
        vec![(NO_DATA_LABEL.to_string(), 0.0)]
    } else {
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: &str, date: &str) -> Expense {
        Expense {
            id: format!("{}-{}-{}", category, amount, date),
            title: "test".to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("A", "10", "2024-05-01"),
            expense("A", "5", "2024-05-15"),
            expense("B", "3", "2023-11-20"),
        ]
    }

    #[test]
    fn totals_group_and_sum_by_category() {
        let totals = category_totals(&sample());
        assert_eq!(
            totals,
            vec![("A".to_string(), 15.0), ("B".to_string(), 3.0)]
        );
    }

    #[test]
    fn category_filter_narrows_totals_and_list() {
        let expenses = sample();
        let filter = ExpenseFilter::from_selections("A", "", "");

        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.category == "A"));

        let totals = category_totals(&filtered);
        assert_eq!(totals, vec![("A".to_string(), 15.0)]);
    }

    #[test]
    fn filtered_list_is_a_subset_satisfying_all_predicates() {
        let expenses = sample();
        let filter = ExpenseFilter::from_selections("A", "May", "2024");

        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 2);
        for record in &filtered {
            assert!(expenses.contains(record));
            assert!(filter.matches(record));
        }
    }

    #[test]
    fn unselected_filters_always_pass() {
        let filter = ExpenseFilter::default();
        for record in sample() {
            assert!(filter.matches(&record));
        }
    }

    #[test]
    fn filters_apply_conjunctively() {
        let expenses = sample();
        // Category matches two records, but the year only matches one of them
        // combined with a month that matches neither.
        let filter = ExpenseFilter::from_selections("A", "November", "2024");
        assert!(filter_expenses(&expenses, &filter).is_empty());

        let filter = ExpenseFilter::from_selections("B", "November", "2023");
        let filtered = filter_expenses(&expenses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "B");
    }

    #[test]
    fn unfiltered_totals_ignore_filter_selections() {
        let expenses = sample();
        let before = category_totals(&expenses);

        // Aggregating the full collection again after deriving any filtered
        // view must give the same mapping.
        let filter = ExpenseFilter::from_selections("A", "May", "2024");
        let _ = filter_expenses(&expenses, &filter);
        assert_eq!(category_totals(&expenses), before);
    }

    #[test]
    fn unparsable_amounts_count_as_zero() {
        let expenses = vec![
            expense("A", "10", "2024-05-01"),
            expense("A", "oops", "2024-05-02"),
            expense("A", "", "2024-05-03"),
        ];
        assert_eq!(category_totals(&expenses), vec![("A".to_string(), 10.0)]);
        assert_eq!(parse_amount(" 2.5 "), 2.5);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn unparsable_dates_fail_active_month_and_year_filters() {
        let odd = expense("A", "10", "someday");

        assert!(ExpenseFilter::from_selections("A", "", "").matches(&odd));
        assert!(!ExpenseFilter::from_selections("", "May", "").matches(&odd));
        assert!(!ExpenseFilter::from_selections("", "", "2024").matches(&odd));
    }

    #[test]
    fn option_lists_dedupe_in_first_seen_order() {
        let expenses = vec![
            expense("B", "1", "2023-01-01"),
            expense("A", "1", "2024-01-01"),
            expense("B", "1", "2023-06-01"),
            expense("A", "1", "2022-01-01"),
        ];
        assert_eq!(unique_categories(&expenses), vec!["B", "A"]);
        assert_eq!(unique_years(&expenses), vec!["2023", "2024", "2022"]);
    }

    #[test]
    fn years_skip_unparsable_dates() {
        let expenses = vec![expense("A", "1", "bad"), expense("A", "1", "2024-01-01")];
        assert_eq!(unique_years(&expenses), vec!["2024"]);
    }

    #[test]
    fn per_category_filtered_sum_matches_its_records() {
        let expenses = vec![
            expense("A", "10", "2024-05-01"),
            expense("A", "2.5", "2024-06-01"),
            expense("B", "4", "2024-05-02"),
        ];
        let filter = ExpenseFilter::from_selections("", "May", "");
        let filtered = filter_expenses(&expenses, &filter);
        let totals = category_totals(&filtered);

        for (category, total) in &totals {
            let expected: f64 = filtered
                .iter()
                .filter(|e| &e.category == category)
                .map(|e| parse_amount(&e.amount))
                .sum();
            assert_eq!(*total, expected);
        }
        assert_eq!(
            totals,
            vec![("A".to_string(), 10.0), ("B".to_string(), 4.0)]
        );
    }

    #[test]
    fn empty_mapping_becomes_no_data_placeholder() {
        assert_eq!(
            or_placeholder(Vec::new()),
            vec![(NO_DATA_LABEL.to_string(), 0.0)]
        );

        let totals = vec![("A".to_string(), 1.0)];
        assert_eq!(or_placeholder(totals.clone()), totals);
    }
}
