use web_sys::HtmlSelectElement;
use yew::prelude::*;

use shared::MONTH_NAMES;

use crate::components::statistics::bar_chart::BarChart;
use crate::components::statistics::pie_chart::PieChart;
use crate::hooks::use_expense_store::ExpensesContext;
use crate::services::aggregation::{
    category_totals, filter_expenses, or_placeholder, parse_amount, unique_categories,
    unique_years, ExpenseFilter,
};
use crate::services::date_utils::format_for_display;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct StatisticsPageProps {
    pub on_navigate: Callback<Route>,
}

/// The aggregation view: the overview pie chart over the whole collection,
/// plus a bar chart and table over the records passing the three dropdown
/// filters. The pie chart ignores the filters entirely.
#[function_component(StatisticsPage)]
pub fn statistics_page(props: &StatisticsPageProps) -> Html {
    let store = use_context::<ExpensesContext>().expect("ExpensesContext not provided");

    let selected_category = use_state(String::new);
    let selected_month = use_state(String::new);
    let selected_year = use_state(String::new);

    let categories = unique_categories(&store.expenses);
    let years = unique_years(&store.expenses);

    let filter =
        ExpenseFilter::from_selections(&selected_category, &selected_month, &selected_year);
    let filtered = filter_expenses(&store.expenses, &filter);

    let overall_totals = or_placeholder(category_totals(&store.expenses));
    let filtered_totals = or_placeholder(category_totals(&filtered));

    let select_handler = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.set(select.value());
        })
    };
    let on_category_change = select_handler(selected_category.clone());
    let on_month_change = select_handler(selected_month.clone());
    let on_year_change = select_handler(selected_year.clone());

    let on_add = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::AddExpense))
    };

    html! {
        <div class="statistics-page">
            <div class="filter-row">
                <div class="filter-group">
                    <label for="category-filter">{"Select Category:"}</label>
                    <select
                        id="category-filter"
                        value={(*selected_category).clone()}
                        onchange={on_category_change}
                    >
                        <option value="">{"-- All categories --"}</option>
                        {for categories.iter().map(|category| {
                            html! { <option value={category.clone()}>{category}</option> }
                        })}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="month-filter">{"Select Month:"}</label>
                    <select
                        id="month-filter"
                        value={(*selected_month).clone()}
                        onchange={on_month_change}
                    >
                        <option value="">{"-- All months --"}</option>
                        {for MONTH_NAMES.iter().map(|month| {
                            html! { <option value={*month}>{month}</option> }
                        })}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="year-filter">{"Select Year:"}</label>
                    <select
                        id="year-filter"
                        value={(*selected_year).clone()}
                        onchange={on_year_change}
                    >
                        <option value="">{"-- All years --"}</option>
                        {for years.iter().map(|year| {
                            html! { <option value={year.clone()}>{year}</option> }
                        })}
                    </select>
                </div>
            </div>

            <div class="charts-row">
                <section class="chart-container">
                    <h3>{"Filtered Expenses (Bar Chart)"}</h3>
                    <BarChart data={filtered_totals} />
                </section>

                <section class="filtered-table">
                    <h3>{"Filtered Expenses (Table)"}</h3>
                    {if filtered.is_empty() {
                        html! {
                            <p class="empty-state">
                                {"No filtered expenses available to display."}
                            </p>
                        }
                    } else {
                        html! {
                            <table class="expenses-table">
                                <thead>
                                    <tr>
                                        <th>{"Title"}</th>
                                        <th>{"Amount"}</th>
                                        <th>{"Date"}</th>
                                        <th>{"Category"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for filtered.iter().map(|expense| {
                                        html! {
                                            <tr key={expense.id.clone()}>
                                                <td>{&expense.title}</td>
                                                <td>
                                                    {format!("${:.2}", parse_amount(&expense.amount))}
                                                </td>
                                                <td>{format_for_display(&expense.date)}</td>
                                                <td>{&expense.category}</td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        }
                    }}
                </section>
            </div>

            <section class="chart-container">
                <h3>{"Total Overall Expenses"}</h3>
                <PieChart data={overall_totals} />
            </section>

            <button class="floating-button" title="Add Expense" onclick={on_add}>
                {"+"}
            </button>
        </div>
    }
}
