use yew::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let link = |target: Route, label: &str| -> Html {
        let active = matches!(
            (&props.route, &target),
            (Route::Home, Route::Home)
                | (Route::AddExpense, Route::AddExpense)
                | (Route::Statistics, Route::Statistics)
        );
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(target.clone()))
        };

        html! {
            <button
                class={classes!("nav-link", active.then_some("active"))}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="navbar">
            <div class="container">
                <span class="navbar-brand">{"Expense Tracker"}</span>
                <div class="nav-links">
                    {link(Route::Home, "Home")}
                    {link(Route::AddExpense, "Add Expense")}
                    {link(Route::Statistics, "Statistics")}
                </div>
            </div>
        </nav>
    }
}
