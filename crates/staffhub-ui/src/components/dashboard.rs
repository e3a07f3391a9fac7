//! Employee dashboard: live clock, greeting, and leave balances.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session::api_base_url;
use crate::app::store::AppStore;
use crate::core::logic::format_clock;
use crate::services::ApiError;
use gloo_timers::callback::Interval;
use staffhub_api_models::LeaveBalanceRecord;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

fn current_clock() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Wall clock refreshed every second.
#[function_component(LiveClock)]
pub(crate) fn live_clock() -> Html {
    let time = use_state(current_clock);

    {
        let time = time.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || time.set(current_clock()));
                move || drop(interval)
            },
            (),
        );
    }

    html! { <span class="clock">{(*time).clone()}</span> }
}

#[function_component(EmployeeDashboard)]
pub(crate) fn employee_dashboard() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let (store, _) = use_store::<AppStore>();
    let balances = use_state(|| None as Option<Result<Vec<LeaveBalanceRecord>, ApiError>>);

    {
        let api = api.clone();
        let balances = balances.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    balances.set(Some(api.services.leave.balances().await));
                });
                || ()
            },
            (),
        );
    }

    let greeting = store.session.username.as_deref().map_or_else(
        || "Welcome".to_string(),
        |username| format!("Welcome, {username}"),
    );

    html! {
        <div class="dashboard">
            <header class="dashboard-head">
                <h2>{greeting}</h2>
                <LiveClock />
            </header>
            <div class="quick-links">
                <Link<Route> to={Route::EmployeeProfile} classes="card link-card">
                    {"My Profile"}
                </Link<Route>>
                <Link<Route> to={Route::EmployeeLeave} classes="card link-card">
                    {"Leave Requests"}
                </Link<Route>>
            </div>
            <section class="card">
                <h3>{"Leave balances"}</h3>
                {match &*balances {
                    None => html! { <p class="muted">{"Loading..."}</p> },
                    Some(Err(err)) => html! { <p class="error-text">{err.to_string()}</p> },
                    Some(Ok(rows)) if rows.is_empty() => html! {
                        <p class="muted">{"No balances allocated yet."}</p>
                    },
                    Some(Ok(rows)) => html! {
                        <ul class="balance-list">
                            { for rows.iter().map(|row| html! {
                                <li>
                                    <span>{row.leave_type.label()}</span>
                                    <span>{format!("{} of {} day(s) left", row.remaining_days, row.total_days)}</span>
                                </li>
                            }) }
                        </ul>
                    },
                }}
            </section>
        </div>
    }
}
