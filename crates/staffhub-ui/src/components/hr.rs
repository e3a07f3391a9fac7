//! HR dashboard: pending-approval count and employee onboarding.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session::api_base_url;
use crate::components::account_form::NewAccountForm;
use crate::components::dashboard::LiveClock;
use staffhub_api_models::NewAccountRequest;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HrDashboard)]
pub(crate) fn hr_dashboard() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let pending = use_state(|| None as Option<i64>);
    let busy = use_state(|| false);
    let feedback = use_state(|| None as Option<String>);

    {
        let api = api.clone();
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    // A 403 here just means this HR account has no
                    // supervisory position; the badge stays hidden.
                    if let Ok(count) = api.services.leave.pending_count().await {
                        pending.set(Some(count));
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_create_employee = {
        let api = api.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        Callback::from(move |account: NewAccountRequest| {
            if *busy {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                let message = match api.services.hr.create_employee(&account).await {
                    Ok(ack) => ack,
                    Err(err) => err.to_string(),
                };
                feedback.set(Some(message));
                busy.set(false);
            });
        })
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-head">
                <h2>{"HR Dashboard"}</h2>
                <LiveClock />
            </header>
            <div class="quick-links">
                <Link<Route> to={Route::HrLeave} classes="card link-card">
                    {match *pending {
                        Some(count) => format!("Leave approvals ({count} pending)"),
                        None => "Leave approvals".to_string(),
                    }}
                </Link<Route>>
                <Link<Route> to={Route::HrProfile} classes="card link-card">
                    {"My Profile"}
                </Link<Route>>
            </div>
            <NewAccountForm
                title="Create employee account"
                on_submit={on_create_employee}
                busy={*busy}
                feedback={(*feedback).clone()}
            />
        </div>
    }
}
