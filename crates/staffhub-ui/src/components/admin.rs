//! Admin dashboard: HR and employee account provisioning.

use crate::app::api::ApiCtx;
use crate::app::session::api_base_url;
use crate::components::account_form::NewAccountForm;
use crate::components::dashboard::LiveClock;
use staffhub_api_models::NewAccountRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Which admin endpoint a form submission targets.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ProvisionKind {
    Hr,
    Employee,
}

#[function_component(AdminDashboard)]
pub(crate) fn admin_dashboard() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let busy = use_state(|| false);
    let hr_feedback = use_state(|| None as Option<String>);
    let employee_feedback = use_state(|| None as Option<String>);

    let provision = |kind: ProvisionKind| {
        let api = api.clone();
        let busy = busy.clone();
        let feedback = match kind {
            ProvisionKind::Hr => hr_feedback.clone(),
            ProvisionKind::Employee => employee_feedback.clone(),
        };
        Callback::from(move |account: NewAccountRequest| {
            if *busy {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                let result = match kind {
                    ProvisionKind::Hr => api.services.admin.create_hr(&account).await,
                    ProvisionKind::Employee => api.services.admin.create_employee(&account).await,
                };
                let message = match result {
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
                <h2>{"Admin Dashboard"}</h2>
                <LiveClock />
            </header>
            <div class="provision-grid">
                <NewAccountForm
                    title="Create HR account"
                    on_submit={provision(ProvisionKind::Hr)}
                    busy={*busy}
                    feedback={(*hr_feedback).clone()}
                />
                <NewAccountForm
                    title="Create employee account"
                    on_submit={provision(ProvisionKind::Employee)}
                    busy={*busy}
                    feedback={(*employee_feedback).clone()}
                />
            </div>
        </div>
    }
}
