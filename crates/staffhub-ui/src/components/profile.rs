//! Own-profile page, shared by the employee and HR areas. The details
//! fetch distinguishes "no record yet" from a failed request: the former
//! shows the empty form with a banner, the latter an error.

use crate::app::api::ApiCtx;
use crate::app::session::api_base_url;
use crate::models::DetailsOutcome;
use crate::services::ApiError;
use staffhub_api_models::EmployeeDetailsRecord;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Which service owns the caller's profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProfileScope {
    /// `/employee` service.
    Employee,
    /// `/hr` service.
    Hr,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProfilePageProps {
    /// Service the page reads from and writes to.
    pub scope: ProfileScope,
}

async fn fetch_details(api: &ApiCtx, scope: ProfileScope) -> Result<DetailsOutcome, ApiError> {
    match scope {
        ProfileScope::Employee => api.services.employee.fetch_current_user_details().await,
        ProfileScope::Hr => api.services.hr.fetch_current_user_details().await,
    }
}

async fn save_details(
    api: &ApiCtx,
    scope: ProfileScope,
    details: &EmployeeDetailsRecord,
) -> Result<String, ApiError> {
    let ack = match scope {
        ProfileScope::Employee => api.services.employee.update_profile(details).await?,
        ProfileScope::Hr => api.services.hr.update_profile(details).await?,
    };
    Ok(ack.message)
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &ProfilePageProps) -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let outcome = use_state(|| None as Option<Result<DetailsOutcome, ApiError>>);
    let form = use_state(EmployeeDetailsRecord::default);
    let feedback = use_state(|| None as Option<String>);
    let saving = use_state(|| false);
    let scope = props.scope;

    {
        let api = api.clone();
        let outcome = outcome.clone();
        let form = form.clone();
        use_effect_with_deps(
            move |scope| {
                let scope = *scope;
                spawn_local(async move {
                    let result = fetch_details(&api, scope).await;
                    if let Ok(DetailsOutcome::Ready(details)) = &result {
                        form.set(details.clone());
                    }
                    outcome.set(Some(result));
                });
                || ()
            },
            scope,
        );
    }

    let edit = |apply: fn(&mut EmployeeDetailsRecord, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            }
        })
    };

    let on_save = {
        let api = api.clone();
        let form = form.clone();
        let feedback = feedback.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            let api = api.clone();
            let details = (*form).clone();
            let feedback = feedback.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let message = match save_details(&api, scope, &details).await {
                    Ok(ack) => ack,
                    Err(err) => err.to_string(),
                };
                feedback.set(Some(message));
                saving.set(false);
            });
        })
    };

    let form_view = |not_yet: bool| {
        let fields: [(&str, String, fn(&mut EmployeeDetailsRecord, String)); 6] = [
            ("First name", form.first_name.clone(), |r, v| r.first_name = v),
            ("Last name", form.last_name.clone(), |r, v| r.last_name = v),
            ("Email", form.email.clone(), |r, v| r.email = v),
            ("Contact", form.contact.clone(), |r, v| r.contact = v),
            ("Department", form.department.clone(), |r, v| {
                r.department = v;
            }),
            ("Address", form.address.clone(), |r, v| r.address = v),
        ];
        html! {
            <section class="card">
                {if not_yet {
                    html! {
                        <p class="muted banner">
                            {"Your details have not been created yet. Fill in the form to get started."}
                        </p>
                    }
                } else { html! {} }}
                <form onsubmit={on_save.clone()}>
                    { for fields.into_iter().map(|(label, value, apply)| html! {
                        <label class="stack">
                            <span>{label}</span>
                            <input type="text" value={value} oninput={edit(apply)} />
                        </label>
                    }) }
                    {if let Some(message) = &*feedback {
                        html! { <p class="muted">{message}</p> }
                    } else { html! {} }}
                    <button class="solid" type="submit" disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save profile" }}
                    </button>
                </form>
            </section>
        }
    };

    html! {
        <div class="profile-page">
            <h2>{"My Profile"}</h2>
            {match &*outcome {
                None => html! { <p class="muted">{"Loading..."}</p> },
                Some(Err(err)) => html! { <p class="error-text">{err.to_string()}</p> },
                Some(Ok(DetailsOutcome::NotYetCreated)) => form_view(true),
                Some(Ok(DetailsOutcome::Ready(_))) => form_view(false),
            }}
        </div>
    }
}
