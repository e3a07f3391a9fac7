//! Sign-in page. The audience selector picks which service's `/login`
//! endpoint the credentials go to; a successful response seeds the session
//! store and lands on the role's dashboard.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::session::{BrowserSession, api_base_url};
use crate::app::store::refresh_session;
use crate::core::logic::validate_login;
use crate::core::session::persist_login;
use staffhub_api_models::{LoginRequest, Role};
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let navigator = yew_router::prelude::use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let audience = use_state(|| Role::Employee);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_audience = {
        let audience = audience.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(role) = Role::from_name(&select.value()) {
                    audience.set(role);
                }
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let audience = audience.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            if let Err(invalid) = validate_login(&username, &password) {
                error.set(Some(invalid.message().to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            let credentials = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let claimed = *audience;
            spawn_local(async move {
                match api.services.auth.login(claimed, &credentials).await {
                    Ok(response) => {
                        persist_login(&BrowserSession, &response);
                        refresh_session();
                        let landing = Route::landing_for(response.role);
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&landing);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="card login-card">
            <header>
                <h2>{"Welcome back"}</h2>
                <p class="muted">{"Sign in to StaffHub"}</p>
            </header>
            <form onsubmit={on_submit}>
                <label class="stack">
                    <span>{"Sign in as"}</span>
                    <select onchange={on_audience}>
                        { for Role::ALL.iter().map(|role| html! {
                            <option
                                value={role.as_str()}
                                selected={*role == *audience}
                            >{role.as_str()}</option>
                        }) }
                    </select>
                </label>
                <label class="stack">
                    <span>{"Username"}</span>
                    <input type="text" value={(*username).clone()} oninput={on_username} />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input type="password" value={(*password).clone()} oninput={on_password} />
                </label>
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else { html! {} }}
                <button class="solid" type="submit" disabled={*busy}>
                    {if *busy { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
