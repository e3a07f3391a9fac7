//! Account-provisioning form shared by the HR and Admin dashboards. The
//! parent owns the API call; this form only gathers fields and reports
//! feedback.

use staffhub_api_models::{NewAccountRequest, PositionRef};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NewAccountFormProps {
    /// Heading shown above the form (e.g. "Create employee account").
    pub title: AttrValue,
    /// Invoked with the gathered fields on submit.
    pub on_submit: Callback<NewAccountRequest>,
    /// Disables the submit button while the parent's request is in flight.
    #[prop_or_default]
    pub busy: bool,
    /// Acknowledgement or error message from the parent's last request.
    #[prop_or_default]
    pub feedback: Option<String>,
}

#[function_component(NewAccountForm)]
pub(crate) fn new_account_form(props: &NewAccountFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let position = use_state(String::new);
    let error = use_state(|| None as Option<String>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let position = position.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty()
                || password.trim().is_empty()
                || position.trim().is_empty()
            {
                error.set(Some(
                    "Username, password, and position are required".to_string(),
                ));
                return;
            }
            error.set(None);
            submit.emit(NewAccountRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
                position: Some(PositionRef {
                    title: position.trim().to_string(),
                }),
            });
        })
    };

    html! {
        <section class="card">
            <h3>{props.title.clone()}</h3>
            <form onsubmit={on_submit}>
                <label class="stack">
                    <span>{"Username"}</span>
                    <input type="text" value={(*username).clone()} oninput={text_input(&username)} />
                </label>
                <label class="stack">
                    <span>{"Initial password"}</span>
                    <input type="password" value={(*password).clone()} oninput={text_input(&password)} />
                </label>
                <label class="stack">
                    <span>{"Position"}</span>
                    <input type="text" value={(*position).clone()} oninput={text_input(&position)} />
                </label>
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else { html! {} }}
                {if let Some(feedback) = &props.feedback {
                    html! { <p class="muted">{feedback}</p> }
                } else { html! {} }}
                <button class="solid" type="submit" disabled={props.busy}>{"Create account"}</button>
            </form>
        </section>
    }
}
