//! Leave pages: the employee's request form and history, and the HR
//! approval queue.

use crate::app::api::ApiCtx;
use crate::app::session::api_base_url;
use crate::core::logic::validate_leave_request;
use crate::services::ApiError;
use chrono::NaiveDate;
use staffhub_api_models::{
    LeaveBalanceRecord, LeaveDecisionRequest, LeaveRequestRecord, LeaveType, SubmitLeaveRequest,
};
use std::collections::HashMap;
use yew::platform::spawn_local;
use yew::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn request_row(record: &LeaveRequestRecord, actions: Option<Html>) -> Html {
    html! {
        <li class="leave-row">
            <div class="leave-summary">
                <span class="leave-type">{record.leave_type.label()}</span>
                <span class={format!("status status-{}", record.status.as_str().to_lowercase())}>
                    {record.status.as_str()}
                </span>
            </div>
            {record.employee.as_ref().map_or_else(
                || html! {},
                |employee| html! {
                    <p class="muted">{format!("Submitted by: {}", employee.username)}</p>
                },
            )}
            <p>{format!("{} to {}", record.start_date, record.end_date)}</p>
            <p class="muted">{record.reason.clone()}</p>
            {record.approval_comments.as_deref().map_or_else(
                || html! {},
                |comments| if comments.is_empty() {
                    html! {}
                } else {
                    html! { <p class="muted">{format!("Comments: {comments}")}</p> }
                },
            )}
            {actions.unwrap_or_default()}
        </li>
    }
}

#[function_component(EmployeeLeavePage)]
pub(crate) fn employee_leave_page() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let balances = use_state(Vec::<LeaveBalanceRecord>::new);
    let requests = use_state(|| None as Option<Result<Vec<LeaveRequestRecord>, ApiError>>);
    let leave_type = use_state(|| LeaveType::Annual);
    let start = use_state(String::new);
    let end = use_state(String::new);
    let reason = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let success = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    {
        let api = api.clone();
        let balances = balances.clone();
        let requests = requests.clone();
        use_effect_with_deps(
            move |_| {
                {
                    let api = api.clone();
                    let balances = balances.clone();
                    spawn_local(async move {
                        if let Ok(rows) = api.services.leave.balances().await {
                            balances.set(rows);
                        }
                    });
                }
                spawn_local(async move {
                    requests.set(Some(api.services.leave.employee_requests().await));
                });
                || ()
            },
            (),
        );
    }

    let on_type = {
        let leave_type = leave_type.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(kind) = LeaveType::from_name(&select.value()) {
                    leave_type.set(kind);
                }
            }
        })
    };
    let date_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };
    let on_reason = {
        let reason = reason.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                reason.set(area.value());
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let balances = balances.clone();
        let requests = requests.clone();
        let leave_type = leave_type.clone();
        let start = start.clone();
        let end = end.clone();
        let reason = reason.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let kind = *leave_type;
            let parsed = parse_date(&start).zip(parse_date(&end));
            let (parsed_start, parsed_end) = parsed.unzip();
            match validate_leave_request(kind, parsed_start, parsed_end, &reason, &balances) {
                Err(invalid) => {
                    success.set(None);
                    error.set(Some(invalid.message()));
                }
                Ok(days) => {
                    let Some((start_date, end_date)) = parsed else {
                        return;
                    };
                    error.set(None);
                    busy.set(true);
                    let body = SubmitLeaveRequest {
                        leave_type: kind,
                        start_date,
                        end_date,
                        reason: reason.trim().to_string(),
                    };
                    let api = api.clone();
                    let requests = requests.clone();
                    let start = start.clone();
                    let end = end.clone();
                    let reason = reason.clone();
                    let error = error.clone();
                    let success = success.clone();
                    let busy = busy.clone();
                    spawn_local(async move {
                        match api.services.leave.submit(&body).await {
                            Ok(record) => {
                                let mut rows = match &*requests {
                                    Some(Ok(rows)) => rows.clone(),
                                    _ => Vec::new(),
                                };
                                rows.insert(0, record);
                                requests.set(Some(Ok(rows)));
                                start.set(String::new());
                                end.set(String::new());
                                reason.set(String::new());
                                success.set(Some(format!(
                                    "Leave request submitted for {days} day(s)"
                                )));
                            }
                            Err(err) => {
                                error.set(Some(err.to_string()));
                            }
                        }
                        busy.set(false);
                    });
                }
            }
        })
    };

    html! {
        <div class="leave-page">
            <h2>{"Leave Requests"}</h2>
            <section class="card">
                <h3>{"Request leave"}</h3>
                <form onsubmit={on_submit}>
                    <label class="stack">
                        <span>{"Type"}</span>
                        <select onchange={on_type}>
                            { for LeaveType::ALL.iter().map(|kind| html! {
                                <option
                                    value={kind.as_str()}
                                    selected={*kind == *leave_type}
                                >{kind.label()}</option>
                            }) }
                        </select>
                    </label>
                    <label class="stack">
                        <span>{"Start date"}</span>
                        <input type="date" value={(*start).clone()} oninput={date_input(&start)} />
                    </label>
                    <label class="stack">
                        <span>{"End date"}</span>
                        <input type="date" value={(*end).clone()} oninput={date_input(&end)} />
                    </label>
                    <label class="stack">
                        <span>{"Reason"}</span>
                        <textarea value={(*reason).clone()} oninput={on_reason} />
                    </label>
                    {if let Some(err) = &*error {
                        html! { <p class="error-text">{err}</p> }
                    } else { html! {} }}
                    {if let Some(message) = &*success {
                        html! { <p class="muted">{message}</p> }
                    } else { html! {} }}
                    <button class="solid" type="submit" disabled={*busy}>
                        {if *busy { "Submitting..." } else { "Submit request" }}
                    </button>
                </form>
            </section>
            <section class="card">
                <h3>{"My requests"}</h3>
                {match &*requests {
                    None => html! { <p class="muted">{"Loading..."}</p> },
                    Some(Err(err)) => html! { <p class="error-text">{err.to_string()}</p> },
                    Some(Ok(rows)) if rows.is_empty() => html! {
                        <p class="muted">{"No leave requests yet."}</p>
                    },
                    Some(Ok(rows)) => html! {
                        <ul class="leave-list">
                            { for rows.iter().map(|record| request_row(record, None)) }
                        </ul>
                    },
                }}
            </section>
        </div>
    }
}

#[function_component(HrLeavePage)]
pub(crate) fn hr_leave_page() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(&api_base_url()));
    let pending = use_state(|| None as Option<Result<Vec<LeaveRequestRecord>, ApiError>>);
    let comments = use_state(HashMap::<i64, String>::new);
    let deciding = use_state(|| None as Option<i64>);
    let error = use_state(|| None as Option<String>);

    {
        let api = api.clone();
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    pending.set(Some(api.services.leave.pending_for_hr().await));
                });
                || ()
            },
            (),
        );
    }

    let on_comment = |id: i64| {
        let comments = comments.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*comments).clone();
                next.insert(id, input.value());
                comments.set(next);
            }
        })
    };

    let decide = |id: i64, approve: bool| {
        let api = api.clone();
        let pending = pending.clone();
        let comments = comments.clone();
        let deciding = deciding.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if deciding.is_some() {
                return;
            }
            deciding.set(Some(id));
            let decision = LeaveDecisionRequest {
                comments: comments.get(&id).cloned().unwrap_or_default(),
            };
            let api = api.clone();
            let pending = pending.clone();
            let deciding = deciding.clone();
            let error = error.clone();
            spawn_local(async move {
                let result = if approve {
                    api.services.leave.approve(id, &decision).await
                } else {
                    api.services.leave.reject(id, &decision).await
                };
                match result {
                    Ok(_) => {
                        error.set(None);
                        if let Some(Ok(rows)) = &*pending {
                            let remaining: Vec<LeaveRequestRecord> = rows
                                .iter()
                                .filter(|row| row.id != id)
                                .cloned()
                                .collect();
                            pending.set(Some(Ok(remaining)));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                deciding.set(None);
            });
        })
    };

    html! {
        <div class="leave-page">
            <h2>{"Pending Leave Requests"}</h2>
            {if let Some(err) = &*error {
                html! { <p class="error-text">{err}</p> }
            } else { html! {} }}
            {match &*pending {
                None => html! { <p class="muted">{"Loading..."}</p> },
                Some(Err(err)) => html! { <p class="error-text">{err.to_string()}</p> },
                Some(Ok(rows)) if rows.is_empty() => html! {
                    <p class="muted">{"Nothing waiting for a decision."}</p>
                },
                Some(Ok(rows)) => html! {
                    <ul class="leave-list">
                        { for rows.iter().map(|record| {
                            let id = record.id;
                            let actions = html! {
                                <div class="decision">
                                    <input
                                        type="text"
                                        placeholder="Comments (optional)"
                                        value={comments.get(&id).cloned().unwrap_or_default()}
                                        oninput={on_comment(id)}
                                    />
                                    <button
                                        class="solid"
                                        disabled={deciding.is_some()}
                                        onclick={decide(id, true)}
                                    >{"Approve"}</button>
                                    <button
                                        class="ghost"
                                        disabled={deciding.is_some()}
                                        onclick={decide(id, false)}
                                    >{"Reject"}</button>
                                </div>
                            };
                            request_row(record, Some(actions))
                        }) }
                    </ul>
                },
            }}
        </div>
    }
}
