use log::{debug, warn};
use shared::{NewContestant, Notification, Notifier, RegistrationRequest, SharedError};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::api::contestants::create_contestant;
use crate::components::common_toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    /// Receives the slug of the newly registered contestant
    pub on_success: Callback<String>,
}

/// Turns a rejected request into the line shown under the form
pub(crate) fn validation_message(error: &SharedError) -> String {
    match error {
        SharedError::Validation(_) => {
            "Please check the form: names are required, the email must be valid and the child must be 12 or younger.".to_string()
        }
        SharedError::MissingField(field) => format!("Please fill in {}", field.replace('_', " ")),
        other => other.to_string(),
    }
}

pub(crate) fn parse_age(value: &str) -> Option<u8> {
    value.trim().parse::<u8>().ok()
}

/// Stores the typed age on the request, clearing it when it does not parse.
/// Returns the message to show under the form, if any.
pub(crate) fn apply_age(request: &mut RegistrationRequest, value: &str) -> Option<String> {
    request.age = parse_age(value);
    match request.age {
        Some(_) => None,
        None => Some("Age must be a whole number".to_string()),
    }
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let request = use_state(RegistrationRequest::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_input = |apply: fn(&mut RegistrationRequest, String)| {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*request).clone();
            apply(&mut updated, input.value());
            request.set(updated);
        })
    };

    let on_full_name = on_input(|r, v| r.full_name = v);
    let on_parent_name = on_input(|r, v| r.parent_name = v);
    let on_email = on_input(|r, v| r.email = v);

    let on_age = {
        let request = request.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*request).clone();
            error.set(apply_age(&mut updated, &input.value()));
            request.set(updated);
        })
    };

    let onsubmit = {
        let request = request.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let contestant = match NewContestant::from_request((*request).clone()) {
                Ok(contestant) => contestant,
                Err(e) => {
                    debug!("Registration rejected: {}", e);
                    error.set(Some(validation_message(&e)));
                    return;
                }
            };

            error.set(None);
            loading.set(true);

            let loading = loading.clone();
            let on_success = on_success.clone();
            let toast_context = toast_context.clone();
            spawn_local(async move {
                match create_contestant(&contestant).await {
                    Ok(stored) => {
                        toast_context.notify(Notification::new(
                            "Registration complete",
                            format!("{} has been entered into the contest.", stored.full_name),
                        ));
                        on_success.emit(stored.slug);
                    }
                    Err(e) => {
                        warn!("Registration failed: {}", e);
                        toast_context.notify(Notification::destructive("Error", e.message));
                    }
                }
                loading.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 rounded-md bg-white/90 text-gray-900 focus:outline-none focus:ring-2 focus:ring-white";

    html! {
        <form class="space-y-4" onsubmit={onsubmit}>
            <div>
                <label for="full_name" class="block text-sm font-medium text-white mb-1">{"Child's Name"}</label>
                <input id="full_name" type="text" required=true class={input_class}
                    value={request.full_name.clone()} onchange={on_full_name} />
            </div>
            <div>
                <label for="age" class="block text-sm font-medium text-white mb-1">{"Age"}</label>
                <input id="age" type="number" min="0" max="12" required=true class={input_class}
                    value={request.age.map(|a| a.to_string()).unwrap_or_default()} onchange={on_age} />
            </div>
            <div>
                <label for="parent_name" class="block text-sm font-medium text-white mb-1">{"Parent's Name"}</label>
                <input id="parent_name" type="text" required=true class={input_class}
                    value={request.parent_name.clone()} onchange={on_parent_name} />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium text-white mb-1">{"Email"}</label>
                <input id="email" type="email" required=true class={input_class}
                    value={request.email.clone()} onchange={on_email} />
            </div>

            if let Some(message) = (*error).as_ref() {
                <div class="text-red-200 text-sm text-center">{message}</div>
            }

            <button
                type="submit"
                disabled={*loading}
                class="w-full py-2 px-4 rounded-md bg-white text-blue-700 font-semibold hover:bg-gray-100 disabled:opacity-50"
            >
                {if *loading { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 7 "), Some(7));
        assert_eq!(parse_age("-1"), None);
        assert_eq!(parse_age("seven"), None);
    }

    #[test]
    fn test_bad_age_after_good_one_is_rejected() {
        let mut request = RegistrationRequest {
            full_name: "Mia Torres".to_string(),
            parent_name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            age: None,
        };

        assert_eq!(apply_age(&mut request, "5"), None);
        assert_eq!(request.age, Some(5));

        assert_eq!(
            apply_age(&mut request, "five"),
            Some("Age must be a whole number".to_string())
        );
        assert_eq!(request.age, None);

        let result = NewContestant::from_request(request.clone());
        assert_eq!(result, Err(SharedError::MissingField("age".to_string())));
        assert_eq!(validation_message(&result.unwrap_err()), "Please fill in age");

        // a valid age clears the message again
        assert_eq!(apply_age(&mut request, "6"), None);
        assert!(NewContestant::from_request(request).is_ok());
    }

    #[test]
    fn test_missing_field_message() {
        let message = validation_message(&SharedError::MissingField("full_name".to_string()));
        assert_eq!(message, "Please fill in full name");
    }

    #[test]
    fn test_validation_message_is_friendly() {
        let message = validation_message(&SharedError::Validation("email: Invalid".to_string()));
        assert!(message.starts_with("Please check the form"));
    }
}
