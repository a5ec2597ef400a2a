use crate::pages::login::utils::FieldError;
use leptos::*;

/// Supporting text shown under a field while it holds an invalid value.
#[component]
pub fn FieldHint(id: &'static str, error: Signal<Option<FieldError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p id=id class="mt-1 text-xs text-status-error-text" role="alert">
                {move || error.get().map(|err| err.to_string()).unwrap_or_default()}
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_hint_renders_error_text() {
        let html = render_to_string(move || {
            let error = Signal::derive(|| Some(FieldError::PasswordTooShort));
            view! { <FieldHint id="password-hint" error=error /> }
        });
        assert!(html.contains("Min 6 characters"));
        assert!(html.contains("password-hint"));
    }

    #[test]
    fn field_hint_is_empty_without_error() {
        let html = render_to_string(move || {
            let error = Signal::derive(|| None::<FieldError>);
            view! { <FieldHint id="email-hint" error=error /> }
        });
        assert!(!html.contains("email-hint"));
        assert!(!html.contains("Please enter a valid email"));
    }
}
