use crate::pages::login::{
    components::{
        actions::{ActionStyle, SecondaryButton},
        messages::FieldHint,
    },
    utils::{FieldError, FormStatus, SecondaryAction},
};
use leptos::{
    ev::{KeyboardEvent, SubmitEvent},
    html, *,
};

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

/// Runs `on_submit` only while the form is valid.
fn submit_if_valid(status: FormStatus, on_submit: Callback<()>) -> bool {
    if status.is_valid() {
        on_submit.call(());
        true
    } else {
        false
    }
}

/// Enter moves to the next field unless it is confirming IME composition.
fn advances_focus(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

fn input_class(error: Option<FieldError>) -> String {
    let border = if error.is_some() {
        "border-status-error-border"
    } else {
        "border-form-control-border"
    };
    format!("{} {}", INPUT_CLASS, border)
}

#[component]
pub fn LoginForm(
    #[prop(into)] title: MaybeSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    remember_me: RwSignal<bool>,
    email_hint: Signal<Option<FieldError>>,
    password_hint: Signal<Option<FieldError>>,
    status: Signal<FormStatus>,
    on_submit: Callback<()>,
    on_secondary: Callback<SecondaryAction>,
) -> impl IntoView {
    let password_ref = create_node_ref::<html::Input>();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_if_valid(status.get_untracked(), on_submit);
    };

    // Enter on the email field advances to the password field instead of submitting.
    let email_keydown = move |ev: KeyboardEvent| {
        if advances_focus(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            if let Some(input) = password_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <div class="min-h-screen flex items-start justify-center bg-surface px-6 py-4">
            <div class="max-w-md w-full flex flex-col items-center">
                <div class="mt-6 h-24 w-24 rounded-3xl bg-brand-tonal-bg" aria-hidden="true"></div>
                <h2 class="mt-4 text-center text-3xl font-extrabold text-brand-tonal-text">
                    {move || title.get()}
                </h2>

                <form
                    class="mt-6 w-full space-y-3"
                    novalidate
                    data-form-status=move || status.get().as_str()
                    on:submit=handle_submit
                >
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg mb-1">
                            "Email"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            inputmode="email"
                            enterkeyhint="next"
                            placeholder="Email"
                            class=move || input_class(email_hint.get())
                            aria-invalid=move || email_hint.get().is_some().to_string()
                            aria-describedby="email-hint"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            on:keydown=email_keydown
                        />
                        <FieldHint id="email-hint" error=email_hint />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-fg mb-1">
                            "Password"
                        </label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            enterkeyhint="done"
                            placeholder="Password"
                            node_ref=password_ref
                            class=move || input_class(password_hint.get())
                            aria-invalid=move || password_hint.get().is_some().to_string()
                            aria-describedby="password-hint"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <FieldHint id="password-hint" error=password_hint />
                    </div>

                    <div class="flex items-center">
                        <label class="flex items-center gap-2 text-sm text-brand-tonal-text">
                            <input
                                id="remember-me"
                                name="remember_me"
                                type="checkbox"
                                class="h-4 w-4 rounded border-form-control-border"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            "Remember Me"
                        </label>
                        <div class="flex-1"></div>
                        <SecondaryButton
                            action=SecondaryAction::ForgotPassword
                            on_activate=on_secondary
                            style=ActionStyle::Text
                        />
                    </div>

                    <div>
                        <SecondaryButton
                            action=SecondaryAction::LoginWithPin
                            on_activate=on_secondary
                        />
                    </div>

                    <div class="pt-3 space-y-3">
                        <button
                            id="login-submit"
                            type="submit"
                            disabled=move || !status.get().is_valid()
                            class="w-full h-12 rounded-2xl text-sm font-semibold bg-brand-tonal-bg text-brand-tonal-text disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            "Login"
                        </button>
                        <SecondaryButton
                            action=SecondaryAction::Register
                            on_activate=on_secondary
                            class="w-full h-12 rounded-2xl"
                        />
                    </div>
                </form>

                <div class="mt-4 flex w-full items-center" role="separator">
                    <hr class="flex-1 border-border"/>
                    <span class="px-2 text-sm text-fg-muted">"or"</span>
                    <hr class="flex-1 border-border"/>
                </div>

                <div class="mt-3 w-3/5">
                    <SecondaryButton
                        action=SecondaryAction::GoogleSignIn
                        on_activate=on_secondary
                        style=ActionStyle::Outlined
                        class="w-full h-11"
                    />
                </div>
            </div>
        </div>
    }
}
