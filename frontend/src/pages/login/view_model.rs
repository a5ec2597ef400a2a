use super::utils::{self, FieldError, FormStatus, LoginCredentials};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub remember_me: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::with_remember_me(create_rw_signal(false))
    }
}

impl LoginFormState {
    /// Lets the embedding app observe the checkbox through its own signal.
    pub fn with_remember_me(remember_me: RwSignal<bool>) -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            remember_me,
        }
    }

    pub fn toggle_remember_me(&self) {
        self.remember_me.update(|value| *value = !*value);
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub email_error: Signal<bool>,
    pub password_error: Signal<bool>,
    pub is_form_valid: Signal<bool>,
    on_login: Callback<LoginCredentials>,
}

impl LoginViewModel {
    pub fn status(&self) -> Signal<FormStatus> {
        let is_form_valid = self.is_form_valid;
        Signal::derive(move || FormStatus::from_valid(is_form_valid.get()))
    }

    pub fn email_hint(&self) -> Signal<Option<FieldError>> {
        let email_error = self.email_error;
        Signal::derive(move || email_error.get().then_some(FieldError::InvalidEmailFormat))
    }

    pub fn password_hint(&self) -> Signal<Option<FieldError>> {
        let password_error = self.password_error;
        Signal::derive(move || password_error.get().then_some(FieldError::PasswordTooShort))
    }

    /// Hands the credentials to `on_login` when the form is valid. Returns
    /// whether the callback ran.
    pub fn submit(&self) -> bool {
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        match utils::try_submit(&email, &password) {
            Some(credentials) => {
                self.on_login.call(credentials);
                true
            }
            None => false,
        }
    }
}

pub fn use_login_view_model(
    on_login: Callback<LoginCredentials>,
    remember_me: Option<RwSignal<bool>>,
) -> LoginViewModel {
    let form = remember_me
        .map(LoginFormState::with_remember_me)
        .unwrap_or_default();

    let email = form.email;
    let password = form.password;
    let email_error = Signal::derive(move || email.with(|value| utils::validate_email(value)));
    let password_error =
        Signal::derive(move || password.with(|value| utils::validate_password(value)));
    let is_form_valid = Signal::derive(move || {
        utils::compute_form_valid(
            &email.get(),
            &password.get(),
            email_error.get(),
            password_error.get(),
        )
    });

    LoginViewModel {
        form,
        email_error,
        password_error,
        is_form_valid,
        on_login,
    }
}
