use std::fmt;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation failure. The `Display` text is the inline hint
/// rendered under the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email")]
    InvalidEmailFormat,
    #[error("Min {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Invalid,
    Valid,
}

impl FormStatus {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            FormStatus::Valid
        } else {
            FormStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FormStatus::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Invalid => "invalid",
            FormStatus::Valid => "valid",
        }
    }
}

/// Controls rendered on the login screen that have no behavior yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryAction {
    ForgotPassword,
    LoginWithPin,
    Register,
    GoogleSignIn,
}

impl SecondaryAction {
    pub const ALL: [SecondaryAction; 4] = [
        SecondaryAction::ForgotPassword,
        SecondaryAction::LoginWithPin,
        SecondaryAction::Register,
        SecondaryAction::GoogleSignIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SecondaryAction::ForgotPassword => "Forgot Password?",
            SecondaryAction::LoginWithPin => "Login with PIN",
            SecondaryAction::Register => "Register",
            SecondaryAction::GoogleSignIn => "Sign in",
        }
    }

    pub fn dom_id(&self) -> &'static str {
        match self {
            SecondaryAction::ForgotPassword => "forgot-password",
            SecondaryAction::LoginWithPin => "login-with-pin",
            SecondaryAction::Register => "register",
            SecondaryAction::GoogleSignIn => "google-sign-in",
        }
    }
}

pub fn not_yet_wired(action: SecondaryAction) {
    log::debug!("'{}' is not wired to any flow yet", action.label());
}

/// True means "show the email hint".
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && !email.contains('@')
}

/// True means "show the password hint". Length counts characters, not bytes.
pub fn validate_password(password: &str) -> bool {
    !password.is_empty() && password.chars().count() < MIN_PASSWORD_LEN
}

pub fn compute_form_valid(
    email: &str,
    password: &str,
    email_error: bool,
    password_error: bool,
) -> bool {
    !email.is_empty() && !email_error && !password.is_empty() && !password_error
}

pub fn email_field_error(email: &str) -> Option<FieldError> {
    validate_email(email).then_some(FieldError::InvalidEmailFormat)
}

pub fn password_field_error(password: &str) -> Option<FieldError> {
    validate_password(password).then_some(FieldError::PasswordTooShort)
}

pub fn form_status(email: &str, password: &str) -> FormStatus {
    FormStatus::from_valid(compute_form_valid(
        email,
        password,
        validate_email(email),
        validate_password(password),
    ))
}

/// The email is trimmed; the password is passed through untouched.
pub fn credentials_for_submit(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    }
}

pub fn try_submit(email: &str, password: &str) -> Option<LoginCredentials> {
    form_status(email, password)
        .is_valid()
        .then(|| credentials_for_submit(email, password))
}
