use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;
pub use utils::{LoginCredentials, SecondaryAction};

/// The login screen. `on_login` receives the trimmed email and the password
/// as typed; it is only called when the form is valid.
#[component]
pub fn LoginPage(
    on_login: Callback<LoginCredentials>,
    #[prop(optional)] remember_me: Option<RwSignal<bool>>,
    #[prop(optional)] on_secondary: Option<Callback<SecondaryAction>>,
) -> impl IntoView {
    view! {
        <LoginPanel
            on_login=on_login
            remember_me=remember_me
            on_secondary=on_secondary
        />
    }
}
