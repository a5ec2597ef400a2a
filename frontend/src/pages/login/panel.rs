use super::{
    components::form::LoginForm,
    utils::{self, LoginCredentials, SecondaryAction},
    view_model::use_login_view_model,
};
use crate::config::RuntimeConfig;
use leptos::*;

#[component]
pub fn LoginPanel(
    on_login: Callback<LoginCredentials>,
    #[prop(optional_no_strip)] remember_me: Option<RwSignal<bool>>,
    #[prop(optional_no_strip)] on_secondary: Option<Callback<SecondaryAction>>,
) -> impl IntoView {
    let vm = use_login_view_model(on_login, remember_me);
    let title = use_context::<RuntimeConfig>()
        .unwrap_or_default()
        .app_title();
    let on_secondary = on_secondary.unwrap_or_else(|| Callback::new(utils::not_yet_wired));

    let handle_submit = Callback::new(move |_: ()| {
        vm.submit();
    });

    view! {
        <LoginForm
            title=title
            email=vm.form.email
            password=vm.form.password
            remember_me=vm.form.remember_me
            email_hint=vm.email_hint()
            password_hint=vm.password_hint()
            status=vm.status()
            on_submit=handle_submit
            on_secondary=on_secondary
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_uses_configured_title() {
        let html = render_to_string(move || {
            provide_context(RuntimeConfig {
                app_title: Some("Hardhat Sign In".into()),
                ..Default::default()
            });
            view! { <LoginPanel on_login=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Hardhat Sign In"));
        assert!(html.contains("data-form-status=\"invalid\""));
    }

    #[test]
    fn panel_falls_back_to_default_title() {
        let html = render_to_string(move || view! { <LoginPanel on_login=Callback::new(|_| {}) /> });
        assert!(html.contains("Welcome Back!"));
    }
}
