#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::pages::login::LoginCredentials;
    use leptos::*;

    /// An `on_login` callback that records every call it receives.
    pub fn recording_login() -> (Callback<LoginCredentials>, RwSignal<Vec<LoginCredentials>>) {
        let calls = create_rw_signal(Vec::<LoginCredentials>::new());
        let on_login = Callback::new(move |credentials: LoginCredentials| {
            calls.update(|list| list.push(credentials));
        });
        (on_login, calls)
    }
}
