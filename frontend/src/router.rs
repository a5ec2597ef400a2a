use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    config::RuntimeConfig,
    pages::login::{LoginCredentials, LoginPage},
    state::session::{self, SessionProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app(config: RuntimeConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();
    let title = config.app_title();
    provide_context(config);
    view! {
        <Title text=title/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginRoute/>
                    <Route path="/login" view=LoginRoute/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    let (_session, set_session) = session::use_session();
    let remember_me = create_rw_signal(false);
    let on_login = Callback::new(move |credentials: LoginCredentials| {
        session::record_login(set_session, credentials, remember_me.get_untracked());
    });

    view! { <LoginPage on_login=on_login remember_me=remember_me /> }
}
