use crate::pages::login::LoginCredentials;
use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// What the app keeps from a login hand-off. The password is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginHandoff {
    pub email: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub last_handoff: Option<LoginHandoff>,
    pub handoff_count: u32,
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context::<SessionContext>(create_signal(SessionState::default()));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn record_login(
    set_session: WriteSignal<SessionState>,
    credentials: LoginCredentials,
    remember_me: bool,
) {
    let LoginCredentials { email, .. } = credentials;
    let handoff = LoginHandoff { email, remember_me };
    log::debug!("{}", handoff_summary(&handoff));
    set_session.update(|state| {
        state.last_handoff = Some(handoff);
        state.handoff_count += 1;
    });
}

/// Log line for a hand-off. The address stays out of the logs.
fn handoff_summary(handoff: &LoginHandoff) -> String {
    format!("Login requested (remember me: {})", handoff.remember_me)
}
