use crate::pages::login::utils::SecondaryAction;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Tonal,
    Text,
    Outlined,
}

impl ActionStyle {
    pub fn classes(&self) -> &'static str {
        match self {
            ActionStyle::Tonal => "rounded-xl px-4 py-2 text-sm font-semibold bg-brand-tonal-bg text-brand-tonal-text hover:opacity-90",
            ActionStyle::Text => "px-2 py-1 text-sm font-medium text-brand-tonal-text hover:underline",
            ActionStyle::Outlined => "rounded-xl px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted",
        }
    }
}

/// A control whose flow lives outside the login screen. It is always
/// clickable and only forwards which action was pressed.
#[component]
pub fn SecondaryButton(
    action: SecondaryAction,
    on_activate: Callback<SecondaryAction>,
    #[prop(optional)] style: ActionStyle,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=action.dom_id()
            class=format!("{} {}", style.classes(), class)
            on:click=move |_| on_activate.call(action)
        >
            {action.label()}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn secondary_button_renders_label_and_id() {
        let html = render_to_string(move || {
            view! {
                <SecondaryButton
                    action=SecondaryAction::LoginWithPin
                    on_activate=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Login with PIN"));
        assert!(html.contains("login-with-pin"));
        assert!(html.contains("type=\"button\""));
    }

    #[test]
    fn outlined_style_differs_from_tonal() {
        assert_ne!(ActionStyle::Outlined.classes(), ActionStyle::Tonal.classes());
        assert!(ActionStyle::Outlined.classes().contains("border"));
    }
}
