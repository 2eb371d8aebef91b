use crate::config::AppConfig;
use crate::hooks::AuthContext;
use scavenger_hunt_core::{AuthConfig, AuthGate};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    /// Overrides the build-time credentials. Read once when the provider
    /// mounts; later changes are ignored.
    #[prop_or_default]
    pub config: Option<AuthConfig>,
    pub children: Children,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AuthState {
    is_authenticated: bool,
    error: Option<String>,
}

impl AuthState {
    fn of(gate: &AuthGate) -> Self {
        Self {
            is_authenticated: gate.is_authenticated(),
            error: gate.error().map(str::to_string),
        }
    }
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let gate = {
        let config = props.config.clone();
        use_mut_ref(move || AuthGate::new(config.unwrap_or_else(|| AppConfig::from_env().auth)))
    };
    let state = use_state(AuthState::default);

    let login = {
        let gate = gate.clone();
        let state = state.clone();
        Rc::new(move |username: String, password: String| {
            let mut gate = gate.borrow_mut();
            let granted = gate.login(&username, &password);
            state.set(AuthState::of(&gate));
            granted
        }) as Rc<dyn Fn(String, String) -> bool>
    };

    let logout = {
        let gate = gate.clone();
        let state = state.clone();
        Rc::new(move || {
            let mut gate = gate.borrow_mut();
            gate.logout();
            state.set(AuthState::of(&gate));
        }) as Rc<dyn Fn()>
    };

    let context = AuthContext {
        is_authenticated: state.is_authenticated,
        error: state.error.clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
