use std::rc::Rc;
use yew::prelude::*;

/// Admin session state accessible via hook
#[derive(Clone)]
pub struct AuthContext {
    pub is_authenticated: bool,

    /// Message from the last failed login
    pub error: Option<String>,

    /// Check `(username, password)`; returns whether access was granted
    pub login: Rc<dyn Fn(String, String) -> bool>,

    pub logout: Rc<dyn Fn()>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.is_authenticated == other.is_authenticated && self.error == other.error
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be used within an AuthProvider")
}
