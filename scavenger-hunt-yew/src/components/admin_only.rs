use crate::hooks::use_auth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminOnlyProps {
    /// Shown instead of the children while logged out
    #[prop_or_default]
    pub fallback: Html,
    pub children: Children,
}

/// Renders its children only for an authenticated admin
#[function_component(AdminOnly)]
pub fn admin_only(props: &AdminOnlyProps) -> Html {
    let auth = use_auth();

    if auth.is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        props.fallback.clone()
    }
}
