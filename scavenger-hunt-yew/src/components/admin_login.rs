use crate::hooks::use_auth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    /// Fired after a granted login
    #[prop_or_default]
    pub on_login: Callback<()>,
}

/// Username/password form for the admin area. Shows a logout button once
/// the gate is open.
#[function_component(AdminLogin)]
pub fn admin_login(props: &AdminLoginProps) -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);

    if auth.is_authenticated {
        let logout = auth.logout.clone();
        return html! {
            <div class="hunt-login">
                <button class="hunt-login__button" onclick={move |_| logout()}>
                    {"Log out"}
                </button>
            </div>
        };
    }

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let login = auth.login.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if login((*username).clone(), (*password).clone()) {
                password.set(String::new());
                on_login.emit(());
            }
        })
    };

    html! {
        <form class="hunt-login" onsubmit={on_submit}>
            <h2 class="hunt-login__title">{"Admin Login"}</h2>

            {if let Some(error) = &auth.error {
                html! { <div class="hunt-login__error">{error.clone()}</div> }
            } else {
                html! {}
            }}

            <label class="hunt-login__label">
                {"Username"}
                <input
                    class="hunt-login__input"
                    type="text"
                    value={(*username).clone()}
                    oninput={let username = username.clone(); move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        username.set(input.value());
                    }}
                />
            </label>
            <label class="hunt-login__label">
                {"Password"}
                <input
                    class="hunt-login__input"
                    type="password"
                    value={(*password).clone()}
                    oninput={let password = password.clone(); move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        password.set(input.value());
                    }}
                />
            </label>
            <button class="hunt-login__button" type="submit">
                {"Log in"}
            </button>
        </form>
    }
}
