use log::debug;
use yew::prelude::*;
use yew_hooks::use_async;
use crate::app::components::{Input, TextButton};
use crate::hooks::use_service_context;
use crate::utils::reload_to;

#[function_component]
pub fn Login() -> Html {
    let services = use_service_context();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let authenticate = {
        let services_ctx = services.clone();
        let email = email.clone();
        let password = password.clone();
        use_async(async move {
            let result = services_ctx.auth.login((*email).clone(), (*password).clone()).await;
            if let Ok(user) = &result {
                debug!("{} logged in", user.email);
                reload_to("/");
            }
            result
        })
    };

    let handle_login = {
        let authenticator = authenticate.clone();
        Callback::from(move |_: String| {
            authenticator.run();
        })
    };

    let handle_key_down = {
        let authenticator = authenticate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                authenticator.run();
            }
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    if services.auth.is_authenticated() {
        return html! {
            <div class="cn__login-view">
                <p>{ "Ya has iniciado sesión." }</p>
                <a href="/">{ "Ir al panel" }</a>
            </div>
        };
    }

    html! {
        <div class="cn__login-view">
            <h1>{ "Acceso al panel" }</h1>
            <form>
                <div class="cn__login-view__form">
                    <Input label={"Email".to_string()} name="email" value={(*email).clone()} autocomplete={true} on_change={on_email}/>
                    <Input label={"Contraseña".to_string()} name="password" value={(*password).clone()} hidden={true} onkeydown={handle_key_down} on_change={on_password}/>
                    <div class="cn__login-view__form-action">
                        <TextButton class="primary" name="login" title="Entrar" disabled={authenticate.loading} onclick={handle_login}/>
                        if let Some(err) = authenticate.error.as_ref() {
                            <span class="cn__error-text">{ err.notice() }</span>
                        }
                    </div>
                </div>
            </form>
        </div>
    }
}
