use shared::model::Requirement;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::app::AppRoute;
use crate::app::components::{RoleBasedContent, TextButton};
use crate::hooks::use_service_context;
use crate::utils::reload_to;

#[function_component]
pub fn Nav() -> Html {
    let services = use_service_context();
    let session = services.auth.session();

    let handle_logout = {
        let services_ctx = services.clone();
        Callback::from(move |_: String| {
            services_ctx.auth.logout();
            reload_to("/login");
        })
    };

    let role_badge = session.as_ref()
        .map(|s| html! { <span class="cn__role-badge">{ format!("Rol: {}", s.user.role) }</span> })
        .unwrap_or_default();

    html! {
        <nav class="cn__nav">
            <span class="cn__nav-brand">{ "Nova" }</span>
            <Link<AppRoute> to={AppRoute::Catalog} classes="cn__nav-link">{ "Proyectos" }</Link<AppRoute>>
            <Link<AppRoute> to={AppRoute::Contact} classes="cn__nav-link">{ "Contacto" }</Link<AppRoute>>
            <RoleBasedContent requirement={Requirement::Anonymous}>
                <Link<AppRoute> to={AppRoute::Login} classes="cn__nav-link">{ "Acceso" }</Link<AppRoute>>
            </RoleBasedContent>
            <RoleBasedContent requirement={Requirement::Authenticated}>
                <Link<AppRoute> to={AppRoute::Panel} classes="cn__nav-link">{ "Panel" }</Link<AppRoute>>
                { role_badge }
                <TextButton name="logout" title="Salir" onclick={handle_logout} />
            </RoleBasedContent>
        </nav>
    }
}
