use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use crate::app::components::SectionProps;
use crate::hooks::use_service_context;

#[function_component]
pub fn MessagesView(_props: &SectionProps) -> Html {
    let services = use_service_context();

    let messages = {
        let services_ctx = services.clone();
        use_async_with_options(async move { services_ctx.message.list().await }, UseAsyncOptions::enable_auto())
    };

    let rows = messages.data.as_ref().map(|list| {
        list.iter().map(|msg| html! {
            <tr key={msg.id.to_string()}>
                <td>{ msg.created_at.clone() }</td>
                <td>{ msg.name.clone() }</td>
                <td><a href={format!("mailto:{}", msg.email)}>{ msg.email.clone() }</a></td>
                <td>{ msg.company.clone() }</td>
                <td class="cn__message-text">{ msg.message.clone() }</td>
            </tr>
        }).collect::<Html>()
    }).unwrap_or_default();

    html! {
        <section class="cn__messages">
            <h2>{ "Mensajes de contacto" }</h2>
            if messages.loading {
                <p>{ "Cargando..." }</p>
            }
            if let Some(err) = messages.error.as_ref() {
                <p class="cn__error-text">{ err.notice() }</p>
            }
            <table class="cn__table">
                <thead>
                    <tr>
                        <th>{ "Fecha" }</th>
                        <th>{ "Nombre" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Empresa" }</th>
                        <th>{ "Mensaje" }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </section>
    }
}
