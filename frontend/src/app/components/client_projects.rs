use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use crate::app::components::SectionProps;
use crate::hooks::use_service_context;

/// Projects assigned to the logged in client, as cards.
#[function_component]
pub fn ClientProjectsView(_props: &SectionProps) -> Html {
    let services = use_service_context();

    let projects = {
        let services_ctx = services.clone();
        use_async_with_options(async move { services_ctx.project.list_mine().await }, UseAsyncOptions::enable_auto())
    };

    let cards = projects.data.as_ref().map(|list| {
        if list.is_empty() {
            return html! { <p>{ "Todavía no tienes proyectos asignados." }</p> };
        }
        list.iter().map(|project| html! {
            <article key={project.id.to_string()} class="cn__card">
                <h3>{ project.title.clone() }</h3>
                <p class="cn__card-meta">{ format!("{} · {}", project.industry, project.updated_at) }</p>
                <p>{ project.summary.clone() }</p>
                <ul>
                    { for project.results.iter().map(|r| html! { <li>{ r.clone() }</li> }) }
                </ul>
            </article>
        }).collect::<Html>()
    }).unwrap_or_default();

    html! {
        <section class="cn__client-projects">
            <h2>{ "Mis proyectos" }</h2>
            if projects.loading {
                <p>{ "Cargando..." }</p>
            }
            if let Some(err) = projects.error.as_ref() {
                <p class="cn__error-text">{ err.notice() }</p>
            }
            <div class="cn__cards">{ cards }</div>
        </section>
    }
}
