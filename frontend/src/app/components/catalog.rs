use shared::model::ProjectDto;
use yew::prelude::*;
use yew_hooks::use_async;
use crate::app::components::{Input, SiteInfo, TextButton};
use crate::hooks::use_service_context;

const CARD_ITEM_LIMIT: usize = 4;
const DEFAULT_INDUSTRY: &str = "Proyecto";

fn industry_tag(project: &ProjectDto) -> String {
    let industry = project.industry.trim();
    if industry.is_empty() { DEFAULT_INDUSTRY.to_string() } else { industry.to_string() }
}

fn project_card(project: &ProjectDto) -> Html {
    html! {
        <article key={project.id.to_string()} class="cn__card">
            <span class="cn__tag">{ industry_tag(project) }</span>
            <h3>{ project.title.clone() }</h3>
            <p class="cn__card-meta">{ format!("Liderado por {} · {}", project.owner_name, project.owner_role) }</p>
            <p>{ project.summary.clone() }</p>
            <div class="cn__chips">
                { for project.results.iter().take(CARD_ITEM_LIMIT).map(|r| html! { <span class="cn__chip">{ r.clone() }</span> }) }
            </div>
            <ul>
                { for project.bullets.iter().take(CARD_ITEM_LIMIT).map(|b| html! { <li>{ b.clone() }</li> }) }
            </ul>
        </article>
    }
}

/// Public list of published projects with text search.
#[function_component]
pub fn Catalog() -> Html {
    let services = use_service_context();
    let query = use_state(String::new);
    let submitted = use_state(String::new);

    let projects = {
        let services_ctx = services.clone();
        let submitted = (*submitted).clone();
        use_async(async move { services_ctx.project.list_published(&submitted).await })
    };

    {
        let projects = projects.clone();
        use_effect_with((*submitted).clone(), move |_| {
            projects.run();
            || ()
        });
    }

    let handle_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let handle_search = {
        let query = query.clone();
        let submitted = submitted.clone();
        Callback::from(move |_: String| submitted.set((*query).clone()))
    };

    let cards = projects.data.as_ref().map(|list| {
        if list.is_empty() {
            html! { <p>{ "Aún no hay proyectos publicados." }</p> }
        } else {
            list.iter().map(project_card).collect::<Html>()
        }
    }).unwrap_or_default();

    html! {
        <section class="cn__catalog">
            <SiteInfo />
            <h2>{ "Proyectos" }</h2>
            <form class="cn__search" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <Input name="q" placeholder={"Buscar por título, industria o responsable".to_string()}
                       value={(*query).clone()} on_change={handle_query} />
                <TextButton name="search" title="Buscar" onclick={handle_search} />
            </form>
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
