use std::rc::Rc;
use shared::model::{can_delete_project, ProjectDto};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use crate::app::components::{Notice, ProjectForm, SectionProps, TextButton};
use crate::hooks::use_service_context;

/// Form state: closed, a new project, or an existing one.
#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Rc<ProjectDto>),
}

#[function_component]
pub fn ProjectsView(props: &SectionProps) -> Html {
    let services = use_service_context();
    let editing = use_state(|| Editing::Closed);
    let can_delete = can_delete_project(services.auth.session().as_ref());

    let projects = {
        let services_ctx = services.clone();
        use_async_with_options(async move { services_ctx.project.list_all().await }, UseAsyncOptions::enable_auto())
    };

    let handle_new = {
        let editing = editing.clone();
        Callback::from(move |_: String| editing.set(Editing::New))
    };

    let handle_saved = {
        let editing = editing.clone();
        let projects = projects.clone();
        Callback::from(move |()| {
            editing.set(Editing::Closed);
            projects.run();
        })
    };

    let handle_cancel = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(Editing::Closed))
    };

    let handle_delete = {
        let services_ctx = services.clone();
        let projects = projects.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |id: u64| {
            let services_ctx = services_ctx.clone();
            let projects = projects.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match services_ctx.project.delete(id).await {
                    Ok(()) => {
                        on_notice.emit(Notice::success("Proyecto eliminado."));
                        projects.run();
                    }
                    Err(err) => on_notice.emit(Notice::error(&err)),
                }
            });
        })
    };

    let form = match &*editing {
        Editing::Closed => Html::default(),
        Editing::New => html! {
            <ProjectForm key="new" on_saved={handle_saved} on_cancel={handle_cancel} on_notice={props.on_notice.clone()} />
        },
        Editing::Existing(project) => html! {
            <ProjectForm key={project.id.to_string()} project={Rc::clone(project)} on_saved={handle_saved}
                on_cancel={handle_cancel} on_notice={props.on_notice.clone()} />
        },
    };

    let rows = projects.data.as_ref().map(|list| {
        list.iter().map(|project| {
            let project = Rc::new(project.clone());
            let handle_edit = {
                let editing = editing.clone();
                let project = Rc::clone(&project);
                Callback::from(move |_: String| editing.set(Editing::Existing(Rc::clone(&project))))
            };
            let handle_delete = {
                let handle_delete = handle_delete.clone();
                let id = project.id;
                Callback::from(move |_: String| handle_delete.emit(id))
            };
            html! {
                <tr key={project.id.to_string()}>
                    <td>{ project.title.clone() }</td>
                    <td>{ project.industry.clone() }</td>
                    <td>{ project.client_email.clone().unwrap_or_default() }</td>
                    <td>{ if project.published { "Sí" } else { "No" } }</td>
                    <td>{ project.updated_at.clone() }</td>
                    <td class="cn__table-actions">
                        <TextButton name="edit" title="Editar" onclick={handle_edit} />
                        <TextButton name="delete" title="Eliminar" class="danger" disabled={!can_delete} onclick={handle_delete} />
                    </td>
                </tr>
            }
        }).collect::<Html>()
    }).unwrap_or_default();

    html! {
        <section class="cn__projects">
            <div class="cn__section-header">
                <h2>{ "Proyectos" }</h2>
                <TextButton class="primary" name="new" title="Nuevo proyecto" onclick={handle_new} />
            </div>
            { form }
            if projects.loading {
                <p>{ "Cargando..." }</p>
            }
            if let Some(err) = projects.error.as_ref() {
                <p class="cn__error-text">{ err.notice() }</p>
            }
            <table class="cn__table">
                <thead>
                    <tr>
                        <th>{ "Título" }</th>
                        <th>{ "Sector" }</th>
                        <th>{ "Cliente" }</th>
                        <th>{ "Publicado" }</th>
                        <th>{ "Actualizado" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </section>
    }
}
