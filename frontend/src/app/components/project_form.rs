use std::rc::Rc;
use shared::model::{ProjectDto, ProjectRequest};
use yew::platform::spawn_local;
use yew::prelude::*;
use crate::app::components::{Input, Notice, TextArea, TextButton};
use crate::hooks::use_service_context;
use crate::utils::split_lines;

/// Editable text of a project. List fields are edited one entry per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFormState {
    pub title: String,
    pub summary: String,
    pub industry: String,
    pub owner_name: String,
    pub owner_role: String,
    pub results: String,
    pub bullets: String,
    pub client_email: String,
    pub published: bool,
}

impl ProjectFormState {
    pub fn from_project(project: Option<&ProjectDto>) -> Self {
        match project {
            Some(p) => Self {
                title: p.title.clone(),
                summary: p.summary.clone(),
                industry: p.industry.clone(),
                owner_name: p.owner_name.clone(),
                owner_role: p.owner_role.clone(),
                results: p.results.join("\n"),
                bullets: p.bullets.join("\n"),
                client_email: p.client_email.clone().unwrap_or_default(),
                published: p.published,
            },
            None => Self { published: true, ..Self::default() },
        }
    }

    pub fn to_request(&self) -> ProjectRequest {
        ProjectRequest {
            title: self.title.clone(),
            summary: self.summary.clone(),
            industry: self.industry.clone(),
            owner_name: self.owner_name.clone(),
            owner_role: self.owner_role.clone(),
            results: split_lines(&self.results),
            bullets: split_lines(&self.bullets),
            client_email: Some(self.client_email.clone()),
            published: self.published,
        }.normalize()
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProjectFormProps {
    #[prop_or_default]
    pub project: Option<Rc<ProjectDto>>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_notice: Callback<Notice>,
}

#[function_component]
pub fn ProjectForm(props: &ProjectFormProps) -> Html {
    let services = use_service_context();
    let form = use_state(|| ProjectFormState::from_project(props.project.as_deref()));
    let project_id = props.project.as_ref().map(|p| p.id);

    let field = |apply: fn(&mut ProjectFormState, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let handle_published = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.published = !next.published;
            form.set(next);
        })
    };

    let handle_save = {
        let services_ctx = services.clone();
        let form = form.clone();
        let on_saved = props.on_saved.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: String| {
            let services_ctx = services_ctx.clone();
            let request = form.to_request();
            let on_saved = on_saved.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match services_ctx.project.save(project_id, request).await {
                    Ok(project) => {
                        on_notice.emit(Notice::success(format!("Proyecto \"{}\" guardado.", project.title)));
                        on_saved.emit(());
                    }
                    Err(err) => on_notice.emit(Notice::error(&err)),
                }
            });
        })
    };

    let handle_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: String| on_cancel.emit(()))
    };

    html! {
        <form class="cn__project-form">
            <h3>{ if project_id.is_some() { "Editar proyecto" } else { "Nuevo proyecto" } }</h3>
            <Input label={"Título".to_string()} name="title" value={form.title.clone()} on_change={field(|f, v| f.title = v)} />
            <TextArea label={"Resumen".to_string()} name="summary" value={form.summary.clone()} on_change={field(|f, v| f.summary = v)} />
            <Input label={"Sector".to_string()} name="industry" value={form.industry.clone()} on_change={field(|f, v| f.industry = v)} />
            <Input label={"Responsable".to_string()} name="ownerName" value={form.owner_name.clone()} on_change={field(|f, v| f.owner_name = v)} />
            <Input label={"Cargo del responsable".to_string()} name="ownerRole" value={form.owner_role.clone()} on_change={field(|f, v| f.owner_role = v)} />
            <TextArea label={"Resultados (uno por línea)".to_string()} name="results" value={form.results.clone()} on_change={field(|f, v| f.results = v)} />
            <TextArea label={"Puntos clave (uno por línea)".to_string()} name="bullets" value={form.bullets.clone()} on_change={field(|f, v| f.bullets = v)} />
            <Input label={"Email del cliente".to_string()} name="clientEmail" value={form.client_email.clone()} on_change={field(|f, v| f.client_email = v)} />
            <label class="cn__checkbox">
                <input type="checkbox" checked={form.published} onchange={handle_published} />
                { "Publicado" }
            </label>
            <div class="cn__form-actions">
                <TextButton class="primary" name="save" title="Guardar" onclick={handle_save} />
                <TextButton name="cancel" title="Cancelar" onclick={handle_cancel} />
            </div>
        </form>
    }
}
