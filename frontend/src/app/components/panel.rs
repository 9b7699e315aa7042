use shared::model::{select_view, visible_views, PanelView};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;
use crate::app::AppRoute;
use crate::app::components::{ClientProjectsView, MessagesView, Notice, NoticeBar, ProjectsView, SettingsView, UsersView};
use crate::error::Error;
use crate::hooks::use_service_context;
use crate::services::session_cache;
use crate::utils::reload_to;

fn view_title(view: PanelView) -> &'static str {
    match view {
        PanelView::Projects => "Proyectos",
        PanelView::MyProjects => "Mis proyectos",
        PanelView::Messages => "Mensajes",
        PanelView::Settings => "Ajustes",
        PanelView::Users => "Usuarios",
    }
}

#[function_component]
pub fn Panel() -> Html {
    let services = use_service_context();
    let session = services.auth.session();
    let active_view = use_state(|| {
        select_view(session_cache().saved_view().as_deref(), session.as_ref())
    });
    let notice = use_state(|| None::<Notice>);

    {
        // the server decides which identity the token carries
        let services_ctx = services.clone();
        use_async_with_options::<_, (), Error>(async move {
            if services_ctx.auth.me().await.is_none() {
                reload_to("/login");
            }
            Ok(())
        }, UseAsyncOptions::enable_auto());
    }

    let handle_notice = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| notice.set(Some(n)))
    };
    let handle_notice_close = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let Some(session) = session else {
        return html! { <Redirect<AppRoute> to={AppRoute::Login} /> };
    };

    let tabs = visible_views(Some(&session)).into_iter().map(|view| {
        let active_view = active_view.clone();
        let is_active = *active_view == Some(view);
        let onclick = Callback::from(move |_: MouseEvent| {
            session_cache().save_view(view.as_str());
            active_view.set(Some(view));
        });
        html! {
            <button class={if is_active {"cn__tab cn__tab-active"} else {"cn__tab"}} {onclick}>
                { view_title(view) }
            </button>
        }
    }).collect::<Html>();

    let content = match *active_view {
        Some(PanelView::Projects) => html! { <ProjectsView on_notice={handle_notice.clone()} /> },
        Some(PanelView::MyProjects) => html! { <ClientProjectsView on_notice={handle_notice.clone()} /> },
        Some(PanelView::Messages) => html! { <MessagesView on_notice={handle_notice.clone()} /> },
        Some(PanelView::Settings) => html! { <SettingsView on_notice={handle_notice.clone()} /> },
        Some(PanelView::Users) => html! { <UsersView on_notice={handle_notice.clone()} /> },
        None => html! { <p>{ "No hay secciones disponibles para tu rol." }</p> },
    };

    html! {
        <div class="cn__panel">
            <div class="cn__panel-session">
                { format!("{} · {} · {}", session.user.name, session.user.email, session.user.role) }
            </div>
            <NoticeBar notice={(*notice).clone()} on_close={handle_notice_close} />
            <div class="cn__panel-tabs">{ tabs }</div>
            <div class="cn__panel-content">{ content }</div>
        </div>
    }
}
