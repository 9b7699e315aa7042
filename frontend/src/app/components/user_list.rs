use shared::model::{CreateUserRequest, Role};
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::use_async;
use crate::app::components::{Input, Notice, SectionProps, TextButton};
use crate::hooks::use_service_context;

fn role_options(selected: &str, with_all: bool) -> Html {
    let all = with_all.then(|| html! { <option value="" selected={selected.is_empty()}>{ "Todos" }</option> });
    html! {
        <>
            { all.unwrap_or_default() }
            { for Role::ALL.iter().map(|role| html! {
                <option value={role.as_str()} selected={selected == role.as_str()}>{ role.as_str() }</option>
            }) }
        </>
    }
}

#[function_component]
pub fn UsersView(props: &SectionProps) -> Html {
    let services = use_service_context();
    let role_filter = use_state(|| None::<Role>);

    let users = {
        let services_ctx = services.clone();
        let role = *role_filter;
        use_async(async move { services_ctx.user.list(role).await })
    };

    {
        let users = users.clone();
        use_effect_with(*role_filter, move |_| {
            users.run();
            || ()
        });
    }

    let handle_filter = {
        let role_filter = role_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                role_filter.set(select.value().parse::<Role>().ok());
            }
        })
    };

    let handle_created = {
        let users = users.clone();
        Callback::from(move |()| users.run())
    };

    let rows = users.data.as_ref().map(|list| {
        list.iter().map(|user| html! {
            <tr key={user.id.to_string()}>
                <td>{ user.name.clone() }</td>
                <td>{ user.email.clone() }</td>
                <td>{ user.role.as_str() }</td>
                <td>{ user.created_at.clone() }</td>
            </tr>
        }).collect::<Html>()
    }).unwrap_or_default();

    let selected = (*role_filter).map(Role::as_str).unwrap_or_default();

    html! {
        <section class="cn__users">
            <h2>{ "Usuarios" }</h2>
            <UserForm on_created={handle_created} on_notice={props.on_notice.clone()} />
            <label class="cn__filter">
                { "Rol: " }
                <select onchange={handle_filter}>{ role_options(selected, true) }</select>
            </label>
            if let Some(err) = users.error.as_ref() {
                <p class="cn__error-text">{ err.notice() }</p>
            }
            <table class="cn__table">
                <thead>
                    <tr>
                        <th>{ "Nombre" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Rol" }</th>
                        <th>{ "Alta" }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct UserFormProps {
    pub on_created: Callback<()>,
    pub on_notice: Callback<Notice>,
}

fn empty_user() -> CreateUserRequest {
    CreateUserRequest { role: Role::Cliente.as_str().to_string(), ..CreateUserRequest::default() }
}

#[function_component]
pub fn UserForm(props: &UserFormProps) -> Html {
    let services = use_service_context();
    let form = use_state(empty_user);

    let field = |apply: fn(&mut CreateUserRequest, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let handle_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.role = select.value();
                form.set(next);
            }
        })
    };

    let handle_create = {
        let services_ctx = services.clone();
        let form = form.clone();
        let on_created = props.on_created.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: String| {
            let services_ctx = services_ctx.clone();
            let request = (*form).clone();
            let form = form.clone();
            let on_created = on_created.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match services_ctx.user.create_user(request).await {
                    Ok(user) => {
                        on_notice.emit(Notice::success(format!("Usuario {} creado.", user.email)));
                        form.set(empty_user());
                        on_created.emit(());
                    }
                    Err(err) => on_notice.emit(Notice::error(&err)),
                }
            });
        })
    };

    html! {
        <form class="cn__user-form">
            <h3>{ "Nuevo usuario" }</h3>
            <Input label={"Nombre".to_string()} name="name" value={form.name.clone()} on_change={field(|f, v| f.name = v)} />
            <Input label={"Email".to_string()} name="email" value={form.email.clone()} on_change={field(|f, v| f.email = v)} />
            <Input label={"Contraseña".to_string()} name="password" hidden={true} value={form.password.clone()} on_change={field(|f, v| f.password = v)} />
            <label class="cn__select">
                { "Rol" }
                <select onchange={handle_role}>{ role_options(&form.role, false) }</select>
            </label>
            <div class="cn__form-actions">
                <TextButton class="primary" name="create" title="Crear usuario" onclick={handle_create} />
            </div>
        </form>
    }
}
