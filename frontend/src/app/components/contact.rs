use shared::model::ContactRequest;
use shared::utils::is_valid_email;
use yew::platform::spawn_local;
use yew::prelude::*;
use crate::app::components::{Input, Notice, NoticeBar, NoticeKind, SiteInfo, TextArea, TextButton};
use crate::hooks::use_service_context;

/// Trims the form and checks it before anything is sent.
pub fn check_contact(form: &ContactRequest) -> Result<ContactRequest, &'static str> {
    let request = ContactRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        company: form.company.trim().to_string(),
        message: form.message.trim().to_string(),
    };
    if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
        return Err("Completa nombre, email y mensaje.");
    }
    if !is_valid_email(&request.email) {
        return Err("Ingresa un email válido.");
    }
    Ok(request)
}

fn form_field(form: &UseStateHandle<ContactRequest>, update: fn(&mut ContactRequest, String)) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        update(&mut next, value);
        form.set(next);
    })
}

/// Public contact form.
#[function_component]
pub fn Contact() -> Html {
    let services = use_service_context();
    let form = use_state(ContactRequest::default);
    let notice = use_state(|| None::<Notice>);
    let sending = use_state(|| false);

    let handle_send = {
        let services_ctx = services.clone();
        let form = form.clone();
        let notice = notice.clone();
        let sending = sending.clone();
        Callback::from(move |_: String| {
            let request = match check_contact(&form) {
                Ok(request) => request,
                Err(reason) => {
                    notice.set(Some(Notice { kind: NoticeKind::Error, message: reason.to_string() }));
                    return;
                }
            };
            let services_ctx = services_ctx.clone();
            let form = form.clone();
            let notice = notice.clone();
            let sending = sending.clone();
            sending.set(true);
            spawn_local(async move {
                match services_ctx.message.contact(request).await {
                    Ok(_) => {
                        form.set(ContactRequest::default());
                        notice.set(Some(Notice::success("Mensaje enviado. Gracias, te contactaremos pronto.")));
                    }
                    Err(err) => {
                        log::warn!("contact failed: {err}");
                        notice.set(Some(Notice { kind: NoticeKind::Error, message: "No se pudo enviar. Intenta nuevamente.".to_string() }));
                    }
                }
                sending.set(false);
            });
        })
    };

    let handle_close = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <section class="cn__contact">
            <SiteInfo with_contact={true} />
            <h2>{ "Contacto" }</h2>
            <NoticeBar notice={(*notice).clone()} on_close={handle_close} />
            <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <Input name="name" label={"Nombre".to_string()} value={form.name.clone()}
                       on_change={form_field(&form, |f, v| f.name = v)} />
                <Input name="email" label={"Email".to_string()} value={form.email.clone()}
                       on_change={form_field(&form, |f, v| f.email = v)} />
                <Input name="company" label={"Empresa".to_string()} value={form.company.clone()}
                       on_change={form_field(&form, |f, v| f.company = v)} />
                <TextArea name="message" label={"Mensaje".to_string()} value={form.message.clone()}
                          on_change={form_field(&form, |f, v| f.message = v)} />
                <div class="cn__form-actions">
                    <TextButton class="primary" name="send" title="Enviar" disabled={*sending} onclick={handle_send} />
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::check_contact;
    use shared::model::ContactRequest;

    fn form(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            company: " Acme ".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn required_fields_are_checked_first() {
        assert_eq!(check_contact(&form(" ", "bad", "hola")), Err("Completa nombre, email y mensaje."));
        assert_eq!(check_contact(&form("Ana", "", "hola")), Err("Completa nombre, email y mensaje."));
    }

    #[test]
    fn email_shape_is_checked() {
        assert_eq!(check_contact(&form("Ana", "ana@local", "hola")), Err("Ingresa un email válido."));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let request = check_contact(&form(" Ana ", " ana@acme.example ", " hola \n")).unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "ana@acme.example");
        assert_eq!(request.company, "Acme");
        assert_eq!(request.message, "hola");
    }
}
