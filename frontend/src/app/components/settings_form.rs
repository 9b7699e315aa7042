use std::collections::BTreeMap;
use shared::model::{SETTING_COMPANY_NAME, SETTING_CONTACT_EMAIL, SETTING_CONTACT_PHONE, SETTING_TAGLINE};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use crate::app::components::{Input, Notice, SectionProps, TextButton};
use crate::error::Error;
use crate::hooks::use_service_context;

const SETTING_FIELDS: [(&str, &str); 4] = [
    (SETTING_COMPANY_NAME, "Empresa"),
    (SETTING_TAGLINE, "Eslogan"),
    (SETTING_CONTACT_EMAIL, "Email de contacto"),
    (SETTING_CONTACT_PHONE, "Teléfono de contacto"),
];

#[function_component]
pub fn SettingsView(props: &SectionProps) -> Html {
    let services = use_service_context();
    let values = use_state(BTreeMap::<String, String>::new);

    {
        let services_ctx = services.clone();
        let values = values.clone();
        use_async_with_options(async move {
            let settings = services_ctx.settings.get().await?;
            values.set(settings);
            Ok::<(), Error>(())
        }, UseAsyncOptions::enable_auto());
    }

    let handle_save = {
        let services_ctx = services.clone();
        let values = values.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: String| {
            let services_ctx = services_ctx.clone();
            let values = values.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match services_ctx.settings.save(&values).await {
                    Ok(saved) => {
                        values.set(saved);
                        on_notice.emit(Notice::success("Ajustes guardados."));
                    }
                    Err(err) => on_notice.emit(Notice::error(&err)),
                }
            });
        })
    };

    let fields = SETTING_FIELDS.iter().map(|(key, label)| {
        let values = values.clone();
        let key = (*key).to_string();
        let value = values.get(&key).cloned().unwrap_or_default();
        let on_change = Callback::from(move |value: String| {
            let mut next = (*values).clone();
            next.insert(key.clone(), value);
            values.set(next);
        });
        html! { <Input label={(*label).to_string()} value={value} on_change={on_change} /> }
    }).collect::<Html>();

    html! {
        <section class="cn__settings">
            <h2>{ "Ajustes del sitio" }</h2>
            <form>
                { fields }
                <div class="cn__form-actions">
                    <TextButton class="primary" name="save" title="Guardar" onclick={handle_save} />
                </div>
            </form>
        </section>
    }
}
