use shared::model::{SETTING_COMPANY_NAME, SETTING_CONTACT_EMAIL, SETTING_CONTACT_PHONE, SETTING_TAGLINE};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use crate::hooks::use_service_context;
use crate::utils::tel_href;

#[derive(Properties, Clone, PartialEq)]
pub struct SiteInfoProps {
    #[prop_or_default]
    pub with_contact: bool,
}

/// Company header filled from the public site settings.
#[function_component]
pub fn SiteInfo(props: &SiteInfoProps) -> Html {
    let services = use_service_context();

    let settings = {
        let services_ctx = services.clone();
        use_async_with_options(async move { services_ctx.settings.get().await }, UseAsyncOptions::enable_auto())
    };

    let Some(values) = settings.data.as_ref() else {
        return Html::default();
    };
    let value = |key: &str| values.get(key).cloned().unwrap_or_default();
    let email = value(SETTING_CONTACT_EMAIL);
    let phone = value(SETTING_CONTACT_PHONE);

    html! {
        <header class="cn__site-info">
            <h1>{ value(SETTING_COMPANY_NAME) }</h1>
            <p class="cn__tagline">{ value(SETTING_TAGLINE) }</p>
            if props.with_contact {
                <p class="cn__contact-links">
                    if !email.is_empty() {
                        <a href={format!("mailto:{email}")}>{ email.clone() }</a>
                    }
                    if !phone.is_empty() {
                        <a href={tel_href(&phone)}>{ phone.clone() }</a>
                    }
                </p>
            }
        </header>
    }
}
