use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::error::Error;

const NOTICE_TIMEOUT_MS: u32 = 3500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(err: &Error) -> Self {
        Self { kind: NoticeKind::Error, message: err.notice() }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoticeBarProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn NoticeBar(props: &NoticeBarProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice.as_ref().map(|_| Timeout::new(NOTICE_TIMEOUT_MS, move || on_close.emit(())));
            move || drop(timeout)
        });
    }

    match props.notice.as_ref() {
        Some(notice) => {
            let class = match notice.kind {
                NoticeKind::Success => "cn__notice cn__notice-success",
                NoticeKind::Error => "cn__notice cn__notice-error",
            };
            html! { <div class={class} role="status">{ notice.message.clone() }</div> }
        }
        None => Html::default(),
    }
}

/// Props of every panel section: where to report action outcomes.
#[derive(Properties, Clone, PartialEq)]
pub struct SectionProps {
    pub on_notice: Callback<Notice>,
}
