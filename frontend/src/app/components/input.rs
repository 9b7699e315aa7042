use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, KeyboardEvent};
use yew::{function_component, html, Callback, Html, NodeRef, Properties, TargetCast};
use crate::html_if;

#[derive(Properties, Clone, PartialEq, Debug)]
pub struct InputProps {
    #[prop_or_default]
    pub name: String,
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or_default]
    pub hidden: bool,
    #[prop_or_default]
    pub input_ref: Option<NodeRef>,
    #[prop_or_default]
    pub autocomplete: bool,
    #[prop_or_default]
    pub onkeydown: Option<Callback<KeyboardEvent>>,
    #[prop_or_default]
    pub on_change: Option<Callback<String>>,
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub placeholder: Option<String>,
}

#[function_component]
pub fn Input(props: &InputProps) -> Html {
    let handle_oninput = {
        let ontext_clone = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                if let Some(cb) = ontext_clone.as_ref() {
                    cb.emit(input.value());
                }
            }
        })
    };

    html! {
        <div class="cn__input">
            { html_if!(props.label.is_some(), {
                <label>{props.label.clone().unwrap_or_default()}</label>
            })}
            <input
                ref={props.input_ref.clone().unwrap_or_default()}
                type={if props.hidden {"password"} else {"text"}}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone().unwrap_or_default()}
                autocomplete={if props.autocomplete {"on"} else {"off"}}
                onkeydown={props.onkeydown.clone()}
                oninput={handle_oninput}
            />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq, Debug)]
pub struct TextAreaProps {
    #[prop_or_default]
    pub name: String,
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub on_change: Option<Callback<String>>,
}

#[function_component]
pub fn TextArea(props: &TextAreaProps) -> Html {
    let handle_oninput = {
        let ontext_clone = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                if let Some(cb) = ontext_clone.as_ref() {
                    cb.emit(input.value());
                }
            }
        })
    };

    html! {
        <div class="cn__input">
            { html_if!(props.label.is_some(), {
                <label>{props.label.clone().unwrap_or_default()}</label>
            })}
            <textarea name={props.name.clone()} value={props.value.clone()} oninput={handle_oninput} />
        </div>
    }
}
