use web_sys::MouseEvent;
use yew::{function_component, html, Callback, Html, Properties};

#[derive(Properties, Clone, PartialEq, Debug)]
pub struct TextButtonProps {
    pub name: String,
    pub title: String,
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<String>,
}

#[function_component]
pub fn TextButton(props: &TextButtonProps) -> Html {

    let handle_click = {
        let click = props.onclick.clone();
        let name = props.name.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            click.emit(name.clone());
        })
    };

    html! {
        <button disabled={props.disabled}
            class={if props.class.is_empty() {"cn__text-button".to_string()} else {format!("cn__text-button cn__button-{}", props.class)}}
            onclick={handle_click}>
         <span>{props.title.clone()}</span>
        </button>
    }
}
