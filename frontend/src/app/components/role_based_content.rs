use shared::model::{is_visible, Requirement};
use yew::prelude::*;
use crate::hooks::use_service_context;

#[derive(Properties, Clone, PartialEq)]
pub struct RoleBasedContentProps {
    pub requirement: Requirement,
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only when the stored session satisfies `requirement`.
/// Purely cosmetic, the server enforces every rule on its own.
#[function_component]
pub fn RoleBasedContent(props: &RoleBasedContentProps) -> Html {
    let services = use_service_context();
    let session = services.auth.session();

    if is_visible(session.as_ref(), props.requirement) {
        html! { <>{ for props.children.iter() }</> }
    } else {
        Html::default()
    }
}
