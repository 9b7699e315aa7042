mod components;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::app::components::{Catalog, Contact, Login, Nav, Panel};
use crate::provider::ServiceContextProvider;

/// App routes
#[derive(Routable, Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    #[at("/login")]
    Login,
    #[at("/")]
    Panel,
    #[at("/proyectos")]
    Catalog,
    #[at("/contacto")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Login => html! {<Login />},
        AppRoute::Panel => html! {<Panel />},
        AppRoute::Catalog => html! {<Catalog />},
        AppRoute::Contact => html! {<Contact />},
        AppRoute::NotFound => html! { "Página no encontrada" },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ServiceContextProvider>
                <Nav />
                <main class="cn__main">
                    <Switch<AppRoute> render={switch} />
                </main>
            </ServiceContextProvider>
        </BrowserRouter>
    }
}
