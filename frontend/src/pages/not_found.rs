use yew::prelude::*;

use crate::components::cta_button::CtaButton;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <CtaButton label="Volver al inicio" href="/" class="btn-primary" />
        </div>
    }
}
