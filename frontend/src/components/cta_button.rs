use yew::prelude::*;

use crate::analytics::{track_event, ButtonClick};

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the click has been tracked.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// `.btn` link or button that reports every click as `button_click`.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = {
        let label = props.label.clone();
        let href = props.href.clone();
        let inner = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            track_event("button_click", ButtonClick::new(&label, href.as_deref()));
            if let Some(inner) = &inner {
                inner.emit(e);
            }
        })
    };
    let class = classes!("btn", props.class.clone());

    match &props.href {
        Some(href) => html! {
            <a {class} href={href.clone()} {onclick}>{ &props.label }</a>
        },
        None => html! {
            <button {class} {onclick}>{ &props.label }</button>
        },
    }
}
