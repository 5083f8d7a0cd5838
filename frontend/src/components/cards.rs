use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::visibility::{use_first_visible, WatcherKind};

const REVEALED_CLASS: &str = "fade-in-up";

pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-8px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_first_visible(WatcherKind::FadeIn, node.clone());
    let hovered = use_state_eq(|| None::<bool>);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(true)))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(false)))
    };

    // No inline transform until the pointer has interacted, so the reveal
    // animation keeps control of it.
    let style = (*hovered).map(|hovered| format!("transform: {};", hover_transform(hovered)));

    html! {
        <div
            ref={node}
            class={classes!("service-card", revealed.then_some(REVEALED_CLASS))}
            {style}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="service-icon">{ &props.icon }</div>
            <h3>{ &props.title }</h3>
            <p>{ &props.description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryItemProps {
    pub image: AttrValue,
    pub caption: AttrValue,
}

#[function_component(GalleryItem)]
pub fn gallery_item(props: &GalleryItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_first_visible(WatcherKind::FadeIn, node.clone());

    // TODO: open a lightbox with the full-size image
    let onclick = {
        let caption = props.caption.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Gallery item clicked: {}", caption);
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("gallery-item", revealed.then_some(REVEALED_CLASS))}
            {onclick}
        >
            <LazyImage src={props.image.clone()} alt={props.caption.clone()} />
            <div class="gallery-caption">{ &props.caption }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactItemProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(ContactItem)]
pub fn contact_item(props: &ContactItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_first_visible(WatcherKind::FadeIn, node.clone());

    html! {
        <div ref={node} class={classes!("contact-item", revealed.then_some(REVEALED_CLASS))}>
            <span class="contact-icon">{ &props.icon }</span>
            <div>
                <h4>{ &props.label }</h4>
                <p>{ &props.value }</p>
            </div>
        </div>
    }
}
