use yew::prelude::*;

use crate::components::visibility::{use_first_visible, WatcherKind};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Real source, only applied once the image has been seen.
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `src` stays unset until the first intersection.
pub fn resolved_src(deferred: &AttrValue, seen: bool) -> Option<AttrValue> {
    seen.then(|| deferred.clone())
}

pub fn image_classes(extra: &Classes, seen: bool) -> Classes {
    classes!(extra.clone(), (!seen).then_some("lazy"))
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let seen = use_first_visible(WatcherKind::LazyImage, node.clone());

    html! {
        <img
            ref={node}
            class={image_classes(&props.class, seen)}
            data-src={props.src.clone()}
            src={resolved_src(&props.src, seen)}
            alt={props.alt.clone()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_deferred_until_seen() {
        let deferred = AttrValue::from("photo.jpg");
        assert_eq!(resolved_src(&deferred, false), None);
        assert_eq!(resolved_src(&deferred, true), Some(AttrValue::from("photo.jpg")));
    }

    #[test]
    fn caller_class_survives_loading() {
        let extra = classes!("about-photo");
        let before = image_classes(&extra, false);
        assert!(before.contains("about-photo"));
        assert!(before.contains("lazy"));

        let after = image_classes(&extra, true);
        assert!(after.contains("about-photo"));
        assert!(!after.contains("lazy"));
    }
}
