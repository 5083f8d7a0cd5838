use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
}

impl WatchOptions {
    pub const FADE_IN: WatchOptions = WatchOptions {
        threshold: Some(config::FADE_IN_THRESHOLD),
        root_margin: Some(config::FADE_IN_ROOT_MARGIN),
    };

    pub const LAZY_IMAGE: WatchOptions = WatchOptions {
        threshold: None,
        root_margin: None,
    };

    fn to_init(self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        if let Some(threshold) = self.threshold {
            init.set_threshold(&threshold.into());
        }
        if let Some(margin) = self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

/// Pending one-shot registrations keyed by the watched element.
struct Targets<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq, V> Targets<K, V> {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn insert(&mut self, key: K, value: V) {
        self.entries.retain(|(existing, _)| existing != &key);
        self.entries.push((key, value));
    }

    fn take(&mut self, key: &K) -> Option<V> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.swap_remove(index).1)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One IntersectionObserver over a set of elements. Each element's callback
/// fires the first time it intersects, after which it is no longer watched.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    targets: Rc<RefCell<Targets<Element, Callback<()>>>>,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn new(options: WatchOptions) -> Option<Self> {
        let targets: Rc<RefCell<Targets<Element, Callback<()>>>> =
            Rc::new(RefCell::new(Targets::new()));

        let on_intersect = {
            let targets = targets.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let callback = targets.borrow_mut().take(&target);
                    if let Some(callback) = callback {
                        observer.unobserve(&target);
                        callback.emit(());
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        match IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options.to_init(),
        ) {
            Ok(observer) => Some(Self {
                observer,
                targets,
                _on_intersect: on_intersect,
            }),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    pub fn watch(&self, element: &Element, on_visible: Callback<()>) {
        self.targets.borrow_mut().insert(element.clone(), on_visible);
        self.observer.observe(element);
    }

    pub fn unwatch(&self, element: &Element) {
        if self.targets.borrow_mut().take(element).is_some() {
            self.observer.unobserve(element);
        }
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatcherKind {
    FadeIn,
    LazyImage,
}

/// The page's two watchers, shared with every component through context.
#[derive(Clone)]
pub struct Watchers {
    fade_in: Option<Rc<VisibilityWatcher>>,
    lazy_image: Option<Rc<VisibilityWatcher>>,
}

impl PartialEq for Watchers {
    fn eq(&self, other: &Self) -> bool {
        fn same(a: &Option<Rc<VisibilityWatcher>>, b: &Option<Rc<VisibilityWatcher>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(&self.fade_in, &other.fade_in) && same(&self.lazy_image, &other.lazy_image)
    }
}

impl Watchers {
    fn connect() -> Self {
        Self {
            fade_in: VisibilityWatcher::new(WatchOptions::FADE_IN).map(Rc::new),
            lazy_image: VisibilityWatcher::new(WatchOptions::LAZY_IMAGE).map(Rc::new),
        }
    }

    fn get(&self, kind: WatcherKind) -> Option<Rc<VisibilityWatcher>> {
        match kind {
            WatcherKind::FadeIn => self.fade_in.clone(),
            WatcherKind::LazyImage => self.lazy_image.clone(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WatcherProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(WatcherProvider)]
pub fn watcher_provider(props: &WatcherProviderProps) -> Html {
    let watchers = use_state(Watchers::connect);

    html! {
        <ContextProvider<Watchers> context={(*watchers).clone()}>
            { for props.children.iter() }
        </ContextProvider<Watchers>>
    }
}

/// Becomes `true` the first time the referenced element is seen by the
/// given watcher and stays `true`. Without a watcher the element counts as
/// visible straight away.
#[hook]
pub fn use_first_visible(kind: WatcherKind, node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);
    let watcher = use_context::<Watchers>().and_then(|watchers| watchers.get(kind));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let registration = match (watcher, node.cast::<Element>()) {
                    (Some(watcher), Some(element)) => {
                        let on_visible = Callback::from(move |_| visible.set(true));
                        watcher.watch(&element, on_visible);
                        Some((watcher, element))
                    }
                    (None, _) => {
                        visible.set(true);
                        None
                    }
                    (Some(_), None) => None,
                };
                move || {
                    if let Some((watcher, element)) = registration {
                        watcher.unwatch(&element);
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_options() {
        assert_eq!(WatchOptions::FADE_IN.threshold, Some(0.1));
        assert_eq!(WatchOptions::FADE_IN.root_margin, Some("0px 0px -50px 0px"));
        assert_eq!(WatchOptions::LAZY_IMAGE.threshold, None);
    }

    #[test]
    fn targets_fire_once() {
        let mut targets = Targets::new();
        targets.insert(1, "card");
        targets.insert(2, "image");
        assert_eq!(targets.take(&1), Some("card"));
        assert_eq!(targets.take(&1), None);
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn rewatching_replaces_the_callback() {
        let mut targets = Targets::new();
        targets.insert(7, "old");
        targets.insert(7, "new");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.take(&7), Some("new"));
    }

    #[test]
    fn unknown_target_is_ignored() {
        let mut targets: Targets<u32, &str> = Targets::new();
        assert_eq!(targets.take(&3), None);
    }
}
