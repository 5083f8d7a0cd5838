use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::{self, HeaderState, HeaderTracker};

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("inicio", "Inicio"),
    ("servicios", "Servicios"),
    ("galeria", "Galería"),
    ("nosotros", "Nosotros"),
    ("contacto", "Contacto"),
];

/// Mobile menu. The toggle's and the menu's `active` classes and the body
/// scroll lock are all rendered from this one flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum MenuAction {
    Toggle,
    LinkClicked,
    ClickedOutside,
    Resized(f64),
    Escape,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::LinkClicked | MenuAction::ClickedOutside | MenuAction::Escape => false,
            MenuAction::Resized(width) if width > config::MOBILE_BREAKPOINT => false,
            MenuAction::Resized(_) => self.open,
        };
        Self { open }
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.body_scroll_locked() {
            "hidden"
        } else {
            "auto"
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::debug!("Could not set body overflow: {:?}", e);
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let header_state = use_state_eq(HeaderState::default);
    let active_section = use_state_eq(|| None::<String>);
    let tracker = use_mut_ref(HeaderTracker::default);

    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Header styling and active link, re-evaluated on every scroll event
    {
        let header_state = header_state.setter();
        let active_section = active_section.setter();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let on_scroll = Closure::wrap(Box::new(move || {
                    let offset = scroll::current_offset();
                    header_state.set(tracker.borrow_mut().observe(offset));
                    let sections = scroll::collect_sections();
                    active_section.set(scroll::active_section(&sections, offset).map(str::to_string));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not listen for scroll events: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Clicks landing outside both the toggle and the menu close it
    {
        let dispatcher = menu.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = |node: &NodeRef| {
                        node.get().map_or(false, |n| n.contains(Some(&target)))
                    };
                    if !inside(&toggle_ref) && !inside(&menu_ref) {
                        dispatcher.dispatch(MenuAction::ClickedOutside);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not listen for document clicks: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            on_click.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("resize", move |_: Event| {
            let width = window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                dispatcher.dispatch(MenuAction::Resized(width));
            }
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(MenuAction::Escape);
            }
        });
    }

    use_effect_with_deps(
        move |menu: &MenuState| {
            set_body_overflow(menu.body_overflow());
            || ()
        },
        *menu,
    );

    let toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let navigate = |fragment: &'static str| {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(MenuAction::LinkClicked);
            scroll::scroll_to_section(fragment);
        })
    };

    let open = menu.open;

    html! {
        <header class="header" style={header_state.style()}>
            <nav class="navbar">
                <div class="nav-container">
                    <a class="nav-logo" href="#inicio" onclick={navigate("#inicio")}>
                        { config::SITE_NAME }
                    </a>
                    <ul ref={menu_ref} class={classes!("nav-menu", open.then_some("active"))}>
                        { for NAV_ITEMS.iter().map(|(id, label)| {
                            let is_active = active_section.as_deref() == Some(*id);
                            html! {
                                <li>
                                    <a
                                        href={format!("#{}", id)}
                                        class={classes!("nav-link", is_active.then_some("active"))}
                                        onclick={navigate(*id)}
                                    >
                                        { *label }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                    <button
                        ref={toggle_ref}
                        class={classes!("nav-toggle", open.then_some("active"))}
                        aria-label="Menú"
                        aria-expanded={open.to_string()}
                        onclick={toggle}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[MenuAction]) -> Vec<MenuState> {
        let mut state = MenuState::default();
        actions
            .iter()
            .map(|action| {
                state = state.apply(*action);
                state
            })
            .collect()
    }

    #[test]
    fn toggle_flips_the_menu() {
        let states = run(&[MenuAction::Toggle, MenuAction::Toggle]);
        assert!(states[0].open);
        assert!(!states[1].open);
    }

    #[test]
    fn every_close_trigger_closes() {
        for close in [
            MenuAction::LinkClicked,
            MenuAction::ClickedOutside,
            MenuAction::Escape,
            MenuAction::Resized(1024.0),
        ] {
            let states = run(&[MenuAction::Toggle, close]);
            assert!(!states[1].open, "{:?} should close the menu", close);
        }
    }

    #[test]
    fn narrow_resize_keeps_menu_open() {
        let states = run(&[MenuAction::Toggle, MenuAction::Resized(768.0), MenuAction::Resized(500.0)]);
        assert!(states[1].open);
        assert!(states[2].open);
    }

    #[test]
    fn scroll_lock_tracks_open_flag() {
        let states = run(&[
            MenuAction::Toggle,
            MenuAction::Resized(400.0),
            MenuAction::Escape,
            MenuAction::Escape,
            MenuAction::Toggle,
            MenuAction::ClickedOutside,
            MenuAction::Toggle,
            MenuAction::LinkClicked,
            MenuAction::Toggle,
            MenuAction::Resized(1200.0),
        ]);
        for state in states {
            assert_eq!(state.open, state.body_scroll_locked());
            assert_eq!(state.body_overflow(), if state.open { "hidden" } else { "auto" });
        }
    }

    #[test]
    fn unchanged_state_is_not_replaced() {
        let closed = Rc::new(MenuState::default());
        let same = closed.clone().reduce(MenuAction::Escape);
        assert!(Rc::ptr_eq(&closed, &same));
    }
}
