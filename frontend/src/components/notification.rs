use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196F3",
        }
    }

    fn class_suffix(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

// Anything unrecognised is shown as info
impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    fn on_screen(self) -> bool {
        matches!(self, Phase::Entering | Phase::Visible)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

pub enum ToastAction {
    Push { message: String, severity: Severity },
    Enter(u32),
    Settle(u32),
    Dismiss(u32),
    Remove(u32),
}

/// Every live toast in creation order. Removed toasts are simply absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

impl Toasts {
    fn advance(self: Rc<Self>, id: u32, from: &[Phase], to: Phase) -> Rc<Self> {
        let movable = self
            .items
            .iter()
            .any(|toast| toast.id == id && from.contains(&toast.phase));
        if !movable {
            return self;
        }
        let mut next = (*self).clone();
        for toast in next.items.iter_mut().filter(|toast| toast.id == id) {
            toast.phase = to;
        }
        Rc::new(next)
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { message, severity } => {
                let mut next = (*self).clone();
                next.items.push(Toast {
                    id: next.next_id,
                    message,
                    severity,
                    phase: Phase::Created,
                });
                next.next_id = next.next_id.wrapping_add(1);
                Rc::new(next)
            }
            ToastAction::Enter(id) => self.advance(id, &[Phase::Created], Phase::Entering),
            ToastAction::Settle(id) => self.advance(id, &[Phase::Entering], Phase::Visible),
            ToastAction::Dismiss(id) => self.advance(
                id,
                &[Phase::Created, Phase::Entering, Phase::Visible],
                Phase::Exiting,
            ),
            ToastAction::Remove(id) => {
                if !self.items.iter().any(|toast| toast.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.items.retain(|toast| toast.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Fire-and-forget handle for showing toasts, shared through context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<Toasts>,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::debug!("Showing {:?} notification: {}", severity, message);
        self.dispatcher.dispatch(ToastAction::Push { message, severity });
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let notifier = Notifier { dispatcher: toasts.dispatcher() };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        pointer-events: none;
                    }
                    .notification {
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
                        transition: transform 0.3s ease;
                        max-width: 300px;
                        word-wrap: break-word;
                        pointer-events: auto;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="notification-stack">
                { for toasts.items.iter().map(|toast| html! {
                    <ToastView
                        key={toast.id}
                        toast={toast.clone()}
                        dispatcher={toasts.dispatcher()}
                    />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<Toasts>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;
    let phase = props.toast.phase;

    // Timers started at creation. Dropping a Timeout cancels it, so an
    // unmounted toast never hears from them again.
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let enter = {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(config::TOAST_ENTER_DELAY_MS, move || {
                        dispatcher.dispatch(ToastAction::Enter(id));
                    })
                };
                let auto_dismiss = Timeout::new(config::TOAST_AUTO_DISMISS_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                move || {
                    drop(enter);
                    drop(auto_dismiss);
                }
            },
            id,
        );
    }

    // Timers driven by the transition currently running
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |phase| {
                let action = match phase {
                    Phase::Entering => Some(ToastAction::Settle(id)),
                    Phase::Exiting => Some(ToastAction::Remove(id)),
                    _ => None,
                };
                let pending = action.map(|action| {
                    Timeout::new(config::TOAST_TRANSITION_MS, move || {
                        dispatcher.dispatch(action);
                    })
                });
                move || drop(pending)
            },
            phase,
        );
    }

    let onclose = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let transform = if phase.on_screen() {
        "translateX(0)"
    } else {
        "translateX(calc(100% + 20px))"
    };
    let style = format!(
        "background: {}; transform: {};",
        props.toast.severity.color(),
        transform
    );

    html! {
        <div
            class={classes!("notification", format!("notification-{}", props.toast.severity.class_suffix()))}
            {style}
        >
            <div class="notification-content">
                <span class="notification-message">{ &props.toast.message }</span>
                <button class="notification-close" onclick={onclose}>{"×"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<Toasts>, action: ToastAction) -> Rc<Toasts> {
        state.reduce(action)
    }

    fn with_one(severity: Severity) -> Rc<Toasts> {
        reduce(
            Rc::new(Toasts::default()),
            ToastAction::Push { message: "hola".into(), severity },
        )
    }

    #[test]
    fn severity_colors() {
        assert_eq!(Severity::Success.color(), "#4CAF50");
        assert_eq!(Severity::Error.color(), "#f44336");
        assert_eq!(Severity::Info.color(), "#2196F3");
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::from("success"), Severity::Success);
        assert_eq!(Severity::from("error"), Severity::Error);
        assert_eq!(Severity::from("info"), Severity::Info);
        assert_eq!(Severity::from("warning"), Severity::Info);
        assert_eq!(Severity::from("").color(), "#2196F3");
    }

    #[test]
    fn lifecycle_runs_in_order() {
        let state = with_one(Severity::Success);
        assert_eq!(state.items[0].phase, Phase::Created);

        let state = reduce(state, ToastAction::Enter(0));
        assert_eq!(state.items[0].phase, Phase::Entering);
        let state = reduce(state, ToastAction::Settle(0));
        assert_eq!(state.items[0].phase, Phase::Visible);
        let state = reduce(state, ToastAction::Dismiss(0));
        assert_eq!(state.items[0].phase, Phase::Exiting);
        let state = reduce(state, ToastAction::Remove(0));
        assert!(state.items.is_empty());
    }

    #[test]
    fn double_dismiss_is_a_no_op() {
        let state = reduce(with_one(Severity::Info), ToastAction::Dismiss(0));
        let again = reduce(state.clone(), ToastAction::Dismiss(0));
        assert!(Rc::ptr_eq(&state, &again));

        let removed = reduce(again, ToastAction::Remove(0));
        let late_timer = reduce(removed.clone(), ToastAction::Dismiss(0));
        let late_remove = reduce(late_timer.clone(), ToastAction::Remove(0));
        assert!(late_remove.items.is_empty());
        assert!(Rc::ptr_eq(&removed, &late_remove));
    }

    #[test]
    fn late_enter_does_not_pull_an_exiting_toast_back() {
        let state = reduce(with_one(Severity::Info), ToastAction::Dismiss(0));
        let state = reduce(state, ToastAction::Enter(0));
        assert_eq!(state.items[0].phase, Phase::Exiting);
    }

    #[test]
    fn siblings_are_independent() {
        let state = with_one(Severity::Info);
        let state = reduce(
            state,
            ToastAction::Push { message: "adios".into(), severity: Severity::Error },
        );
        assert_eq!(state.items.len(), 2);
        assert_ne!(state.items[0].id, state.items[1].id);

        let state = reduce(state, ToastAction::Dismiss(1));
        let state = reduce(state, ToastAction::Remove(1));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].message, "hola");
        assert_eq!(state.items[0].phase, Phase::Created);
    }

    #[test]
    fn only_entering_and_visible_are_on_screen() {
        assert!(!Phase::Created.on_screen());
        assert!(Phase::Entering.on_screen());
        assert!(Phase::Visible.on_screen());
        assert!(!Phase::Exiting.on_screen());
    }
}
