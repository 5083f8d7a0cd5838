use std::cell::RefCell;
use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{try_iter, Array};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::analytics::{track_event, ButtonClick};
use crate::components::notification::{use_notifier, Severity};
use crate::config;

/// Field name to submitted value, in name order.
pub type Submission = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Submit,
    /// The simulated request delay has elapsed.
    Complete,
}

/// Side effect the component has to run after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    StartDelay,
    /// Reset the fields and show the success toast.
    Finish,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => config::CONTACT_SUBMIT_LABEL,
            SubmitState::Submitting => config::CONTACT_SUBMITTING_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        self == SubmitState::Submitting
    }

    pub fn step(self, action: SubmitAction) -> (SubmitState, Option<SubmitEffect>) {
        match (self, action) {
            (SubmitState::Idle, SubmitAction::Submit) => {
                (SubmitState::Submitting, Some(SubmitEffect::StartDelay))
            }
            (SubmitState::Submitting, SubmitAction::Complete) => {
                (SubmitState::Idle, Some(SubmitEffect::Finish))
            }
            (state, _) => (state, None),
        }
    }
}

/// Every form entry keyed by name. Non-text values such as files are kept
/// as empty strings and a repeated name keeps its last value.
pub fn submission_from_entries<I>(entries: I) -> Submission
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name, value.unwrap_or_default()))
        .collect()
}

fn read_form(form: &HtmlFormElement) -> Submission {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Could not read contact form: {:?}", e);
            return Submission::new();
        }
    };
    let entries = match try_iter(&data) {
        Ok(Some(entries)) => entries,
        _ => {
            log::warn!("Contact form data is not iterable");
            return Submission::new();
        }
    };
    submission_from_entries(entries.filter_map(Result::ok).filter_map(|entry| {
        let pair = Array::from(&entry);
        let name = pair.get(0).as_string()?;
        Some((name, pair.get(1).as_string()))
    }))
}

fn advance(phase: &RefCell<SubmitState>, action: SubmitAction) -> (SubmitState, Option<SubmitEffect>) {
    let (next, effect) = phase.borrow().step(action);
    *phase.borrow_mut() = next;
    (next, effect)
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    // `phase` is what the async completion reads; `state` drives rendering
    let phase = use_mut_ref(|| SubmitState::Idle);
    let state = use_state_eq(|| SubmitState::Idle);
    let notifier = use_notifier();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let (next, effect) = advance(&phase, SubmitAction::Submit);
            if effect != Some(SubmitEffect::StartDelay) {
                return;
            }

            let submission = read_form(&form);
            match serde_json::to_string(&submission) {
                Ok(json) => log::debug!("Contact form submitted: {}", json),
                Err(e) => log::debug!("Contact form submitted (unserializable): {}", e),
            }
            state.set(next);

            // There is no mail backend yet; the delay stands in for the request.
            let phase = phase.clone();
            let state = state.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                let (next, effect) = advance(&phase, SubmitAction::Complete);
                if effect == Some(SubmitEffect::Finish) {
                    form.reset();
                    match &notifier {
                        Some(notifier) => {
                            notifier.notify(config::CONTACT_SUCCESS_MESSAGE, Severity::Success)
                        }
                        None => log::warn!("No notifier available for contact confirmation"),
                    }
                }
                state.set(next);
            });
        })
    };

    let label = state.label();
    let onclick = Callback::from(move |_: MouseEvent| {
        track_event("button_click", ButtonClick::new(label, None));
    });

    html! {
        <form id="contact-form" class="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-group">
                <input type="text" name="name" placeholder="Nombre completo" required=true />
            </div>
            <div class="form-group">
                <input type="email" name="email" placeholder="Correo electrónico" required=true />
            </div>
            <div class="form-group">
                <input type="tel" name="phone" placeholder="Teléfono" />
            </div>
            <div class="form-group">
                <select name="service">
                    <option value="">{"Selecciona un servicio"}</option>
                    <option value="consultoria">{"Consultoría"}</option>
                    <option value="diseno">{"Diseño"}</option>
                    <option value="desarrollo">{"Desarrollo"}</option>
                </select>
            </div>
            <div class="form-group">
                <textarea name="message" rows="5" placeholder="Tu mensaje" required=true></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled={state.disabled()} {onclick}>
                { label }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitting_disables_and_relabels() {
        assert_eq!(SubmitState::Idle.label(), "Enviar Mensaje");
        assert!(!SubmitState::Idle.disabled());
        assert_eq!(SubmitState::Submitting.label(), "Enviando...");
        assert!(SubmitState::Submitting.disabled());
    }

    #[test]
    fn submission_runs_delay_then_finishes() {
        let (state, effect) = SubmitState::Idle.step(SubmitAction::Submit);
        assert_eq!(state, SubmitState::Submitting);
        assert!(state.disabled());
        assert_eq!(effect, Some(SubmitEffect::StartDelay));

        let (state, effect) = state.step(SubmitAction::Complete);
        assert_eq!(state, SubmitState::Idle);
        assert!(!state.disabled());
        assert_eq!(state.label(), config::CONTACT_SUBMIT_LABEL);
        assert_eq!(effect, Some(SubmitEffect::Finish));
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let (state, _) = SubmitState::Idle.step(SubmitAction::Submit);
        assert_eq!(state.step(SubmitAction::Submit), (SubmitState::Submitting, None));
    }

    #[test]
    fn one_confirmation_per_submission() {
        let actions = [
            SubmitAction::Submit,
            SubmitAction::Submit,
            SubmitAction::Complete,
            SubmitAction::Complete,
            SubmitAction::Submit,
            SubmitAction::Complete,
        ];
        let mut state = SubmitState::Idle;
        let mut delays = 0;
        let mut finishes = 0;
        for action in actions {
            let (next, effect) = state.step(action);
            match effect {
                Some(SubmitEffect::StartDelay) => delays += 1,
                Some(SubmitEffect::Finish) => finishes += 1,
                None => {}
            }
            state = next;
        }
        assert_eq!(delays, 2);
        assert_eq!(finishes, 2);
        assert_eq!(state, SubmitState::Idle);
    }

    #[test]
    fn completion_without_a_submission_does_nothing() {
        assert_eq!(SubmitState::Idle.step(SubmitAction::Complete), (SubmitState::Idle, None));
    }

    #[test]
    fn advance_updates_the_shared_phase() {
        let phase = RefCell::new(SubmitState::Idle);
        advance(&phase, SubmitAction::Submit);
        assert_eq!(*phase.borrow(), SubmitState::Submitting);
        advance(&phase, SubmitAction::Complete);
        assert_eq!(*phase.borrow(), SubmitState::Idle);
    }

    #[test]
    fn every_entry_is_collected() {
        let submission = submission_from_entries(vec![
            ("name".to_string(), Some("Ana".to_string())),
            ("email".to_string(), Some("ana@example.com".to_string())),
            ("company".to_string(), Some("Aurora".to_string())),
            ("attachment".to_string(), None),
            ("name".to_string(), Some("Ana María".to_string())),
        ]);
        assert_eq!(submission.len(), 4);
        assert_eq!(submission["name"], "Ana María");
        assert_eq!(submission["company"], "Aurora");
        assert_eq!(submission["attachment"], "");
    }

    #[test]
    fn success_message_is_the_confirmation_text() {
        assert_eq!(config::CONTACT_SUCCESS_MESSAGE, "¡Mensaje enviado exitosamente!");
    }
}
