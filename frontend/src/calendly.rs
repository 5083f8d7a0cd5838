use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Calendly, js_name = initInlineWidget)]
    fn init_inline_widget(options: JsValue);
}

const WIDGET_CLASS: &str = "calendly-inline-widget";
const WIDGET_MARKUP: &str =
    r#"<div class="calendly-inline-widget" style="min-width:320px;height:630px;"></div>"#;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CalendlyConfig {
    pub url: String,
    pub prefill: BTreeMap<String, String>,
    pub utm: BTreeMap<String, String>,
}

impl CalendlyConfig {
    pub fn from_config() -> Self {
        Self {
            url: config::CALENDLY_URL.to_string(),
            ..Self::default()
        }
    }

    fn to_options(&self, parent: &Element) -> Result<JsValue, JsValue> {
        // Plain objects rather than JS Maps for prefill and utm
        let options = self.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        Reflect::set(&options, &JsValue::from_str("parentElement"), parent)?;
        Ok(options)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendlyStatus {
    Loaded,
    /// `window.Calendly` is not defined, the widget script was never loaded.
    ScriptMissing,
    NoContainer,
    Failed,
}

fn calendly_present() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("Calendly")).unwrap_or(false))
        .unwrap_or(false)
}

/// Replaces the placeholder inside `container` with Calendly's inline widget.
/// Does nothing unless the Calendly script has already been loaded.
pub fn load_calendly(container: Option<Element>, calendly: &CalendlyConfig) -> CalendlyStatus {
    let Some(container) = container else {
        return CalendlyStatus::NoContainer;
    };
    if !calendly_present() {
        return CalendlyStatus::ScriptMissing;
    }

    container.set_inner_html(WIDGET_MARKUP);
    let parent = match container.query_selector(&format!(".{}", WIDGET_CLASS)) {
        Ok(Some(parent)) => parent,
        _ => return CalendlyStatus::Failed,
    };
    match calendly.to_options(&parent) {
        Ok(options) => {
            init_inline_widget(options);
            log::info!("Calendly widget initialized");
            CalendlyStatus::Loaded
        }
        Err(e) => {
            log::warn!("Could not build Calendly options: {:?}", e);
            CalendlyStatus::Failed
        }
    }
}

/// Scheduling placeholder. The real widget only loads when enabled in
/// `config`.
#[function_component(CalendlyEmbed)]
pub fn calendly_embed() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                if config::CALENDLY_ENABLED {
                    let status = load_calendly(container.cast::<Element>(), &CalendlyConfig::from_config());
                    log::debug!("Calendly load status: {:?}", status);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="calendly-container" ref={container}>
            <div class="calendly-placeholder">
                <h3>{"Agenda una cita"}</h3>
                <p>{"Muy pronto podrás reservar directamente desde aquí. Mientras tanto, escríbenos con el formulario de contacto."}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_serializes_with_empty_prefill_and_utm() {
        let value = serde_json::to_value(CalendlyConfig::from_config()).unwrap();
        assert_eq!(
            value,
            json!({ "url": "YOUR_CALENDLY_URL_HERE", "prefill": {}, "utm": {} })
        );
    }

    #[test]
    fn missing_container_is_reported() {
        assert_eq!(
            load_calendly(None, &CalendlyConfig::default()),
            CalendlyStatus::NoContainer
        );
    }

    #[test]
    fn widget_markup_carries_the_widget_class() {
        assert!(WIDGET_MARKUP.contains(WIDGET_CLASS));
        assert!(WIDGET_MARKUP.contains("min-width:320px;height:630px;"));
    }
}
