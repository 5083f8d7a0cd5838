use chrono::{DateTime, Utc};
use serde::Serialize;

/// Event as it would be sent to an analytics backend. There is no backend
/// yet, so `track_event` only writes it to the browser console.
#[derive(Serialize)]
pub struct TrackedEvent<'a, T: Serialize> {
    pub name: &'a str,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<'a, T: Serialize> TrackedEvent<'a, T> {
    pub fn new(name: &'a str, data: T) -> Self {
        Self {
            name,
            data,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ButtonClick {
    pub button_text: String,
    pub button_href: String,
}

impl ButtonClick {
    pub fn new(text: &str, href: Option<&str>) -> Self {
        Self {
            button_text: text.to_string(),
            button_href: href
                .filter(|href| !href.is_empty())
                .unwrap_or("no-href")
                .to_string(),
        }
    }
}

pub fn track_event<T: Serialize>(name: &str, data: T) {
    let event = TrackedEvent::new(name, data);
    match serde_wasm_bindgen::to_value(&event) {
        Ok(value) => gloo_console::log!("Event tracked:", name, value),
        Err(e) => log::warn!("Could not serialize event {}: {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_href_is_reported_as_no_href() {
        assert_eq!(ButtonClick::new("Contactar", None).button_href, "no-href");
        assert_eq!(ButtonClick::new("Contactar", Some("")).button_href, "no-href");
        assert_eq!(
            ButtonClick::new("Ver servicios", Some("#servicios")).button_href,
            "#servicios"
        );
    }

    #[test]
    fn event_serializes_name_and_payload() {
        let event = TrackedEvent::new("button_click", ButtonClick::new("Agendar", None));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["name"], "button_click");
        assert_eq!(
            value["data"],
            json!({ "button_text": "Agendar", "button_href": "no-href" })
        );
        assert!(value["timestamp"].is_string());
    }
}
