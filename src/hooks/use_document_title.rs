use yew::prelude::*;

use crate::utils::APP_TITLE;

/// Fija `document.title` como "<página> - Sistema de Turnos"
#[hook]
pub fn use_document_title(page: &str) {
    use_effect_with(page.to_string(), |page| {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(&format!("{} - {}", page, APP_TITLE)),
            None => log::warn!("⚠️ Sin document, no se pudo fijar el título"),
        }
        || ()
    });
}
