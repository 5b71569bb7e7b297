//! Capa web: persistencia en `localStorage`, superficie DOM y las funciones
//! que la página invoca desde sus atributos `onclick`. Solo existe en
//! `wasm32`; el resto del crate es independiente del navegador.

mod dom;

use crate::app::PageController;
use crate::model::PageConfig;
use crate::storage::StateStore;
use dom::DomSurface;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

/// Persistencia sobre `window.localStorage`. Cualquier fallo (modo privado,
/// cuota, sin window) se traga y la sesión sigue solo en memoria.
pub struct LocalStore;

impl StateStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rechazó la escritura; el progreso no se guardará");
        }
    }
}

type WebController = PageController<DomSurface, LocalStore>;

thread_local! {
    static CONTROLLER: RefCell<Option<WebController>> = RefCell::new(None);
    // Temporizador pendiente de revertir la etiqueta "copied!". Se guarda el
    // Closure junto al handle para mantenerlo vivo hasta que dispare o se
    // cancele.
    static COPY_REVERT: RefCell<Option<(i32, Closure<dyn FnMut()>)>> = RefCell::new(None);
}

fn with_controller(f: impl FnOnce(&mut WebController)) {
    CONTROLLER.with(|slot| {
        if let Some(ctrl) = slot.borrow_mut().as_mut() {
            f(ctrl);
        }
    });
}

/// `initPage(JSON.stringify(config))` — la página lo llama una vez al cargar.
/// Una segunda llamada sustituye el controlador activo.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config_json: &str) {
    let cfg: PageConfig = match serde_json::from_str(config_json) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("configuración de página ilegible: {e}");
            return;
        }
    };
    match PageController::new(cfg, DomSurface::new(), LocalStore) {
        Ok(ctrl) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(ctrl)),
        Err(e) => log::warn!("configuración de página inválida: {e}"),
    }
}

#[wasm_bindgen(js_name = goTo)]
pub fn go_to(n: usize) {
    with_controller(|ctrl| ctrl.go_to(n));
}

#[wasm_bindgen]
pub fn next() {
    with_controller(|ctrl| ctrl.next());
}

#[wasm_bindgen]
pub fn prev() {
    with_controller(|ctrl| ctrl.prev());
}

#[wasm_bindgen]
pub fn finish() {
    with_controller(|ctrl| ctrl.finish());
}

#[wasm_bindgen(js_name = resetAll)]
pub fn reset_all() {
    with_controller(|ctrl| ctrl.reset_all());
}

/// `check(this, true, 2)` — la opción pulsada, si era la correcta y el índice
/// de la pregunta. El índice de la opción se deduce de su posición dentro del
/// grupo `.kcheck-options`.
#[wasm_bindgen]
pub fn check(option: &Element, is_correct: bool, quiz: usize) {
    let option_idx = position_in_group(option).unwrap_or(0);
    with_controller(|ctrl| ctrl.check(quiz, option_idx, is_correct));
}

#[wasm_bindgen(js_name = toggleCheck)]
pub fn toggle_check(_item: &Element, idx: usize) {
    with_controller(|ctrl| ctrl.toggle_check(idx));
}

fn position_in_group(option: &Element) -> Option<usize> {
    let group = option.closest(".kcheck-options").ok()??;
    let opts = group.query_selector_all(".kcheck-opt").ok()?;
    for i in 0..opts.length() {
        if let Some(node) = opts.get(i) {
            if option.is_same_node(Some(&node)) {
                return Some(i as usize);
            }
        }
    }
    None
}

/// Copia al portapapeles el `<pre>` del `.code-block` del botón pulsado. La
/// etiqueta muestra "copied!" durante 1,5 s y vuelve a "copy"; una copia
/// nueva cancela la reversión pendiente antes de programar la suya. No toca
/// el estado de progreso. Un fallo del portapapeles se deja pasar.
#[wasm_bindgen(js_name = copyCode)]
pub fn copy_code(button: &Element) {
    let Some(pre) = button
        .closest(".code-block")
        .ok()
        .flatten()
        .and_then(|block| block.query_selector("pre").ok().flatten())
    else {
        return;
    };
    let text = pre
        .dyn_ref::<HtmlElement>()
        .map(|el| el.inner_text())
        .unwrap_or_else(|| pre.text_content().unwrap_or_default());

    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    let button = button.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
            return;
        }
        button.set_text_content(Some("copied!"));
        schedule_label_revert(button);
    });
}

fn schedule_label_revert(button: Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    // Cancela la reversión anterior antes de programar la nueva.
    COPY_REVERT.with(|slot| {
        if let Some((handle, _)) = slot.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }
    });
    let closure = Closure::wrap(Box::new(move || {
        button.set_text_content(Some("copy"));
    }) as Box<dyn FnMut()>);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        1500,
    ) {
        Ok(handle) => COPY_REVERT.with(|slot| *slot.borrow_mut() = Some((handle, closure))),
        Err(_) => drop(closure),
    }
}
