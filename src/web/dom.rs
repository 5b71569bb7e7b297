//! Superficie DOM real. Localiza los elementos por la convención de la
//! página (`#pane-N`, `.nav-item`, `#fb-N`, ...) y tolera que falte
//! cualquiera de ellos: la operación sobre un elemento ausente simplemente
//! se salta.

use crate::surface::{ChoiceMark, Meter, NavButton, Pane, Surface, Tone};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

pub struct DomSurface;

impl DomSurface {
    pub fn new() -> Self {
        DomSurface
    }
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn for_each(selector: &str, mut f: impl FnMut(&Element)) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(&el);
        }
    }
}

fn nth(selector: &str, index: usize) -> Option<Element> {
    let list = document()?.query_selector_all(selector).ok()?;
    list.get(index as u32)?.dyn_into::<Element>().ok()
}

fn set_text(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

fn set_fill_width(id: &str, numerator: usize, denominator: usize) {
    let Some(el) = by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let pct = if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    };
    let _ = el.style().set_property("width", &format!("{pct}%"));
}

fn mark_class(mark: ChoiceMark) -> &'static str {
    match mark {
        ChoiceMark::Correct => "correct",
        ChoiceMark::Wrong => "wrong",
        ChoiceMark::RevealCorrect => "reveal-correct",
    }
}

/// La opción correcta es la que lleva `check(this, true, …)` en su `onclick`.
fn is_correct_option(el: &Element) -> bool {
    el.get_attribute("onclick")
        .map(|js| js.contains("true"))
        .unwrap_or(false)
}

fn for_each_option(quiz: usize, mut f: impl FnMut(&Element)) {
    let Some(pane) = by_id(&format!("pane-{quiz}")) else {
        return;
    };
    let Ok(list) = pane.query_selector_all(".kcheck-opt") else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(&el);
        }
    }
}

impl Surface for DomSurface {
    fn deactivate_all(&mut self) {
        for_each(".lesson-pane", |el| remove_class(el, "active"));
        for_each(".nav-item", |el| remove_class(el, "active"));
    }

    fn activate_pane(&mut self, pane: Pane) {
        let id = match pane {
            Pane::Lesson(n) => format!("pane-{n}"),
            Pane::Complete => "pane-complete".to_owned(),
        };
        if let Some(el) = by_id(&id) {
            add_class(&el, "active");
        }
    }

    fn set_nav_active(&mut self, index: usize) {
        if let Some(el) = nth(".nav-item", index) {
            add_class(&el, "active");
        }
    }

    fn mark_nav_done(&mut self, index: usize) {
        if let Some(el) = nth(".nav-item", index) {
            add_class(&el, "done");
        }
    }

    fn set_title(&mut self, title: &str) {
        set_text("topbar-title", title);
    }

    fn set_nav_enabled(&mut self, button: NavButton, enabled: bool) {
        let id = match button {
            NavButton::Prev => "btn-prev",
            NavButton::Next => "btn-next",
        };
        if let Some(btn) = by_id(id).and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()) {
            btn.set_disabled(!enabled);
        }
    }

    fn render_meter(&mut self, meter: Meter, numerator: usize, denominator: usize) {
        let (label_id, fill_id) = match meter {
            Meter::Lessons => ("progress-pct", "progress-fill"),
            Meter::Checklist => ("cl-label", "cl-fill"),
        };
        set_text(label_id, &format!("{numerator} / {denominator}"));
        set_fill_width(fill_id, numerator, denominator);
    }

    fn scroll_to_top(&mut self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn disable_quiz(&mut self, quiz: usize) {
        for_each_option(quiz, |el| {
            add_class(el, "disabled");
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("pointer-events", "none");
            }
        });
    }

    fn mark_choice(&mut self, quiz: usize, option: usize, mark: ChoiceMark) {
        let Some(pane) = by_id(&format!("pane-{quiz}")) else {
            return;
        };
        let Ok(list) = pane.query_selector_all(".kcheck-opt") else {
            return;
        };
        if let Some(el) = list
            .get(option as u32)
            .and_then(|n| n.dyn_into::<Element>().ok())
        {
            add_class(&el, mark_class(mark));
        }
    }

    fn highlight_answer(&mut self, quiz: usize, mark: ChoiceMark) {
        for_each_option(quiz, |el| {
            if is_correct_option(el) {
                add_class(el, mark_class(mark));
            }
        });
    }

    fn show_feedback(&mut self, quiz: usize, tone: Tone, text: &str) {
        let Some(el) = by_id(&format!("fb-{quiz}")) else {
            return;
        };
        let tone_class = match tone {
            Tone::Good => "good",
            Tone::Bad => "bad",
        };
        el.set_class_name(&format!("kcheck-feedback show {tone_class}"));
        el.set_text_content(Some(text));
    }

    fn set_check_item(&mut self, index: usize, checked: bool) {
        if let Some(el) = nth(".check-item", index) {
            let _ = el.class_list().toggle_with_force("checked", checked);
        }
    }

    fn show_scores(&mut self, quiz_score: &str, lab_score: &str) {
        set_text("score-val", quiz_score);
        set_text("lab-score-val", lab_score);
    }

    fn clear_marks(&mut self) {
        for_each(".nav-item", |el| remove_class(el, "done"));
        for_each(".kcheck-opt", |el| {
            for class in ["correct", "wrong", "reveal-correct", "disabled"] {
                remove_class(el, class);
            }
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().remove_property("pointer-events");
            }
        });
        for_each(".kcheck-feedback", |el| {
            el.set_class_name("kcheck-feedback");
            el.set_text_content(Some(""));
        });
        for_each(".check-item", |el| remove_class(el, "checked"));
    }
}
