//! Superficie de presentación: todo lo que el controlador hace sobre la
//! página pasa por este trait, siempre por índice y nunca por marcado
//! concreto. La implementación DOM vive en `web::dom`; `HeadlessSurface`
//! registra las llamadas y sirve para tests o para incrustar el controlador
//! fuera del navegador.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Lesson(usize),
    /// El panel final implícito (índice `total`).
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meter {
    Lessons,
    Checklist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
    Correct,
    Wrong,
    /// Resalta la opción correcta tras un fallo, sin tocar el estado.
    RevealCorrect,
}

pub trait Surface {
    /// Desactiva todos los paneles y marcadores de navegación.
    fn deactivate_all(&mut self);
    fn activate_pane(&mut self, pane: Pane);
    fn set_nav_active(&mut self, index: usize);
    fn mark_nav_done(&mut self, index: usize);
    fn set_title(&mut self, title: &str);
    fn set_nav_enabled(&mut self, button: NavButton, enabled: bool);
    /// Fracción textual + relleno proporcional de un indicador.
    fn render_meter(&mut self, meter: Meter, numerator: usize, denominator: usize);
    fn scroll_to_top(&mut self);
    /// Bloquea todas las opciones de la pregunta (visual e interactivamente).
    fn disable_quiz(&mut self, quiz: usize);
    /// Marca la opción elegida por el alumno.
    fn mark_choice(&mut self, quiz: usize, option: usize, mark: ChoiceMark);
    /// Aplica la marca a la opción correcta, sea cual sea; la superficie es
    /// quien sabe cuál es.
    fn highlight_answer(&mut self, quiz: usize, mark: ChoiceMark);
    fn show_feedback(&mut self, quiz: usize, tone: Tone, text: &str);
    fn set_check_item(&mut self, index: usize, checked: bool);
    /// Resultados finales: nota del quiz y del checklist del lab.
    fn show_scores(&mut self, quiz_score: &str, lab_score: &str);
    /// Quita todas las marcas visuales (done/correct/wrong/reveal/disabled,
    /// feedback y checks). Lo usa el reset completo.
    fn clear_marks(&mut self);
}

/// Superficie sin DOM: guarda lo último que se pintó para poder afirmarlo.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub active_pane: Option<Pane>,
    pub active_nav: Option<usize>,
    pub nav_done: BTreeSet<usize>,
    pub title: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub lessons_meter: (usize, usize),
    pub checklist_meter: (usize, usize),
    pub scrolls: usize,
    pub disabled_quizzes: BTreeSet<usize>,
    pub choice_marks: Vec<(usize, usize, ChoiceMark)>,
    pub answer_highlights: Vec<(usize, ChoiceMark)>,
    pub feedback: Vec<(usize, Tone, String)>,
    pub checked_items: BTreeSet<usize>,
    pub scores: Option<(String, String)>,
    pub clears: usize,
}

impl Surface for HeadlessSurface {
    fn deactivate_all(&mut self) {
        self.active_pane = None;
        self.active_nav = None;
    }

    fn activate_pane(&mut self, pane: Pane) {
        self.active_pane = Some(pane);
    }

    fn set_nav_active(&mut self, index: usize) {
        self.active_nav = Some(index);
    }

    fn mark_nav_done(&mut self, index: usize) {
        self.nav_done.insert(index);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_nav_enabled(&mut self, button: NavButton, enabled: bool) {
        match button {
            NavButton::Prev => self.prev_enabled = enabled,
            NavButton::Next => self.next_enabled = enabled,
        }
    }

    fn render_meter(&mut self, meter: Meter, numerator: usize, denominator: usize) {
        match meter {
            Meter::Lessons => self.lessons_meter = (numerator, denominator),
            Meter::Checklist => self.checklist_meter = (numerator, denominator),
        }
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn disable_quiz(&mut self, quiz: usize) {
        self.disabled_quizzes.insert(quiz);
    }

    fn mark_choice(&mut self, quiz: usize, option: usize, mark: ChoiceMark) {
        self.choice_marks.push((quiz, option, mark));
    }

    fn highlight_answer(&mut self, quiz: usize, mark: ChoiceMark) {
        self.answer_highlights.push((quiz, mark));
    }

    fn show_feedback(&mut self, quiz: usize, tone: Tone, text: &str) {
        self.feedback.push((quiz, tone, text.to_owned()));
    }

    fn set_check_item(&mut self, index: usize, checked: bool) {
        if checked {
            self.checked_items.insert(index);
        } else {
            self.checked_items.remove(&index);
        }
    }

    fn show_scores(&mut self, quiz_score: &str, lab_score: &str) {
        self.scores = Some((quiz_score.to_owned(), lab_score.to_owned()));
    }

    fn clear_marks(&mut self) {
        self.nav_done.clear();
        self.disabled_quizzes.clear();
        self.choice_marks.clear();
        self.answer_highlights.clear();
        self.feedback.clear();
        self.checked_items.clear();
        self.clears += 1;
    }
}
