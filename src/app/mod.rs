use crate::model::{ConfigError, PageConfig, ProgressState};
use crate::storage::StateStore;
use crate::surface::{ChoiceMark, Meter, NavButton, Pane, Surface, Tone};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;

/// Controlador de progreso de una página del curso.
///
/// Es el único dueño del estado: cada mutación termina en un ciclo
/// persistir-y-repintar, así que ningún cambio es observable sin quedar
/// también guardado. Se construye explícitamente (nada de estado de módulo),
/// de modo que pueden convivir varias instancias independientes.
pub struct PageController<S: Surface, P: StateStore> {
    cfg: PageConfig,
    state: ProgressState,
    surface: S,
    store: P,
}

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Valida la configuración, carga el progreso guardado (si lo hay y es
    /// legible) y lo vuelca entero sobre la superficie, acabando en el panel
    /// donde se quedó el alumno.
    pub fn new(cfg: PageConfig, surface: S, store: P) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut ctrl = Self {
            cfg,
            state: ProgressState::default(),
            surface,
            store,
        };
        ctrl.state = ctrl.load_state();
        ctrl.restore();
        Ok(ctrl)
    }

    fn load_state(&self) -> ProgressState {
        let raw = match self.store.load(&self.cfg.storage_key) {
            Some(raw) => raw,
            None => return ProgressState::default(),
        };
        let mut state: ProgressState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("registro guardado ilegible ({e}); se empieza de cero");
                return ProgressState::default();
            }
        };
        // Un registro escrito bajo otra forma de página no puede sacar
        // `current` del rango [0, total].
        state.current = state.current.min(self.cfg.total);
        state
    }

    pub(crate) fn save_state(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(json) => self.store.save(&self.cfg.storage_key, &json),
            Err(e) => log::warn!("no se pudo serializar el progreso: {e}"),
        }
    }

    /// Reaplica el estado persistido sobre la superficie, como al recargar
    /// la página: marcadores done, preguntas ya respondidas bloqueadas con su
    /// feedback, checks marcados, indicadores y navegación al panel actual.
    fn restore(&mut self) {
        for n in 0..=self.cfg.total {
            if self.state.done.contains(&n) {
                self.surface.mark_nav_done(n);
            }
        }
        for idx in 0..self.cfg.quiz_count {
            if !self.state.answered.contains(&idx) {
                continue;
            }
            self.surface.disable_quiz(idx);
            if self.state.correct.contains(&idx) {
                self.surface.highlight_answer(idx, ChoiceMark::Correct);
                if let Some(fb) = self.cfg.feedback.get(&idx) {
                    let text = format!("✓ {}", fb.good);
                    self.surface.show_feedback(idx, Tone::Good, &text);
                }
            } else {
                self.surface.highlight_answer(idx, ChoiceMark::RevealCorrect);
                if let Some(fb) = self.cfg.feedback.get(&idx) {
                    let text = format!("✗ {}", fb.bad);
                    self.surface.show_feedback(idx, Tone::Bad, &text);
                }
            }
        }
        for idx in 0..self.cfg.check_total {
            if self.state.is_checked(idx) {
                self.surface.set_check_item(idx, true);
            }
        }
        self.update_checklist();
        self.update_progress();
        let current = self.state.current;
        self.go_to(current);
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::model::Feedback;
    use crate::storage::MemoryStore;
    use crate::surface::HeadlessSurface;

    pub fn cfg(total: usize, quiz_count: usize, check_total: usize) -> PageConfig {
        PageConfig {
            storage_key: "csm-test".into(),
            total,
            quiz_count,
            check_total,
            titles: (0..total).map(|i| format!("Lección {i}")).collect(),
            feedback: (0..quiz_count)
                .map(|i| {
                    (
                        i,
                        Feedback {
                            good: format!("bien {i}"),
                            bad: format!("mal {i}"),
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn controller(
        total: usize,
        quiz_count: usize,
        check_total: usize,
    ) -> PageController<HeadlessSurface, MemoryStore> {
        PageController::new(
            cfg(total, quiz_count, check_total),
            HeadlessSurface::default(),
            MemoryStore::new(),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{cfg, controller};
    use super::*;
    use crate::storage::MemoryStore;
    use crate::surface::HeadlessSurface;

    fn reload(
        ctrl: PageController<HeadlessSurface, MemoryStore>,
    ) -> PageController<HeadlessSurface, MemoryStore> {
        let store = ctrl.store().clone();
        PageController::new(ctrl.config().clone(), HeadlessSurface::default(), store).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut bad = cfg(3, 0, 0);
        bad.storage_key.clear();
        let err = PageController::new(bad, HeadlessSurface::default(), MemoryStore::new());
        assert!(err.is_err());
    }

    #[test]
    fn fresh_store_starts_at_pane_zero() {
        let ctrl = controller(5, 4, 8);
        assert_eq!(ctrl.state().current, 0);
        assert_eq!(ctrl.state(), &ProgressState::default());
        assert_eq!(ctrl.surface().title, "Lección 0");
    }

    #[test]
    fn persist_then_reload_reproduces_state() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 1, true);
        ctrl.check(1, 0, false);
        ctrl.toggle_check(2);
        ctrl.go_to(3);
        let expected = ctrl.state().clone();

        let again = reload(ctrl);
        assert_eq!(again.state(), &expected);
    }

    #[test]
    fn corrupt_record_loads_as_default() {
        let mut store = MemoryStore::new();
        store.save("csm-test", "### esto no es JSON ###");
        let ctrl =
            PageController::new(cfg(5, 4, 8), HeadlessSurface::default(), store).unwrap();
        assert_eq!(ctrl.state(), &ProgressState::default());
    }

    #[test]
    fn out_of_range_current_is_clamped_on_load() {
        let mut store = MemoryStore::new();
        store.save("csm-test", r#"{"current":99}"#);
        let ctrl =
            PageController::new(cfg(5, 4, 8), HeadlessSurface::default(), store).unwrap();
        assert_eq!(ctrl.state().current, 5);
        assert_eq!(ctrl.surface().active_pane, Some(Pane::Complete));
    }

    #[test]
    fn restore_replays_answered_quizzes() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 1, true);
        ctrl.check(2, 0, false);

        let again = reload(ctrl);
        let surface = again.surface();
        assert!(surface.disabled_quizzes.contains(&0));
        assert!(surface.disabled_quizzes.contains(&2));
        assert!(
            surface
                .answer_highlights
                .contains(&(0, ChoiceMark::Correct))
        );
        assert!(
            surface
                .answer_highlights
                .contains(&(2, ChoiceMark::RevealCorrect))
        );
        assert!(
            surface
                .feedback
                .iter()
                .any(|(idx, tone, text)| *idx == 0 && *tone == Tone::Good && text == "✓ bien 0")
        );
        assert!(
            surface
                .feedback
                .iter()
                .any(|(idx, tone, text)| *idx == 2 && *tone == Tone::Bad && text == "✗ mal 2")
        );
    }

    #[test]
    fn restore_replays_checklist_and_position() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.toggle_check(1);
        ctrl.toggle_check(6);
        ctrl.go_to(2);

        let again = reload(ctrl);
        assert!(again.surface().checked_items.contains(&1));
        assert!(again.surface().checked_items.contains(&6));
        assert_eq!(again.surface().checklist_meter, (2, 8));
        assert_eq!(again.state().current, 2);
        assert_eq!(again.surface().active_pane, Some(Pane::Lesson(2)));
    }
}
