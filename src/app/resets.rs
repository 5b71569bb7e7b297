use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Borra todo el progreso: estado a cero, todas las marcas visuales
    /// fuera, indicadores repintados y vuelta al primer panel. Es el único
    /// camino por el que `done`, `correct` o `answered` pueden encoger.
    pub fn reset_all(&mut self) {
        self.state = ProgressState::default();
        self.save_state();
        self.surface.clear_marks();
        self.update_checklist();
        self.update_progress();
        self.go_to(0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::controller;
    use crate::model::ProgressState;
    use crate::storage::StateStore;
    use crate::surface::Pane;

    #[test]
    fn reset_returns_to_fresh_default() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 0, true);
        ctrl.check(1, 0, false);
        for idx in 0..8 {
            ctrl.toggle_check(idx);
        }
        ctrl.go_to(3);
        ctrl.finish();

        ctrl.reset_all();
        assert_eq!(ctrl.state(), &ProgressState::default());
        assert_eq!(ctrl.state().current, 0);
        assert_eq!(ctrl.surface().active_pane, Some(Pane::Lesson(0)));
        assert_eq!(ctrl.surface().lessons_meter, (0, 5));
        assert_eq!(ctrl.surface().checklist_meter, (0, 8));
    }

    #[test]
    fn reset_strips_visual_marks() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 0, false);
        ctrl.toggle_check(2);
        ctrl.reset_all();
        let surface = ctrl.surface();
        assert!(surface.nav_done.is_empty());
        assert!(surface.disabled_quizzes.is_empty());
        assert!(surface.choice_marks.is_empty());
        assert!(surface.answer_highlights.is_empty());
        assert!(surface.feedback.is_empty());
        assert!(surface.checked_items.is_empty());
        assert_eq!(surface.clears, 1);
    }

    #[test]
    fn reset_persists_the_cleared_record() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 0, true);
        ctrl.reset_all();
        let saved = ctrl.store().load("csm-test").unwrap();
        let state: ProgressState = serde_json::from_str(&saved).unwrap();
        assert_eq!(state, ProgressState::default());
    }

    #[test]
    fn quiz_can_be_answered_again_after_reset() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.check(0, 0, false);
        ctrl.reset_all();
        ctrl.check(0, 1, true);
        assert!(ctrl.state().correct.contains(&0));
    }
}
