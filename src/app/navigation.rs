use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Navega al panel `n`; el índice `total` es el panel final "Complete".
    /// Entradas fuera de rango se recortan para mantener el invariante.
    pub fn go_to(&mut self, n: usize) {
        let n = n.min(self.cfg.total);
        self.surface.deactivate_all();
        self.state.current = n;

        let pane = if n == self.cfg.total {
            Pane::Complete
        } else {
            Pane::Lesson(n)
        };
        self.surface.activate_pane(pane);
        self.surface.set_nav_active(n);

        let title = self
            .cfg
            .titles
            .get(n)
            .map(String::as_str)
            .unwrap_or("Complete");
        self.surface.set_title(title);

        self.surface.set_nav_enabled(NavButton::Prev, n != 0);
        self.surface
            .set_nav_enabled(NavButton::Next, n + 1 < self.cfg.total);
        self.surface.scroll_to_top();

        self.save_state();
        self.update_progress();
    }

    /// Avanza un panel; en el último no hace nada.
    pub fn next(&mut self) {
        if self.state.current + 1 < self.cfg.total {
            self.go_to(self.state.current + 1);
        }
    }

    /// Retrocede un panel; en el primero no hace nada.
    pub fn prev(&mut self) {
        if self.state.current > 0 {
            self.go_to(self.state.current - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::controller;
    use crate::storage::StateStore;
    use crate::surface::Pane;

    #[test]
    fn go_to_updates_pane_title_and_buttons() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.go_to(2);
        assert_eq!(ctrl.state().current, 2);
        assert_eq!(ctrl.surface().active_pane, Some(Pane::Lesson(2)));
        assert_eq!(ctrl.surface().active_nav, Some(2));
        assert_eq!(ctrl.surface().title, "Lección 2");
        assert!(ctrl.surface().prev_enabled);
        assert!(ctrl.surface().next_enabled);
    }

    #[test]
    fn prev_disabled_on_first_pane() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.go_to(0);
        assert!(!ctrl.surface().prev_enabled);
        assert!(ctrl.surface().next_enabled);
    }

    #[test]
    fn next_disabled_from_last_lesson_onwards() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.go_to(4);
        assert!(!ctrl.surface().next_enabled);
        ctrl.go_to(5); // panel Complete
        assert!(!ctrl.surface().next_enabled);
        assert_eq!(ctrl.surface().active_pane, Some(Pane::Complete));
        assert_eq!(ctrl.surface().title, "Complete");
    }

    #[test]
    fn next_is_noop_at_upper_boundary() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.go_to(4); // total - 1
        ctrl.next();
        assert_eq!(ctrl.state().current, 4);
    }

    #[test]
    fn prev_is_noop_at_lower_boundary() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.prev();
        assert_eq!(ctrl.state().current, 0);
    }

    #[test]
    fn out_of_range_target_is_clamped() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.go_to(42);
        assert_eq!(ctrl.state().current, 5);
        assert_eq!(ctrl.surface().active_pane, Some(Pane::Complete));
    }

    #[test]
    fn navigation_persists_current() {
        let mut ctrl = controller(5, 4, 8);
        ctrl.next();
        ctrl.next();
        let saved = ctrl.store().load("csm-test").unwrap();
        assert!(saved.contains("\"current\":2"));
    }
}
