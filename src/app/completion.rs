use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Panel final: marca el panel actual como hecho, pinta las dos notas y
    /// bloquea la navegación. `current` se queda donde estaba, igual que en
    /// la página original: una recarga vuelve al panel desde el que se
    /// terminó.
    pub fn finish(&mut self) {
        let current = self.state.current;
        self.mark_done(current);
        self.surface.deactivate_all();

        let quiz_score = self.quiz_score_label();
        let lab_score = format!(
            "{} / {}",
            self.state.checked_count(),
            self.cfg.check_total
        );
        self.surface.show_scores(&quiz_score, &lab_score);

        self.surface.activate_pane(Pane::Complete);
        self.surface.set_title("Complete");
        self.surface.set_nav_enabled(NavButton::Prev, false);
        self.surface.set_nav_enabled(NavButton::Next, false);
        self.save_state();
    }

    /// Nota del quiz con porcentaje redondeado: "3 / 4 (75%)".
    pub fn quiz_score_label(&self) -> String {
        let correct = self.state.correct.len();
        let pct = if self.cfg.quiz_count == 0 {
            0
        } else {
            (correct as f64 / self.cfg.quiz_count as f64 * 100.0).round() as usize
        };
        format!("{} / {} ({}%)", correct, self.cfg.quiz_count, pct)
    }
}
