use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Marca un panel como hecho. `done` solo crece; nunca se quita un índice
    /// salvo en el reset completo.
    pub(crate) fn mark_done(&mut self, n: usize) {
        self.state.done.insert(n);
        self.surface.mark_nav_done(n);
        self.update_progress();
    }

    /// Repinta el indicador de progreso (`done.len() / total`).
    pub fn update_progress(&mut self) {
        self.surface
            .render_meter(Meter::Lessons, self.state.done.len(), self.cfg.total);
    }

    /// Repinta el indicador del checklist. Checklist completo ⇒ el último
    /// panel de lección cuenta como hecho (una sola vez). Con `check_total`
    /// cero no hay autocompletado posible.
    pub(crate) fn update_checklist(&mut self) {
        let checked = self.state.checked_count();
        self.surface
            .render_meter(Meter::Checklist, checked, self.cfg.check_total);
        if self.cfg.check_total > 0
            && checked == self.cfg.check_total
            && !self.state.done.contains(&(self.cfg.total - 1))
        {
            self.mark_done(self.cfg.total - 1);
        }
    }
}
