use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    // Accesores de solo lectura
    pub fn config(&self) -> &PageConfig {
        &self.cfg
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn checked_count(&self) -> usize {
        self.state.checked_count()
    }

    pub fn is_pane_done(&self, n: usize) -> bool {
        self.state.done.contains(&n)
    }
}
