use super::*;

impl<S: Surface, P: StateStore> PageController<S, P> {
    /// Corrige la opción elegida de la pregunta `quiz`. Responder es
    /// definitivo: si la pregunta ya está en `answered` la llamada entera es
    /// un no-op, da igual lo que se pulse.
    pub fn check(&mut self, quiz: usize, option: usize, is_correct: bool) {
        if self.state.answered.contains(&quiz) {
            return;
        }
        self.state.answered.insert(quiz);
        self.surface.disable_quiz(quiz);

        if is_correct {
            self.surface.mark_choice(quiz, option, ChoiceMark::Correct);
            if let Some(fb) = self.cfg.feedback.get(&quiz) {
                let text = format!("✓ {}", fb.good);
                self.surface.show_feedback(quiz, Tone::Good, &text);
            }
            self.state.correct.insert(quiz);
        } else {
            self.surface.mark_choice(quiz, option, ChoiceMark::Wrong);
            if let Some(fb) = self.cfg.feedback.get(&quiz) {
                let text = format!("✗ {}", fb.bad);
                self.surface.show_feedback(quiz, Tone::Bad, &text);
            }
            // Enseña cuál era la buena; solo visual, sin tocar el estado.
            self.surface.highlight_answer(quiz, ChoiceMark::RevealCorrect);
        }

        // El índice de pregunta coincide con el del panel que la contiene.
        self.mark_done(quiz);
        self.save_state();
    }

    /// Marca o desmarca un ítem del checklist del lab.
    pub fn toggle_check(&mut self, idx: usize) {
        if self.state.checks.len() <= idx {
            self.state.checks.resize(idx + 1, false);
        }
        self.state.checks[idx] = !self.state.checks[idx];
        let checked = self.state.checks[idx];
        self.surface.set_check_item(idx, checked);
        self.update_checklist();
        self.save_state();
    }
}
