use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Textos de feedback de una pregunta del quiz.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Feedback {
    pub good: String, // si acierta
    pub bad: String,  // si falla
}

/// Configuración estática de una página (una por day-NN).
///
/// Los nombres serde siguen el objeto de configuración que declara la propia
/// página, así `initPage` puede parsearlo tal cual.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageConfig {
    #[serde(rename = "storageKey")]
    pub storage_key: String,
    /// Paneles navegables (lecciones + lab). El índice `total` es el panel
    /// final "Complete", implícito.
    pub total: usize,
    #[serde(rename = "quizCount")]
    pub quiz_count: usize,
    #[serde(rename = "checkTotal")]
    pub check_total: usize,
    pub titles: Vec<String>,
    #[serde(rename = "fb", default)]
    pub feedback: HashMap<usize, Feedback>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("storageKey vacío")]
    EmptyStorageKey,
    #[error("total debe ser al menos 1")]
    NoPanes,
    #[error("titles tiene {got} entradas y se esperaban {expected}")]
    TitleCount { expected: usize, got: usize },
    #[error("falta el feedback de la pregunta {0}")]
    MissingFeedback(usize),
}

impl PageConfig {
    /// Una configuración malformada se rechaza aquí; pasado este punto el
    /// controlador ya no tiene ningún camino de error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.total == 0 {
            return Err(ConfigError::NoPanes);
        }
        if self.titles.len() != self.total {
            return Err(ConfigError::TitleCount {
                expected: self.total,
                got: self.titles.len(),
            });
        }
        for idx in 0..self.quiz_count {
            if !self.feedback.contains_key(&idx) {
                return Err(ConfigError::MissingFeedback(idx));
            }
        }
        Ok(())
    }
}

/// Progreso del alumno en una página. Se persiste entero tras cada cambio,
/// con los mismos nombres de campo que el registro JSON original.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    #[serde(default)]
    pub current: usize,
    #[serde(default)]
    pub done: HashSet<usize>,
    #[serde(default)]
    pub correct: HashSet<usize>,
    #[serde(default)]
    pub answered: HashSet<usize>,
    #[serde(default)]
    pub checks: Vec<bool>,
}

impl ProgressState {
    pub fn checked_count(&self) -> usize {
        self.checks.iter().filter(|c| **c).count()
    }

    /// Índices más allá del vector cuentan como sin marcar.
    pub fn is_checked(&self, idx: usize) -> bool {
        self.checks.get(idx).copied().unwrap_or(false)
    }
}
