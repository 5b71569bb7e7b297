//! Persistencia del registro de progreso. El trait es deliberadamente
//! infalible hacia fuera: cada implementación se traga sus propios fallos y
//! la sesión degrada a solo-memoria (el original hacía lo mismo con
//! localStorage).

use std::collections::HashMap;

pub trait StateStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Almacén en memoria para tests y para incrustar el controlador en nativo.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_owned(), value.to_owned());
    }
}
