use std::cell::Cell;
use std::rc::Rc;

/// Número de secuencia monótono por slice: cada dispatch toma un ticket y
/// solo la respuesta del ticket más reciente puede escribir en el estado.
/// Una respuesta tardía de un dispatch anterior se descarta.
#[derive(Clone, Default)]
pub struct FetchSeq(Rc<Cell<u64>>);

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un nuevo dispatch y devuelve su ticket
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// ¿Sigue siendo este ticket el último emitido?
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_segundo_dispatch_invalida_al_primero() {
        let seq = FetchSeq::new();
        let primero = seq.begin();
        let segundo = seq.begin();

        // La respuesta del segundo llega primero y es la vigente
        assert!(seq.is_current(segundo));
        // La respuesta tardía del primero se descarta
        assert!(!seq.is_current(primero));
    }

    #[test]
    fn los_clones_comparten_el_contador() {
        let seq = FetchSeq::new();
        let clon = seq.clone();
        let ticket = seq.begin();
        assert!(clon.is_current(ticket));
        clon.begin();
        assert!(!seq.is_current(ticket));
    }
}
