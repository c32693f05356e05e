// Slice genérico por feature: {data, loading, error}.
// Máquina de estados: idle -> loading -> {success, error} -> idle.

#[derive(Clone, PartialEq, Debug)]
pub struct ListStore<T: PartialEq> {
    pub rows: Vec<T>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: PartialEq> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq> ListStore<T> {
    /// Nuevo dispatch: loading se re-entra siempre, los datos viejos quedan
    /// visibles mientras llega la respuesta
    pub fn begin_fetch(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            total: self.total,
            loading: true,
            error: None,
        }
    }

    pub fn commit(&self, rows: Vec<T>, total: u64) -> Self {
        Self {
            rows,
            total,
            loading: false,
            error: None,
        }
    }

    /// El error no borra los datos viejos
    pub fn fail(&self, message: String) -> Self {
        Self {
            rows: self.rows.clone(),
            total: self.total,
            loading: false,
            error: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicion_idle_loading_success() {
        let idle = ListStore::<u32>::default();
        assert!(!idle.loading);

        let loading = idle.begin_fetch();
        assert!(loading.loading);
        assert_eq!(loading.error, None);

        let done = loading.commit(vec![1, 2, 3], 3);
        assert!(!done.loading);
        assert_eq!(done.rows, vec![1, 2, 3]);
        assert_eq!(done.total, 3);
        assert_eq!(done.error, None);
    }

    #[test]
    fn el_error_conserva_los_datos_viejos() {
        let with_data = ListStore::<u32>::default().commit(vec![7], 1);
        let failed = with_data.begin_fetch().fail("HTTP 500".to_string());

        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("HTTP 500"));
        assert_eq!(failed.rows, vec![7]);
        assert_eq!(failed.total, 1);
    }

    #[test]
    fn un_nuevo_dispatch_limpia_el_error_anterior() {
        let failed = ListStore::<u32>::default().fail("error".to_string());
        let retry = failed.begin_fetch();
        assert!(retry.loading);
        assert_eq!(retry.error, None);
    }
}
