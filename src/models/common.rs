use serde::{Deserialize, Serialize};

/// Sobre estándar de respuesta del backend: {success, data, message?}.
/// Se valida una sola vez en el cliente HTTP; el código de features nunca
/// vuelve a comprobar la forma.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Parámetros de consulta de un reporte paginado. Los posee la pantalla que
/// lanza el fetch; no se comparten entre features.
#[derive(Clone, PartialEq, Debug)]
pub struct ReportQuery {
    /// Página 1-based
    pub page: u32,
    pub limit: u32,
    pub from: Option<String>,
    pub to: Option<String>,
    pub company_id: Option<String>,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            from: None,
            to: None,
            company_id: None,
        }
    }
}

impl ReportQuery {
    pub fn with_company(company_id: Option<String>) -> Self {
        Self { company_id, ..Self::default() }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn range(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Query string con los parámetros presentes, empezando por '?'
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if let Some(from) = &self.from {
            params.push(format!("from={}", from));
        }
        if let Some(to) = &self.to {
            params.push(format!("to={}", to));
        }
        if let Some(company_id) = &self.company_id {
            params.push(format!("company_id={}", company_id));
        }
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_minima_lleva_pagina_y_limite() {
        let query = ReportQuery::default();
        assert_eq!(query.to_query_string(), "?page=1&limit=10");
    }

    #[test]
    fn query_completa_incluye_rango_y_empresa() {
        let query = ReportQuery::with_company(Some("c-7".to_string()))
            .page(3)
            .range(Some("2026-08-01".to_string()), Some("2026-08-07".to_string()));
        assert_eq!(
            query.to_query_string(),
            "?page=3&limit=10&from=2026-08-01&to=2026-08-07&company_id=c-7"
        );
    }

    #[test]
    fn el_sobre_tolera_data_y_message_ausentes() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message, None);
    }
}
