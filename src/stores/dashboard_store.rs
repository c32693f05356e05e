use crate::models::{DashboardCounters, WeekChartData};

/// Slice del dashboard: contadores + gráfico semanal en vectores paralelos
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardStore {
    pub counters: Option<DashboardCounters>,
    pub previous_data: Vec<u32>,
    pub current_data: Vec<u32>,
    pub days: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardStore {
    pub fn begin_fetch(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// Reparte los puntos del weekChart en los tres vectores que consume el
    /// gráfico
    pub fn commit(&self, counters: DashboardCounters, chart: WeekChartData) -> Self {
        let mut previous_data = Vec::with_capacity(chart.week_chart.len());
        let mut current_data = Vec::with_capacity(chart.week_chart.len());
        let mut days = Vec::with_capacity(chart.week_chart.len());

        for point in chart.week_chart {
            previous_data.push(point.previous);
            current_data.push(point.current);
            days.push(point.day);
        }

        Self {
            counters: Some(counters),
            previous_data,
            current_data,
            days,
            loading: false,
            error: None,
        }
    }

    pub fn fail(&self, message: String) -> Self {
        Self {
            loading: false,
            error: Some(message),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Envelope;

    #[test]
    fn el_week_chart_del_sobre_termina_en_vectores_paralelos() {
        // Payload tal cual lo manda el backend
        let json = r#"{"success":true,"data":{"weekChart":[{"previous":1,"current":2,"day":"Mon"}]}}"#;
        let envelope: Envelope<WeekChartData> = serde_json::from_str(json).unwrap();
        let chart = envelope.data.unwrap();

        let store = DashboardStore::default()
            .begin_fetch()
            .commit(DashboardCounters::default(), chart);

        assert_eq!(store.previous_data, vec![1]);
        assert_eq!(store.current_data, vec![2]);
        assert_eq!(store.days, vec!["Mon".to_string()]);
        assert!(!store.loading);
        assert_eq!(store.error, None);
    }

    #[test]
    fn el_error_deja_el_slice_sin_loading_y_con_mensaje() {
        let store = DashboardStore::default()
            .begin_fetch()
            .fail("el servidor devolvió una respuesta no-JSON (HTTP 502)".to_string());

        assert!(!store.loading);
        assert!(store.error.is_some());
        assert_eq!(store.counters, None);
    }
}
