use yew::prelude::*;

/// Tabla paginada genérica de reportes. Solo presentación: recibe filas ya
/// formateadas y delega la paginación al caller.
#[derive(Properties, PartialEq)]
pub struct ReportTableProps {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub on_page: Callback<u32>,
    #[prop_or_default]
    pub action_label: Option<&'static str>,
    #[prop_or_default]
    pub on_action: Option<Callback<usize>>,
}

#[function_component(ReportTable)]
pub fn report_table(props: &ReportTableProps) -> Html {
    let pages = total_pages(props.total, props.limit);

    let on_prev = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_| on_page.emit(page - 1))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_| on_page.emit(page + 1))
    };

    html! {
        <div class="report-table">
            if let Some(error) = &props.error {
                <div class="report-error">{format!("⚠ {}", error)}</div>
            }

            <table>
                <thead>
                    <tr>
                        { for props.columns.iter().map(|column| html! { <th>{*column}</th> }) }
                        if props.action_label.is_some() {
                            <th></th>
                        }
                    </tr>
                </thead>
                <tbody>
                    if props.loading {
                        <tr><td class="report-loading" colspan={(props.columns.len() + 1).to_string()}>{"Cargando..."}</td></tr>
                    } else if props.rows.is_empty() {
                        <tr><td class="report-empty" colspan={(props.columns.len() + 1).to_string()}>{"Sin resultados"}</td></tr>
                    } else {
                        { for props.rows.iter().enumerate().map(|(index, row)| html! {
                            <tr>
                                { for row.iter().map(|cell| html! { <td>{cell.clone()}</td> }) }
                                if let (Some(label), Some(on_action)) = (props.action_label, props.on_action.clone()) {
                                    <td>
                                        <button
                                            class="btn-row-action"
                                            onclick={Callback::from(move |_| on_action.emit(index))}
                                        >
                                            {label}
                                        </button>
                                    </td>
                                }
                            </tr>
                        })}
                    }
                </tbody>
            </table>

            <div class="report-pagination">
                <button disabled={props.page <= 1} onclick={on_prev}>{"◀"}</button>
                <span>{format!("Página {} de {}", props.page, pages)}</span>
                <button disabled={u64::from(props.page) >= pages} onclick={on_next}>{"▶"}</button>
            </div>
        </div>
    }
}

fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 1;
    }
    (total.div_ceil(u64::from(limit))).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_redondea_hacia_arriba() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }
}
