// Plain-text and JSON rendering of a DashboardView for the command line
use crate::aggregation::DashboardView;
use crate::error::EngineError;
use shared::models::StoreRecord;
use shared::utils::brazilian_format::{format_currency, format_decimal};

pub fn render_json(view: &DashboardView<'_>) -> Result<String, EngineError> {
    Ok(serde_json::to_string_pretty(view)?)
}

pub fn render_text(view: &DashboardView<'_>) -> String {
    let mut out = String::new();
    let m = &view.metrics;

    line(&mut out, format!("Painel de Desempenho ({} lojas)", view.filtered_count));
    line(&mut out, format!("  Total Sell-In:   {}", format_currency(m.total_sell_in)));
    line(&mut out, format!("  Total Sell-Out:  {}", format_currency(m.total_sell_out)));
    line(&mut out, format!("  Ticket Médio:    {}", format_currency(m.avg_ticket)));
    line(&mut out, format!("  Sell-In zerado:  {}", m.zero_sell_in_count));

    line(&mut out, "\nDistribuição por quartil (todas as lojas)".to_string());
    for bucket in &view.distribution {
        line(&mut out, format!("  {:<14} {:>5}", bucket.label, bucket.count));
    }

    section(&mut out, "Top Sell-Out", &view.top_sell_out, |r| format_currency(r.sell_out));
    section(&mut out, "Top Ticket Médio", &view.top_avg_ticket, |r| format_currency(r.avg_ticket));

    if !m.zero_sell_in.is_empty() {
        section(&mut out, "Lojas sem Sell-In", &m.zero_sell_in, |r| format_currency(r.sell_out));
    }

    line(&mut out, "\nLojas".to_string());
    line(
        &mut out,
        format!(
            "  {:<4} {:<28} {:>18} {:>18} {:>8} {:>14}",
            "Q", "Loja", "Sell-In", "Sell-Out", "% Out", "Ticket Médio"
        ),
    );
    for r in &view.table {
        line(
            &mut out,
            format!(
                "  {:<4} {:<28} {:>18} {:>18} {:>8} {:>14}",
                r.quartile.to_string(),
                r.name,
                format_currency(r.sell_in),
                format_currency(r.sell_out),
                format_decimal(r.pct_out, 1),
                format_currency(r.avg_ticket)
            ),
        );
    }
    if view.table_truncated {
        line(
            &mut out,
            format!("  ... {} de {} lojas exibidas", view.table.len(), view.filtered_count),
        );
    }
    out
}

fn line(out: &mut String, text: String) {
    out.push_str(&text);
    out.push('\n');
}

fn section<F>(out: &mut String, title: &str, records: &[&StoreRecord], value: F)
where
    F: Fn(&StoreRecord) -> String,
{
    line(out, format!("\n{}", title));
    if records.is_empty() {
        line(out, "  (nenhuma loja)".to_string());
    }
    for (pos, &r) in records.iter().enumerate() {
        line(out, format!("  {:>2}. {:<28} {:>18}", pos + 1, r.name, value(r)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::compute_view;
    use crate::aggregation::test_support::store;
    use crate::config::EngineSettings;
    use shared::models::QueryState;

    #[test]
    fn test_render_text_formats_currency() {
        let records = vec![store(0, "Loja Centro", 0.0, 90000.0, 52.5), store(1, "Loja Sul", 1234.56, 40000.0, 30.0)];
        let view = compute_view(&records, &QueryState::default(), &EngineSettings::default());
        let text = render_text(&view);

        assert!(text.contains("Painel de Desempenho (2 lojas)"));
        assert!(text.contains("Total Sell-In:   R$ 1.234,56"));
        assert!(text.contains("Total Sell-Out:  R$ 130.000,00"));
        assert!(text.contains("Ticket Médio:    R$ 41,25"));
        assert!(text.contains("Lojas sem Sell-In"));
        assert!(text.contains("Q3 (80k-100k)"));
    }

    #[test]
    fn test_render_text_empty_view() {
        let records = vec![store(0, "Loja Centro", 1.0, 90000.0, 52.5)];
        let view = compute_view(&records, &QueryState::new("nada", None), &EngineSettings::default());
        let text = render_text(&view);
        assert!(text.contains("(0 lojas)"));
        assert!(text.contains("(nenhuma loja)"));
        assert!(!text.contains("Lojas sem Sell-In"));
    }

    #[test]
    fn test_render_text_sections_and_footer() {
        let records: Vec<_> = (0..3)
            .map(|i| store(i, &format!("Loja {}", i), 1.0, (i as f64 + 1.0) * 1000.0, 10.0))
            .collect();
        let settings = EngineSettings {
            table_page_size: Some(2),
            ..EngineSettings::default()
        };
        let view = compute_view(&records, &QueryState::default(), &settings);
        let text = render_text(&view);
        let lines: Vec<&str> = text.lines().collect();

        let top = lines.iter().position(|l| *l == "Top Sell-Out").unwrap();
        assert_eq!(lines[top - 1], "");
        assert!(lines[top + 1].starts_with("   1. Loja 2"));
        assert!(lines[top + 1].ends_with("R$ 3.000,00"));
        assert_eq!(lines.last(), Some(&"  ... 2 de 3 lojas exibidas"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_json_uses_dashboard_field_names() {
        let records = vec![store(0, "Loja Centro", 0.0, 90000.0, 52.5)];
        let view = compute_view(&records, &QueryState::default(), &EngineSettings::default());
        let json: serde_json::Value = serde_json::from_str(&render_json(&view).unwrap()).unwrap();

        assert_eq!(json["filteredCount"], 1);
        assert_eq!(json["metrics"]["zeroSellInCount"], 1);
        assert_eq!(json["table"][0]["sellOut"], 90000.0);
        assert_eq!(json["table"][0]["quartile"], 3);
        assert_eq!(json["distribution"][2]["count"], 1);
    }
}
