//! Plain-text rendering of an [`AnalysisReport`].

use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::utils::metrics::MapeSummary;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt;

/// Table with the given header; every column after the first is right-aligned.
fn new_table<I, S>(headers: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(|h| Cell::new(h.into())));
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn mape_cell(result: &Result<MapeSummary>) -> String {
    match result {
        Ok(summary) => format!("{:.2}", summary.mape),
        Err(_) => "n/a".to_string(),
    }
}

impl AnalysisReport {
    /// Render all sections as text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Per-pair MAPE table: supplied forecast, then each model.
    pub fn accuracy_table(&self) -> Table {
        let model_names: Vec<String> = self
            .accuracy
            .first()
            .map(|row| row.models.iter().map(|m| m.model.clone()).collect())
            .unwrap_or_default();

        let mut headers = vec![
            "Pair".to_string(),
            "Weeks".to_string(),
            "Excluded".to_string(),
            "Given".to_string(),
        ];
        headers.extend(model_names);
        let mut table = new_table(headers);

        for row in &self.accuracy {
            let excluded = row
                .given
                .as_ref()
                .map(|s| s.excluded.to_string())
                .unwrap_or_else(|_| "-".to_string());
            let mut cells = vec![
                row.pair.to_string(),
                row.weeks.to_string(),
                excluded,
                mape_cell(&row.given),
            ];
            cells.extend(row.models.iter().map(|m| mape_cell(&m.result)));
            table.add_row(cells);
        }
        table
    }

    /// One row per product with index summary statistics.
    pub fn seasonal_summary_table(&self) -> Table {
        let mut table = new_table(["Product", "Weeks", "Strength", "Min", "Max"]);
        for (product, index) in self.seasonal.indices() {
            let (min, max) = index
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, f)| {
                    (lo.min(f), hi.max(f))
                });
            let strength = index
                .strength()
                .map(|s| format!("{s:.4}"))
                .unwrap_or_else(|_| "n/a".to_string());
            table.add_row(vec![
                product.to_string(),
                index.len().to_string(),
                strength,
                format!("{min:.3}"),
                format!("{max:.3}"),
            ]);
        }
        table
    }

    /// Long-format table of every product/week factor.
    pub fn seasonal_index_table(&self) -> Table {
        let mut table = new_table(["Product", "Week", "Index"]);
        for (product, index) in self.seasonal.indices() {
            for (week, factor) in index.iter() {
                table.add_row(vec![
                    product.to_string(),
                    week.to_string(),
                    format!("{factor:.4}"),
                ]);
            }
        }
        table
    }

    pub fn bullwhip_table(&self) -> Table {
        let mut table = new_table([
            "Pair",
            "Periods",
            "Var(shipments)",
            "Var(demand)",
            "Ratio",
        ]);
        for row in &self.bullwhip {
            let cells = match &row.result {
                Ok(m) => vec![
                    row.pair.to_string(),
                    m.n_periods.to_string(),
                    format!("{:.2}", m.var_shipments),
                    format!("{:.2}", m.var_demand),
                    format!("{:.4}", m.ratio),
                ],
                Err(_) => vec![
                    row.pair.to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "n/a".to_string(),
                ],
            };
            table.add_row(cells);
        }
        table
    }

    fn notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        for row in &self.accuracy {
            if let Err(err) = &row.given {
                notes.push(format!("{}: given forecast: {err}", row.pair));
            }
            for score in &row.models {
                if let Err(err) = &score.result {
                    notes.push(format!("{}: {}: {err}", row.pair, score.model));
                }
            }
        }
        for row in &self.bullwhip {
            if let Err(err) = &row.result {
                notes.push(format!("{}: bullwhip: {err}", row.pair));
            }
        }
        notes
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FORECAST ACCURACY (MAPE %)")?;
        match &self.overall {
            Ok(s) => writeln!(
                f,
                "Overall: {:.2}% over {} observations ({} zero-actual weeks excluded)",
                s.mape, s.included, s.excluded
            )?,
            Err(err) => writeln!(f, "Overall: n/a ({err})")?,
        }
        writeln!(f)?;
        writeln!(f, "{}", self.accuracy_table())?;

        writeln!(f)?;
        writeln!(f, "SEASONAL INDICES")?;
        writeln!(f, "{}", self.seasonal_summary_table())?;
        for (product, reason) in self.seasonal.excluded() {
            writeln!(f, "No index available for {product}: {reason}")?;
        }
        if !self.seasonal.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.seasonal_index_table())?;
        }

        writeln!(f)?;
        writeln!(f, "BULLWHIP EFFECT ({} aggregation)", self.period)?;
        writeln!(f, "{}", self.bullwhip_table())?;

        let notes = self.notes();
        if !notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "NOTES")?;
            for note in notes {
                writeln!(f, "- {note}")?;
            }
        }
        Ok(())
    }
}
