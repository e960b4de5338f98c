// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use super::commands::OutputFormat;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use hetiograph::{
    DiseaseInfoResult, EdgeLoadReport, NodeLoadReport, TreatmentSearchResult,
};
use serde::Serialize;

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format a disease lookup, or its absence
    pub fn format_disease(
        disease_id: &str,
        result: Option<&DiseaseInfoResult>,
        format: OutputFormat,
    ) -> String {
        match (result, format) {
            (Some(result), OutputFormat::Table) => Self::disease_table(result),
            (Some(result), OutputFormat::Json) => Self::to_json(result),
            (None, OutputFormat::Table) => {
                format!("{}\n", format!("Disease {} not found", disease_id).yellow())
            }
            (None, OutputFormat::Json) => Self::to_json(&serde_json::json!({
                "status": "not_found",
                "disease_id": disease_id,
            })),
        }
    }

    /// Format candidate treatments, showing at most `max_mechanisms` per
    /// compound when `show_mechanisms` is set
    pub fn format_treatments(
        result: &TreatmentSearchResult,
        show_mechanisms: bool,
        max_mechanisms: usize,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Table => Self::treatments_table(result, show_mechanisms, max_mechanisms),
            OutputFormat::Json => Self::to_json(result),
        }
    }

    /// Per-kind and per-relationship counts of a load
    pub fn format_load(nodes: &NodeLoadReport, edges: &EdgeLoadReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Nodes".bold().green()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Kind").fg(Color::Green),
            Cell::new("Created").fg(Color::Green),
        ]);
        for kind in &nodes.kinds {
            table.add_row(vec![kind.kind.to_string(), kind.submitted.to_string()]);
        }
        output.push_str(&table.to_string());
        output.push('\n');

        output.push_str(&format!("\n{}\n", "Relationships".bold().green()));
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Metaedge").fg(Color::Green),
            Cell::new("Type").fg(Color::Green),
            Cell::new("Created").fg(Color::Green),
            Cell::new("Materialized").fg(Color::Green),
        ]);
        for group in &edges.groups {
            table.add_row(vec![
                group.metaedge.clone(),
                group.relationship.to_string(),
                group.created().to_string(),
                group.materialized.to_string(),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');

        if edges.has_discrepancy() {
            output.push_str(&format!(
                "\n{}\n",
                format!(
                    "{} edges reference missing nodes and were not materialized",
                    edges.total_submitted() - edges.total_materialized()
                )
                .yellow()
            ));
        }
        output
    }

    fn disease_table(result: &DiseaseInfoResult) -> String {
        let info = &result.info;
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Disease Information".bold().green()));
        output.push_str(&format!("Disease ID: {}\n", info.id));
        output.push_str(&format!("Disease Name: {}\n", info.name));

        output.push_str(&format!("\n{} ({})\n", "Drugs".bold(), info.drugs.len()));
        if !info.drugs.is_empty() {
            let rows = info
                .drugs
                .iter()
                .map(|d| vec![d.id.clone(), d.name.clone(), d.relationship_type.to_string()]);
            output.push_str(&Self::table(&["ID", "Name", "Type"], rows));
        }

        output.push_str(&format!("\n{} ({})\n", "Genes".bold(), info.genes.len()));
        if !info.genes.is_empty() {
            let rows = info
                .genes
                .iter()
                .map(|g| vec![g.id.clone(), g.name.clone(), g.relationship.to_string()]);
            output.push_str(&Self::table(&["ID", "Name", "Relationship"], rows));
        }

        output.push_str(&format!(
            "\n{} ({})\n",
            "Locations".bold(),
            info.locations.len()
        ));
        if !info.locations.is_empty() {
            let rows = info
                .locations
                .iter()
                .map(|l| vec![l.id.clone(), l.name.clone()]);
            output.push_str(&Self::table(&["ID", "Name"], rows));
        }

        output.push_str(&format!("\nQuery Time: {} ms\n", result.query_time_ms));
        output.push_str(&format!("Data Source: {}\n", result.data_source));
        output
    }

    fn treatments_table(
        result: &TreatmentSearchResult,
        show_mechanisms: bool,
        max_mechanisms: usize,
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Potential Treatments".bold().green()));
        output.push_str(&format!("Disease ID: {}\n", result.disease_id));
        output.push_str(&format!(
            "Potential Treatments Found: {}\n",
            result.potential_treatments_count
        ));

        if !result.treatments.is_empty() {
            output.push_str(&format!("\n{}\n", "Compounds:".bold()));
            for (i, treatment) in result.treatments.iter().enumerate() {
                output.push_str(&format!(
                    "\n{}. {} ({})\n",
                    i + 1,
                    treatment.compound_name.cyan(),
                    treatment.compound_id
                ));
                if show_mechanisms {
                    output.push_str("   Mechanisms:\n");
                    for mechanism in treatment.mechanisms.iter().take(max_mechanisms) {
                        output.push_str(&format!("   - Gene: {}\n", mechanism.gene));
                        output.push_str(&format!(
                            "     Compound: {}\n",
                            mechanism.compound_effect
                        ));
                        output.push_str(&format!(
                            "     Location ({}): {}\n",
                            mechanism.anatomy, mechanism.anatomy_effect
                        ));
                    }
                    let hidden = treatment.mechanisms.len().saturating_sub(max_mechanisms);
                    if hidden > 0 {
                        output.push_str(&format!("   ... and {} more\n", hidden).dimmed().to_string());
                    }
                }
            }
        }

        output.push_str(&format!("\nQuery Time: {} ms\n", result.query_time_ms));
        output
    }

    fn table<I>(header: &[&str], rows: I) -> String
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            header
                .iter()
                .map(|col| Cell::new(col).fg(Color::Green))
                .collect::<Vec<_>>(),
        );
        for row in rows {
            table.add_row(row);
        }
        format!("{}\n", table)
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize results to JSON\"}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hetiograph::{CandidateTreatment, DataSource, DiseaseInfo, Mechanism, RelationshipType};

    fn treatments() -> TreatmentSearchResult {
        let mechanism = |gene: &str| Mechanism {
            gene: gene.to_string(),
            compound_effect: RelationshipType::Upregulates,
            anatomy: "Lung".to_string(),
            anatomy_effect: RelationshipType::Downregulates,
        };
        TreatmentSearchResult {
            disease_id: "D1".to_string(),
            potential_treatments_count: 1,
            treatments: vec![CandidateTreatment {
                compound_id: "C2".to_string(),
                compound_name: "Zeta".to_string(),
                mechanisms: vec![mechanism("GeneA"), mechanism("GeneB")],
            }],
            query_time_ms: 0.5,
        }
    }

    #[test]
    fn test_missing_disease_message() {
        colored::control::set_override(false);
        let text = ResultFormatter::format_disease("D404", None, OutputFormat::Table);
        assert_eq!(text, "Disease D404 not found\n");
    }

    #[test]
    fn test_disease_json_has_data_source() {
        let result = DiseaseInfoResult {
            info: DiseaseInfo {
                id: "D1".to_string(),
                name: "Flu".to_string(),
                drugs: vec![],
                genes: vec![],
                locations: vec![],
            },
            query_time_ms: 0.12,
            data_source: DataSource::Cache,
        };
        let text = ResultFormatter::format_disease("D1", Some(&result), OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["data_source"], "cache");
        assert_eq!(json["name"], "Flu");
    }

    #[test]
    fn test_mechanisms_are_capped() {
        colored::control::set_override(false);
        let text = ResultFormatter::format_treatments(&treatments(), true, 1, OutputFormat::Table);
        assert!(text.contains("1. Zeta (C2)"));
        assert!(text.contains("Gene: GeneA"));
        assert!(!text.contains("Gene: GeneB"));
        assert!(text.contains("... and 1 more"));
    }

    #[test]
    fn test_mechanisms_hidden_by_default() {
        let text = ResultFormatter::format_treatments(&treatments(), false, 3, OutputFormat::Table);
        assert!(!text.contains("Mechanisms:"));
    }
}
