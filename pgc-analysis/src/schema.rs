//! Typed shape of the analysis response and the structured-output schema
//! sent to the service.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Status tag of one horizon section. Portuguese wire values, matching the
/// vocabulary the prompt instructs the model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisStatus {
    #[serde(rename = "Otimista")]
    Optimistic,
    #[serde(rename = "Neutro")]
    Neutral,
    #[serde(rename = "Alerta")]
    Alert,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "Otimista",
            Self::Neutral => "Neutro",
            Self::Alert => "Alerta",
        }
    }
}

/// One time-scoped narrative block of the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub title: String,
    pub status: AnalysisStatus,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// The full analysis: exactly three fixed horizon sections plus an overall
/// summary. Sections are plain struct fields, never looked up by key, so a
/// missing horizon is a parse failure rather than a partially-populated
/// object. Ephemeral: never persisted, discarded whenever the underlying
/// record changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub short_term: AnalysisSection,
    pub mid_term: AnalysisSection,
    pub long_term: AnalysisSection,
    pub general_summary: String,
}

fn section_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "status": { "type": "STRING", "description": "Otimista, Neutro ou Alerta" },
            "description": { "type": "STRING" },
            "recommendations": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "status", "description", "recommendations"]
    })
}

/// The structured-output schema the service is asked to honour.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "shortTerm": section_schema(),
            "midTerm": section_schema(),
            "longTerm": section_schema(),
            "generalSummary": { "type": "STRING" }
        },
        "required": ["shortTerm", "midTerm", "longTerm", "generalSummary"]
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_round_trips_portuguese_wire_values() {
        for (status, wire) in [
            (AnalysisStatus::Optimistic, "\"Otimista\""),
            (AnalysisStatus::Neutral, "\"Neutro\""),
            (AnalysisStatus::Alert, "\"Alerta\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(
                serde_json::from_str::<AnalysisStatus>(wire).unwrap(),
                status
            );
        }
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        assert!(serde_json::from_str::<AnalysisStatus>("\"Bom\"").is_err());
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = AnalysisResponse {
            short_term: AnalysisSection {
                title: "Curto Prazo".to_string(),
                status: AnalysisStatus::Neutral,
                description: "estável".to_string(),
                recommendations: vec![],
            },
            mid_term: AnalysisSection {
                title: "Médio Prazo".to_string(),
                status: AnalysisStatus::Optimistic,
                description: "crescimento".to_string(),
                recommendations: vec!["reinvestir".to_string()],
            },
            long_term: AnalysisSection {
                title: "Longo Prazo".to_string(),
                status: AnalysisStatus::Alert,
                description: "risco cambial".to_string(),
                recommendations: vec![],
            },
            general_summary: "resumo".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("shortTerm").is_some());
        assert!(value.get("midTerm").is_some());
        assert!(value.get("longTerm").is_some());
        assert_eq!(value["generalSummary"], "resumo");
    }

    #[test]
    fn schema_requires_all_four_top_level_fields() {
        let schema = response_schema();

        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["shortTerm", "midTerm", "longTerm", "generalSummary"]
        );
    }
}
