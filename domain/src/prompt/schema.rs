//! Output schema requested from the generation backend

use crate::deliberation::PathId;
use serde_json::{Value, json};

/// Fixed, versionless response schema.
///
/// Uses the OpenAPI subset understood by structured-output backends
/// (`OBJECT`, `ARRAY`, `STRING`, `NUMBER`, `BOOLEAN` type tags).
pub fn output_schema() -> Value {
    let path_ids: Vec<&str> = PathId::ALL.iter().map(|id| id.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "debate": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "agentId": { "type": "STRING" },
                        "content": { "type": "STRING" }
                    },
                    "required": ["agentId", "content"]
                }
            },
            "verdict": {
                "type": "OBJECT",
                "properties": {
                    "diagnosis": { "type": "STRING" },
                    "conflictResolution": { "type": "STRING" },
                    "isDarkVerdict": { "type": "BOOLEAN" },
                    "matrix": {
                        "type": "ARRAY",
                        "description": "A structured table comparing the 3 paths across 4 key dimensions.",
                        "minItems": 4,
                        "maxItems": 4,
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "dimension": { "type": "STRING", "description": "The criteria of comparison, e.g. 'Risk Attitude'" },
                                "aggressive": { "type": "STRING", "description": "Stance of the Aggressive Path" },
                                "conservative": { "type": "STRING", "description": "Stance of the Conservative Path" },
                                "lateral": { "type": "STRING", "description": "Stance of the Lateral Path" }
                            },
                            "required": ["dimension", "aggressive", "conservative", "lateral"]
                        }
                    },
                    "paths": {
                        "type": "ARRAY",
                        "minItems": 3,
                        "maxItems": 3,
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": { "type": "STRING", "enum": path_ids },
                                "title": { "type": "STRING" },
                                "leadAgentId": { "type": "STRING" },
                                "description": { "type": "STRING" },
                                "riskLevel": { "type": "STRING", "enum": ["EXTREME", "MODERATE", "LOW"] },
                                "upside": { "type": "STRING" },
                                "metrics": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "innovation": { "type": "NUMBER" },
                                        "risk": { "type": "NUMBER" },
                                        "speed": { "type": "NUMBER" },
                                        "capital": { "type": "NUMBER" },
                                        "resilience": { "type": "NUMBER" }
                                    },
                                    "required": ["innovation", "risk", "speed", "capital", "resilience"]
                                },
                                "steps": {
                                    "type": "ARRAY",
                                    "items": { "type": "STRING" }
                                },
                                "code": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "author": { "type": "STRING" },
                                        "text": { "type": "STRING" }
                                    },
                                    "required": ["author", "text"]
                                }
                            },
                            "required": ["id", "title", "leadAgentId", "description", "riskLevel", "upside", "metrics", "steps", "code"]
                        }
                    }
                },
                "required": ["diagnosis", "conflictResolution", "isDarkVerdict", "paths", "matrix"]
            }
        },
        "required": ["debate", "verdict"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_shape() {
        let schema = output_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["debate", "verdict"]));
    }

    #[test]
    fn test_path_enum_lists_all_ids() {
        let schema = output_schema();
        let ids = &schema["properties"]["verdict"]["properties"]["paths"]["items"]["properties"]["id"]["enum"];
        assert_eq!(ids, &json!(["aggressive", "conservative", "lateral"]));
    }

    #[test]
    fn test_matrix_has_four_rows() {
        let schema = output_schema();
        let matrix = &schema["properties"]["verdict"]["properties"]["matrix"];
        assert_eq!(matrix["minItems"], 4);
        assert_eq!(matrix["maxItems"], 4);
    }
}
