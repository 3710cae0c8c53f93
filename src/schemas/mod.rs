use serde_json::{json, Value};

/// Response schema sent to Gemini as `generationConfig.responseSchema`.
///
/// This is the strict shape contract for the structured itinerary output:
/// a top-level array of day objects, each carrying an ordered activity plan.
/// The service is instructed to match it, not force-decoded; the body is
/// still parsed and validated locally after every response.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "description": "A list of daily itinerary plans.",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": {
                    "type": "INTEGER",
                    "description": "The day number, starting from 1."
                },
                "theme": {
                    "type": "STRING",
                    "description": "A short, catchy theme for the day (e.g., 'Historical Walking Tour', 'Cheap Eats Day')."
                },
                "plan": {
                    "type": "ARRAY",
                    "description": "List of activities for the day.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "time": {
                                "type": "STRING",
                                "description": "Time slot (e.g., 'Morning', 'Lunch', 'Afternoon', 'Evening')."
                            },
                            "activity": {
                                "type": "STRING",
                                "description": "The specific activity or location."
                            },
                            "estimated_cost_usd": {
                                "type": "NUMBER",
                                "description": "Estimated cost for the activity in USD (use 0 for free activities)."
                            }
                        },
                        "required": ["time", "activity", "estimated_cost_usd"]
                    }
                },
                "efficiency_tip": {
                    "type": "STRING",
                    "description": "A practical, budget-focused tip for minimizing travel time or cost, focusing on walking/public transport."
                }
            },
            "required": ["day", "theme", "plan", "efficiency_tip"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItineraryDay;
    use schemars::schema_for;

    fn required_names(value: &Value) -> Vec<String> {
        value["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn day_and_activity_fields_are_all_required() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");

        let day = &schema["items"];
        assert_eq!(
            required_names(day),
            vec!["day", "theme", "plan", "efficiency_tip"]
        );

        let activity = &day["properties"]["plan"]["items"];
        assert_eq!(
            required_names(activity),
            vec!["time", "activity", "estimated_cost_usd"]
        );
    }

    #[test]
    fn wire_schema_matches_derived_day_type() {
        // The hand-written Gemini schema and the serde types must agree on
        // which day-level fields exist and are mandatory.
        let derived = serde_json::to_value(schema_for!(ItineraryDay)).unwrap();
        let mut derived_required = required_names(&derived);
        derived_required.sort();

        let mut wire_required = required_names(&response_schema()["items"]);
        wire_required.sort();

        assert_eq!(derived_required, wire_required);
    }
}
