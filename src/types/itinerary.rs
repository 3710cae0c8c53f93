use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trip parameters collected from the user, one per generation request.
///
/// The generator does not validate these; callers (the CLI form) reject
/// empty fields and out-of-range day counts before submitting.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRequest {
    /// Destination city and country (e.g., "Rome, Italy")
    pub destination: String,
    /// Requested trip length in days, expected range 1..=14
    pub days: u32,
    /// Free-text interests (e.g., "history, cheap food, local markets")
    pub interests: String,
}

impl ItineraryRequest {
    pub fn new(destination: impl Into<String>, days: u32, interests: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            days,
            interests: interests.into(),
        }
    }
}

/// A single scheduled activity within a day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryActivity {
    /// Time slot (e.g., "Morning", "Lunch", "Afternoon", "Evening")
    pub time: String,
    /// The specific activity or location
    pub activity: String,
    /// Estimated cost for the activity in USD (0 for free activities)
    pub estimated_cost_usd: f64,
}

/// One day of the itinerary: a themed, ordered list of activities plus a
/// budget-focused routing tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryDay {
    /// The day number, starting from 1
    pub day: u32,
    /// A short, catchy theme for the day (e.g., "Historical Walking Tour")
    pub theme: String,
    /// List of activities for the day, in order
    pub plan: Vec<ItineraryActivity>,
    /// A practical tip for minimizing travel time or cost
    pub efficiency_tip: String,
}

impl ItineraryDay {
    /// Subtotal of the day's activity costs in USD.
    pub fn estimated_cost(&self) -> f64 {
        self.plan.iter().map(|activity| activity.estimated_cost_usd).sum()
    }
}

/// The full multi-day travel plan returned by generation.
///
/// Serializes transparently as a JSON array of days, matching the response
/// schema sent to the model. The length is requested via the prompt, not
/// enforced by the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn new(days: Vec<ItineraryDay>) -> Self {
        Self { days }
    }

    /// Total estimated cost across all activities on all days, in USD.
    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(ItineraryDay::estimated_cost).sum()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(time: &str, name: &str, cost: f64) -> ItineraryActivity {
        ItineraryActivity {
            time: time.to_string(),
            activity: name.to_string(),
            estimated_cost_usd: cost,
        }
    }

    fn sample_itinerary() -> Itinerary {
        Itinerary::new(vec![
            ItineraryDay {
                day: 1,
                theme: "Historical Walking Tour".to_string(),
                plan: vec![
                    activity("Morning", "Colosseum exterior walk", 5.0),
                    activity("Afternoon", "Pantheon", 0.0),
                    activity("Evening", "Trastevere street food", 10.0),
                ],
                efficiency_tip: "Group the centro storico sights into one walking loop".to_string(),
            },
            ItineraryDay {
                day: 2,
                theme: "Cheap Eats Day".to_string(),
                plan: vec![activity("Lunch", "Testaccio market", 20.0)],
                efficiency_tip: "Buy a daily transit pass instead of single tickets".to_string(),
            },
        ])
    }

    #[test]
    fn per_day_subtotals_and_total() {
        let itinerary = sample_itinerary();
        assert_eq!(itinerary.days[0].estimated_cost(), 15.0);
        assert_eq!(itinerary.days[1].estimated_cost(), 20.0);
        assert_eq!(itinerary.total_cost(), 35.0);
        assert_eq!(format!("{:.2}", itinerary.total_cost()), "35.00");
    }

    #[test]
    fn zero_cost_activities_count_as_free() {
        let day = ItineraryDay {
            day: 1,
            theme: "Free Day".to_string(),
            plan: vec![activity("Morning", "Public park", 0.0)],
            efficiency_tip: "Walk everywhere".to_string(),
        };
        assert_eq!(day.estimated_cost(), 0.0);
    }

    #[test]
    fn serializes_as_top_level_array() {
        let itinerary = sample_itinerary();
        let value = serde_json::to_value(&itinerary).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["day"], 1);
        assert_eq!(value[0]["plan"][1]["estimated_cost_usd"], 0.0);
        assert_eq!(value[1]["theme"], "Cheap Eats Day");
    }

    #[test]
    fn round_trips_through_wire_shape() {
        let itinerary = sample_itinerary();
        let raw = serde_json::to_string(&itinerary).unwrap();
        let parsed: Itinerary = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, itinerary);
    }

    #[test]
    fn rejects_missing_required_fields() {
        // "efficiency_tip" omitted from the day object
        let raw = r#"[{"day":1,"theme":"X","plan":[]}]"#;
        assert!(serde_json::from_str::<Itinerary>(raw).is_err());
    }
}
