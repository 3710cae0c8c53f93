//! Text presentation for a generated itinerary: total cost, per-day cost,
//! a time/activity/cost table per day, and each day's efficiency tip.

use std::fmt::Write;

use crate::types::{Itinerary, ItineraryDay};

/// Format a USD amount to two decimal places.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Render the full itinerary as display text.
pub fn render_itinerary(itinerary: &Itinerary) -> String {
    let mut out = String::new();

    writeln!(out, "Your Personalized Travel Itinerary").unwrap();
    writeln!(
        out,
        "Total Estimated Cost (Activities Only): {}",
        format_usd(itinerary.total_cost())
    )
    .unwrap();
    writeln!(
        out,
        "Note: This excludes flights, accommodation, and general food."
    )
    .unwrap();

    for day in &itinerary.days {
        writeln!(out).unwrap();
        render_day(&mut out, day);
    }

    out
}

fn render_day(out: &mut String, day: &ItineraryDay) {
    writeln!(
        out,
        "Day {}: {} (Cost: {})",
        day.day,
        day.theme,
        format_usd(day.estimated_cost())
    )
    .unwrap();

    let time_width = day
        .plan
        .iter()
        .map(|activity| activity.time.len())
        .max()
        .unwrap_or(0);

    for activity in &day.plan {
        writeln!(
            out,
            "  {:<width$}  {}  {}",
            activity.time,
            activity.activity,
            format_usd(activity.estimated_cost_usd),
            width = time_width
        )
        .unwrap();
    }

    writeln!(out, "  Efficiency Tip: {}", day.efficiency_tip).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItineraryActivity, ItineraryDay};

    fn sample() -> Itinerary {
        Itinerary::new(vec![
            ItineraryDay {
                day: 1,
                theme: "Historical Walking Tour".to_string(),
                plan: vec![
                    ItineraryActivity {
                        time: "Morning".to_string(),
                        activity: "Old town loop".to_string(),
                        estimated_cost_usd: 5.0,
                    },
                    ItineraryActivity {
                        time: "Afternoon".to_string(),
                        activity: "Free museum".to_string(),
                        estimated_cost_usd: 0.0,
                    },
                    ItineraryActivity {
                        time: "Evening".to_string(),
                        activity: "Street food".to_string(),
                        estimated_cost_usd: 10.0,
                    },
                ],
                efficiency_tip: "Walk the loop clockwise".to_string(),
            },
            ItineraryDay {
                day: 2,
                theme: "Market Day".to_string(),
                plan: vec![ItineraryActivity {
                    time: "Lunch".to_string(),
                    activity: "Covered market".to_string(),
                    estimated_cost_usd: 20.0,
                }],
                efficiency_tip: "Buy a day transit pass".to_string(),
            },
        ])
    }

    #[test]
    fn formats_usd_to_two_decimals() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_usd(12.345), "$12.35");
    }

    #[test]
    fn renders_total_and_per_day_subtotals() {
        let rendered = render_itinerary(&sample());
        assert!(rendered.contains("Total Estimated Cost (Activities Only): $35.00"));
        assert!(rendered.contains("Day 1: Historical Walking Tour (Cost: $15.00)"));
        assert!(rendered.contains("Day 2: Market Day (Cost: $20.00)"));
    }

    #[test]
    fn renders_activity_rows_and_tips() {
        let rendered = render_itinerary(&sample());
        assert!(rendered.contains("Old town loop"));
        assert!(rendered.contains("$0.00"));
        assert!(rendered.contains("Efficiency Tip: Walk the loop clockwise"));
        assert!(rendered.contains("Efficiency Tip: Buy a day transit pass"));
    }
}
