use crate::types::ItineraryRequest;

/// Fixed system instruction framing the model as a budget travel planner.
pub fn system_instruction() -> &'static str {
    "You are a World-Class Budget Student Travel Expert and Route Planner. \
     Your goal is to create a detailed, efficient, and fun travel plan for a student with limited funds. \
     All suggestions MUST prioritize free or low-cost activities (under $20 USD). \
     You must return the response as a valid JSON object matching the provided schema. \
     Provide specific cost estimates for each activity in USD. \
     For the 'efficiency_tip', focus on grouping nearby locations to minimize travel or suggesting budget public transport passes."
}

/// User query interpolating the trip parameters.
pub fn user_query(request: &ItineraryRequest) -> String {
    format!(
        "Generate a {}-day travel itinerary for a trip to {}. \
         The total budget is restricted (focus on lowest costs). \
         The student is interested in: {}. \
         Ensure the plan is efficient to follow, grouping activities by location.",
        request.days, request.destination, request.interests
    )
}
