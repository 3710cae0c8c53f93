pub mod itinerary;

pub use itinerary::{Itinerary, ItineraryActivity, ItineraryDay, ItineraryRequest};
