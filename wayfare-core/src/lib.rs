pub mod checklist;
pub mod flights;
pub mod itinerary;
pub mod markdown;
pub mod model;
pub mod sections;

pub use model::{
    Day, DayBody, FlightEntry, GuideDepth, Item, MediaAttachment, TravelData, TripQuery,
};
