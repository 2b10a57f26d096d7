pub mod activity;
pub mod bookings;
pub mod chat;
pub mod insights;
pub mod itinerary;
pub mod search;
pub mod weather;
