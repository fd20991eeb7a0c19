pub mod estimates;
pub mod google_places;
pub mod locations;
