pub mod trip_form;
pub mod trip_record;

pub use trip_form::TripForm;
pub use trip_record::TripRecord;
