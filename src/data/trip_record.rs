/// One row of model input. Field order is the column order the model was fitted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRecord {
    pub passenger_count: u8,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub pickup_hour: u8,
    pub pickup_day: u8,
    pub pickup_month: u8,
    pub pickup_year: u16,
}

impl TripRecord {
    pub const FEATURE_NAMES: [&'static str; 9] = [
        "passenger_count",
        "pickup_latitude",
        "pickup_longitude",
        "dropoff_latitude",
        "dropoff_longitude",
        "pickup_hour",
        "pickup_day",
        "pickup_month",
        "pickup_year",
    ];

    /// Values in `FEATURE_NAMES` order.
    pub fn to_row(&self) -> [f64; 9] {
        [
            f64::from(self.passenger_count),
            self.pickup_latitude,
            self.pickup_longitude,
            self.dropoff_latitude,
            self.dropoff_longitude,
            f64::from(self.pickup_hour),
            f64::from(self.pickup_day),
            f64::from(self.pickup_month),
            f64::from(self.pickup_year),
        ]
    }
}
