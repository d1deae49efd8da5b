use super::trip_record::TripRecord;
use crate::error::PredictionError;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const PASSENGER_RANGE: RangeInclusive<u8> = 1..=10;
pub const HOUR_RANGE: RangeInclusive<u8> = 0..=23;
pub const DAY_RANGE: RangeInclusive<u8> = 1..=31;
pub const MONTH_RANGE: RangeInclusive<u8> = 1..=12;
pub const PICKUP_YEARS: [u16; 7] = [2009, 2010, 2011, 2012, 2013, 2014, 2015];

/// Editable state behind the input widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct TripForm {
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

impl Default for TripForm {
    fn default() -> Self {
        Self {
            passenger_count: 1,
            pickup_latitude: 0.0,
            pickup_longitude: 0.0,
            dropoff_latitude: 0.0,
            dropoff_longitude: 0.0,
            pickup_hour: 12,
            pickup_day: 15,
            pickup_month: 6,
            pickup_year: PICKUP_YEARS[0],
        }
    }
}

impl TripForm {
    /// Parses the nine positional values of the `predict` command, in record order.
    pub fn from_args(args: &[String]) -> Result<Self, PredictionError> {
        if args.len() != TripRecord::FEATURE_NAMES.len() {
            return Err(PredictionError::InvalidInput {
                field: "arguments",
                expected: format!("{} values", TripRecord::FEATURE_NAMES.len()),
                value: args.len().to_string(),
            });
        }

        let names = TripRecord::FEATURE_NAMES;
        Ok(Self {
            passenger_count: parse_arg(names[0], &args[0])?,
            pickup_latitude: parse_arg(names[1], &args[1])?,
            pickup_longitude: parse_arg(names[2], &args[2])?,
            dropoff_latitude: parse_arg(names[3], &args[3])?,
            dropoff_longitude: parse_arg(names[4], &args[4])?,
            pickup_hour: parse_arg(names[5], &args[5])?,
            pickup_day: parse_arg(names[6], &args[6])?,
            pickup_month: parse_arg(names[7], &args[7])?,
            pickup_year: parse_arg(names[8], &args[8])?,
        })
    }

    /// Builds the model row, enforcing the same bounds the widgets do.
    pub fn to_record(&self) -> Result<TripRecord, PredictionError> {
        let names = TripRecord::FEATURE_NAMES;

        if !PICKUP_YEARS.contains(&self.pickup_year) {
            return Err(PredictionError::InvalidInput {
                field: names[8],
                expected: format!("one of {:?}", PICKUP_YEARS),
                value: self.pickup_year.to_string(),
            });
        }

        Ok(TripRecord {
            passenger_count: in_range(names[0], self.passenger_count, &PASSENGER_RANGE)?,
            pickup_latitude: finite(names[1], self.pickup_latitude)?,
            pickup_longitude: finite(names[2], self.pickup_longitude)?,
            dropoff_latitude: finite(names[3], self.dropoff_latitude)?,
            dropoff_longitude: finite(names[4], self.dropoff_longitude)?,
            pickup_hour: in_range(names[5], self.pickup_hour, &HOUR_RANGE)?,
            pickup_day: in_range(names[6], self.pickup_day, &DAY_RANGE)?,
            pickup_month: in_range(names[7], self.pickup_month, &MONTH_RANGE)?,
            pickup_year: self.pickup_year,
        })
    }
}

fn parse_arg<T: FromStr>(field: &'static str, raw: &str) -> Result<T, PredictionError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| PredictionError::InvalidInput {
            field,
            expected: "a number".to_string(),
            value: raw.to_string(),
        })
}

fn in_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<T, PredictionError>
where
    T: PartialOrd + Display + Copy,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(PredictionError::InvalidInput {
            field,
            expected: format!("between {} and {}", range.start(), range.end()),
            value: value.to_string(),
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, PredictionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictionError::InvalidInput {
            field,
            expected: "a finite number".to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_produce_a_valid_record() {
        let record = TripForm::default().to_record().unwrap();
        assert_eq!(record.passenger_count, 1);
        assert_eq!(record.pickup_hour, 12);
        assert_eq!(record.pickup_day, 15);
        assert_eq!(record.pickup_month, 6);
        assert_eq!(record.pickup_year, 2009);
    }

    #[test]
    fn record_keeps_every_field_in_place() {
        let form = TripForm {
            passenger_count: 2,
            pickup_latitude: 40.7128,
            pickup_longitude: -74.0060,
            dropoff_latitude: 40.7306,
            dropoff_longitude: -73.9352,
            pickup_hour: 14,
            pickup_day: 10,
            pickup_month: 6,
            pickup_year: 2013,
        };

        let row = form.to_record().unwrap().to_row();
        assert_eq!(
            row,
            [2.0, 40.7128, -74.0060, 40.7306, -73.9352, 14.0, 10.0, 6.0, 2013.0]
        );
    }

    #[test]
    fn widget_bounds_are_accepted_at_both_ends() {
        for (passengers, hour, day, month) in [(1, 0, 1, 1), (10, 23, 31, 12)] {
            for year in PICKUP_YEARS {
                let form = TripForm {
                    passenger_count: passengers,
                    pickup_hour: hour,
                    pickup_day: day,
                    pickup_month: month,
                    pickup_year: year,
                    ..TripForm::default()
                };
                assert!(form.to_record().is_ok(), "{:?}", form);
            }
        }
    }

    #[test]
    fn out_of_range_passengers_name_the_field() {
        let form = TripForm {
            passenger_count: 11,
            ..TripForm::default()
        };

        match form.to_record() {
            Err(PredictionError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "passenger_count");
                assert_eq!(value, "11");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_hour_year_and_non_finite_coordinates() {
        let hour = TripForm {
            pickup_hour: 24,
            ..TripForm::default()
        };
        let year = TripForm {
            pickup_year: 2016,
            ..TripForm::default()
        };
        let coordinate = TripForm {
            dropoff_longitude: f64::NAN,
            ..TripForm::default()
        };

        assert!(hour.to_record().is_err());
        assert!(year.to_record().is_err());
        assert!(coordinate.to_record().is_err());
    }

    #[test]
    fn any_finite_coordinates_are_allowed() {
        let form = TripForm {
            pickup_latitude: 1234.5,
            pickup_longitude: -999.0,
            ..TripForm::default()
        };
        assert!(form.to_record().is_ok());
    }

    #[test]
    fn parses_positional_arguments() {
        let form = TripForm::from_args(&args(&[
            "2", "40.7128", "-74.0060", "40.7306", "-73.9352", "14", "10", "6", "2013",
        ]))
        .unwrap();

        assert_eq!(form.passenger_count, 2);
        assert_eq!(form.pickup_longitude, -74.0060);
        assert_eq!(form.pickup_year, 2013);
    }

    #[test]
    fn bad_arguments_are_reported() {
        let wrong_count = TripForm::from_args(&args(&["2", "40.0"]));
        assert!(matches!(
            wrong_count,
            Err(PredictionError::InvalidInput { field: "arguments", .. })
        ));

        let not_a_number = TripForm::from_args(&args(&[
            "two", "40.7128", "-74.0060", "40.7306", "-73.9352", "14", "10", "6", "2013",
        ]));
        assert!(matches!(
            not_a_number,
            Err(PredictionError::InvalidInput { field: "passenger_count", .. })
        ));
    }
}
