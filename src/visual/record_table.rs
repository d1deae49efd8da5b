use crate::data::TripRecord;
use egui_extras::{Column, TableBuilder};

/// Renders the record as the one-row table handed to the model.
pub fn show(ui: &mut egui::Ui, record: &TripRecord) {
    let cells = cells(record);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), TripRecord::FEATURE_NAMES.len())
        .header(20.0, |mut header| {
            for name in TripRecord::FEATURE_NAMES {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            body.row(18.0, |mut row| {
                for cell in &cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn cells(record: &TripRecord) -> [String; 9] {
    [
        record.passenger_count.to_string(),
        format!("{:.6}", record.pickup_latitude),
        format!("{:.6}", record.pickup_longitude),
        format!("{:.6}", record.dropoff_latitude),
        format!("{:.6}", record.dropoff_longitude),
        record.pickup_hour.to_string(),
        record.pickup_day.to_string(),
        record.pickup_month.to_string(),
        record.pickup_year.to_string(),
    ]
}
