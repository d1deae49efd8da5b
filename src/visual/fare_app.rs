use super::record_table;
use crate::config::AppConfig;
use crate::data::TripRecord;
use crate::data::trip_form::{
    DAY_RANGE, HOUR_RANGE, MONTH_RANGE, PASSENGER_RANGE, PICKUP_YEARS, TripForm,
};
use crate::predict::{PredictionHandler, PredictionOutcome, render_outcome};

const COORDINATE_DECIMALS: usize = 6;

pub struct FareApp {
    handler: PredictionHandler,
    form: TripForm,

    // Last submission
    last_record: Option<TripRecord>,
    outcome: Option<PredictionOutcome>,
}

impl FareApp {
    pub fn new(handler: PredictionHandler) -> Self {
        Self {
            handler,
            form: TripForm::default(),
            last_record: None,
            outcome: None,
        }
    }

    pub fn form_mut(&mut self) -> &mut TripForm {
        &mut self.form
    }

    /// Runs the handler on the current form state.
    pub fn submit(&mut self) {
        self.last_record = self.form.to_record().ok();
        self.outcome = Some(self.handler.predict_form(&self.form));
    }

    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().map(render_outcome)
    }

    pub fn last_record(&self) -> Option<&TripRecord> {
        self.last_record.as_ref()
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("trip_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("Passenger Count");
                ui.add(egui::DragValue::new(&mut self.form.passenger_count).range(PASSENGER_RANGE));
                ui.end_row();

                coordinate_row(ui, "Pickup Latitude", &mut self.form.pickup_latitude);
                coordinate_row(ui, "Pickup Longitude", &mut self.form.pickup_longitude);
                coordinate_row(ui, "Dropoff Latitude", &mut self.form.dropoff_latitude);
                coordinate_row(ui, "Dropoff Longitude", &mut self.form.dropoff_longitude);

                ui.label("Pickup Hour");
                ui.add(egui::Slider::new(&mut self.form.pickup_hour, HOUR_RANGE));
                ui.end_row();

                ui.label("Pickup Day");
                ui.add(egui::Slider::new(&mut self.form.pickup_day, DAY_RANGE));
                ui.end_row();

                ui.label("Pickup Month");
                ui.add(egui::Slider::new(&mut self.form.pickup_month, MONTH_RANGE));
                ui.end_row();

                ui.label("Pickup Year");
                egui::ComboBox::from_id_salt("pickup_year_combo")
                    .selected_text(self.form.pickup_year.to_string())
                    .show_ui(ui, |ui| {
                        for year in PICKUP_YEARS {
                            ui.selectable_value(&mut self.form.pickup_year, year, year.to_string());
                        }
                    });
                ui.end_row();
            });
    }

    fn show_result(&self, ui: &mut egui::Ui) {
        match &self.outcome {
            None => {
                ui.label(egui::RichText::new("Fill in the trip and press Predict Fare.").italics().weak());
            }
            Some(outcome) => {
                let color = if outcome.is_ok() {
                    egui::Color32::from_rgb(0, 140, 70)
                } else {
                    egui::Color32::RED
                };
                ui.label(egui::RichText::new(render_outcome(outcome)).color(color).strong());
            }
        }

        if let Some(record) = &self.last_record {
            ui.add_space(8.0);
            ui.label("Submitted record:");
            egui::ScrollArea::horizontal().show(ui, |ui| {
                record_table::show(ui, record);
            });
        }
    }
}

fn coordinate_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .speed(0.0001)
            .fixed_decimals(COORDINATE_DECIMALS),
    );
    ui.end_row();
}

impl eframe::App for FareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Uber Fare Prediction");
            ui.label("Enter the trip details to predict the fare.");
            ui.separator();

            ui.strong("Trip Details");
            self.show_form(ui);

            ui.add_space(8.0);
            if ui.button("Predict Fare").clicked() {
                self.submit();
            }

            ui.separator();
            self.show_result(ui);
        });
    }
}

pub fn run_app(config: &AppConfig, handler: PredictionHandler) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(FareApp::new(handler)))),
    )
}
