use crate::cli::command::{Command, SessionLine};
use crate::maps::{Coordinates, PlacePrediction};
use crate::picker::LocationPicker;
use address_book::data_transfer::AddressId;
use itertools::Itertools;

pub enum Outcome {
    Continue(String),
    Quit,
}

/// Drives a [`LocationPicker`] from text commands.
pub struct Session<'a> {
    picker: &'a LocationPicker,
    predictions: Vec<PlacePrediction>,
}

impl<'a> Session<'a> {
    pub fn new(picker: &'a LocationPicker) -> Self {
        Self {
            picker,
            predictions: vec![],
        }
    }

    pub async fn start(&self) -> String {
        self.picker.mount().await;
        self.render_saved().await
    }

    pub async fn handle(&mut self, line: &str) -> Outcome {
        match SessionLine::parse_line(line) {
            Ok(SessionLine {
                command: Command::Quit,
            }) => Outcome::Quit,
            Ok(parsed) => Outcome::Continue(self.execute(parsed.command).await),
            Err(err) => Outcome::Continue(err.render().to_string()),
        }
    }

    async fn execute(&mut self, command: Command) -> String {
        let result = match command {
            Command::Search { text } => match self.picker.search(&text.join(" ")).await {
                Ok(predictions) => {
                    self.predictions = predictions;
                    return self.render_predictions();
                }
                Err(err) => Err(err),
            },
            Command::Pick { index } => {
                let Some(prediction) = index
                    .checked_sub(1)
                    .and_then(|index| self.predictions.get(index))
                else {
                    return format!("No search result numbered {index}");
                };
                let place_id = prediction.place_id.clone();
                self.picker.select_place(&place_id).await
            }
            Command::Locate => self.picker.locate_me().await,
            Command::Drag {
                latitude,
                longitude,
            } => {
                self.picker
                    .marker_dragged(Coordinates {
                        latitude,
                        longitude,
                    })
                    .await
            }
            Command::Category { label } => {
                self.picker.select_category(&label.join(" ")).await;
                Ok(())
            }
            Command::Save => self.picker.save().await.map(|_| ()),
            Command::Delete { id } => self.picker.delete(AddressId::new(id)).await,
            Command::List => self.picker.refresh().await,
            Command::Show | Command::Quit => Ok(()),
        };

        match result {
            Ok(()) => self.render().await,
            Err(err) => format!("error: {err}"),
        }
    }

    fn render_predictions(&self) -> String {
        if self.predictions.is_empty() {
            return "No places found".to_string();
        }
        self.predictions
            .iter()
            .enumerate()
            .map(|(index, prediction)| format!("{}. {}", index + 1, prediction.description))
            .join("\n")
    }

    async fn render(&self) -> String {
        let state = self.picker.state().await;
        let category = state
            .category
            .map(|category| category.into_inner())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Position: {}\nCurrent Address: {}\nCategory: {}\n{}",
            state.position,
            state.address.as_deref().unwrap_or("No address selected"),
            category,
            self.render_saved().await
        )
    }

    async fn render_saved(&self) -> String {
        let saved = self.picker.state().await.saved;
        if saved.is_empty() {
            return "Saved Addresses: none".to_string();
        }
        let lines = saved
            .iter()
            .map(|record| format!("  [{}] {} ({})", record.id, record.address, record.category))
            .join("\n");
        format!("Saved Addresses:\n{lines}")
    }
}
