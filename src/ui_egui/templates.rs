//! Planner template forms.
//!
//! Rendering dispatches with a `match` over [`TemplateKind`]; there is no
//! runtime registry. Form text lives in [`TemplateState`] owned by the
//! shell, not in the navigator.

use egui::{RichText, TextEdit, Ui, Vec2};

use crate::models::template::TemplateKind;
use crate::services::storage::uploader::{MemorySlot, UploadOutcome, Uploader};

/// Number of photo slots on the memories page (3x3 grid).
pub const MEMORY_SLOTS: usize = 9;

/// Free-text answers of the yearly reflection page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflectionForm {
    pub year_in_words: String,
    pub proud_of: String,
    pub intentions: String,
}

/// State of the memories page: the photo grid plus its closing prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoriesForm {
    pub slots: [MemorySlot; MEMORY_SLOTS],
    pub emotions: String,
}

/// All template form state for the currently open day.
///
/// `generation` identifies the page: it bumps every time a day is opened,
/// and uploads carry the generation they were started on so an upload
/// finishing after its page was replaced can be told apart from one
/// belonging to the page on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateState {
    pub generation: u64,
    pub selected: Option<TemplateKind>,
    pub reflection: ReflectionForm,
    pub memories: MemoriesForm,
}

impl TemplateState {
    /// Fresh state for a newly opened day page.
    pub fn for_page(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    /// Apply a finished upload to its memory slot.
    ///
    /// Outcomes started on an earlier page are dropped: a photo (or
    /// failure) from a previously open day must not land in this day's
    /// grid.
    pub fn apply_upload_outcome(&mut self, outcome: UploadOutcome) {
        if outcome.generation != self.generation {
            log::debug!(
                "Dropping upload outcome for slot {} from superseded page {} (current {})",
                outcome.slot,
                outcome.generation,
                self.generation
            );
            return;
        }
        let Some(slot) = self.memories.slots.get_mut(outcome.slot) else {
            log::error!("Upload outcome for unknown slot {}", outcome.slot);
            return;
        };
        *slot = match outcome.result {
            Ok(url) => MemorySlot::Uploaded { url },
            Err(err) => MemorySlot::Failed {
                message: err.to_string(),
            },
        };
    }
}

pub fn show_template(
    ui: &mut Ui,
    kind: TemplateKind,
    state: &mut TemplateState,
    year: i32,
    uploader: &Uploader,
) {
    let generation = state.generation;
    match kind {
        TemplateKind::YearlyReflection => show_reflection(ui, &mut state.reflection, year),
        TemplateKind::Memories => show_memories(ui, &mut state.memories, generation, year, uploader),
        TemplateKind::HabitTracker => show_stub(ui, "Habit Tracker", "Habit tracking is coming soon."),
        TemplateKind::MoodTracker => show_stub(ui, "Mood Tracker", "Mood tracking is coming soon."),
    }
}

fn show_reflection(ui: &mut Ui, form: &mut ReflectionForm, year: i32) {
    ui.label(RichText::new(format!("{year} Yearly Reflection")).size(26.0).strong());
    ui.add_space(16.0);

    prompt(ui, "This year in a few words:", &mut form.year_in_words, "Write your thoughts...");
    prompt(ui, "What am I most proud of this year?", &mut form.proud_of, "List your achievements...");
    prompt(
        ui,
        "How can I be a better version of myself for next year?",
        &mut form.intentions,
        "Write your intentions...",
    );
}

fn prompt(ui: &mut Ui, question: &str, answer: &mut String, hint: &str) {
    ui.label(RichText::new(question).strong());
    ui.add_space(4.0);
    ui.add(
        TextEdit::multiline(answer)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text(hint),
    );
    ui.add_space(16.0);
}

fn show_memories(
    ui: &mut Ui,
    form: &mut MemoriesForm,
    generation: u64,
    year: i32,
    uploader: &Uploader,
) {
    ui.label(RichText::new(format!("{year} Memories")).size(26.0).strong());
    ui.add_space(8.0);
    ui.label(RichText::new(format!("What {year} was to me...")).strong());
    ui.add_space(12.0);

    egui::Grid::new("memories_grid")
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for index in 0..MEMORY_SLOTS {
                memory_slot(ui, form, generation, index, year, uploader);
                if (index + 1) % 3 == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(16.0);
    ui.label(RichText::new(format!("What emotions am I feeling going into {}?", year + 1)).strong());
    ui.add_space(4.0);
    ui.add(
        TextEdit::multiline(&mut form.emotions)
            .desired_rows(2)
            .desired_width(f32::INFINITY)
            .hint_text("Share your feelings..."),
    );
}

fn memory_slot(
    ui: &mut Ui,
    form: &mut MemoriesForm,
    generation: u64,
    index: usize,
    year: i32,
    uploader: &Uploader,
) {
    let size = Vec2::new(150.0, 110.0);
    let frame = egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(4.0))
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::same(8.0));

    // Cloned so the slot can be replaced from inside the match arms.
    let slot = form.slots[index].clone();
    frame.show(ui, |ui| {
        ui.set_min_size(size);
        ui.set_max_size(size);
        ui.centered_and_justified(|ui| match slot {
            MemorySlot::Empty => {
                if ui.button("Add photo").clicked() {
                    start_upload(form, generation, index, year, uploader);
                }
            }
            MemorySlot::Uploading => {
                ui.spinner();
            }
            MemorySlot::Uploaded { url } => {
                ui.hyperlink_to("View photo", url);
            }
            MemorySlot::Failed { message } => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Upload failed").color(ui.visuals().error_fg_color));
                    ui.label(RichText::new(message).small().weak());
                    if ui.button("Retry").clicked() {
                        start_upload(form, generation, index, year, uploader);
                    }
                });
            }
        });
    });
}

/// Pick an image and hand it to the uploader. The upload itself is
/// fire-and-forget; its outcome lands back in this slot via the shell's
/// per-frame channel drain.
fn start_upload(
    form: &mut MemoriesForm,
    generation: u64,
    index: usize,
    year: i32,
    uploader: &Uploader,
) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
        .pick_file()
    else {
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Could not read {}: {}", path.display(), err);
            form.slots[index] = MemorySlot::Failed {
                message: "Could not read file".to_string(),
            };
            return;
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());
    let key = format!("memories/{year}/slot-{index}-{file_name}");

    form.slots[index] = MemorySlot::Uploading;
    uploader.upload(generation, index, key, bytes);
}

fn show_stub(ui: &mut Ui, title: &str, body: &str) {
    ui.label(RichText::new(title).size(26.0).strong());
    ui.add_space(16.0);
    ui.label(RichText::new(body).weak());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::StorageError;
    use reqwest::StatusCode;

    #[test]
    fn outcome_lands_in_its_own_slot() {
        let mut state = TemplateState::for_page(1);
        state.apply_upload_outcome(UploadOutcome {
            generation: 1,
            slot: 4,
            result: Ok("https://cdn.example.com/slot-4.png".to_string()),
        });
        assert_eq!(
            state.memories.slots[4],
            MemorySlot::Uploaded {
                url: "https://cdn.example.com/slot-4.png".to_string(),
            }
        );
        assert!(state
            .memories
            .slots
            .iter()
            .enumerate()
            .all(|(i, s)| i == 4 || *s == MemorySlot::Empty));
    }

    #[test]
    fn failed_outcome_surfaces_its_message() {
        let mut state = TemplateState::for_page(0);
        state.apply_upload_outcome(UploadOutcome {
            generation: 0,
            slot: 0,
            result: Err(StorageError::UnexpectedStatus(StatusCode::FORBIDDEN)),
        });
        match &state.memories.slots[0] {
            MemorySlot::Failed { message } => assert!(message.contains("403")),
            other => panic!("expected failed slot, got {other:?}"),
        }
    }

    #[test]
    fn outcome_from_a_superseded_page_is_dropped() {
        // An upload started on one day's page finishes after another day
        // was opened: the fresh page must stay untouched.
        let mut state = TemplateState::for_page(1);
        state.memories.slots[2] = MemorySlot::Uploading;

        let next_page = state.generation + 1;
        state = TemplateState::for_page(next_page);

        state.apply_upload_outcome(UploadOutcome {
            generation: 1,
            slot: 2,
            result: Ok("https://cdn.example.com/old-day.png".to_string()),
        });
        assert_eq!(state.memories.slots[2], MemorySlot::Empty);
        assert_eq!(state, TemplateState::for_page(2));
    }

    #[test]
    fn outcome_for_an_unknown_slot_is_ignored() {
        let mut state = TemplateState::for_page(3);
        state.apply_upload_outcome(UploadOutcome {
            generation: 3,
            slot: MEMORY_SLOTS + 5,
            result: Ok("https://cdn.example.com/nowhere.png".to_string()),
        });
        assert_eq!(state, TemplateState::for_page(3));
    }
}
