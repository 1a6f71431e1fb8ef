//! Application shell: page routing, navigation bar, and per-frame wiring
//! between the navigator, the app context, and the upload channel.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::user::User;
use crate::services::context::AppContext;
use crate::services::navigator::CalendarNavigator;
use crate::services::storage::uploader::{UploadOutcome, Uploader};
use crate::services::storage::HttpBlobStore;
use crate::ui_egui::templates::TemplateState;
use crate::ui_egui::theme;
use crate::ui_egui::views::day_view::{DayView, DayViewAction};
use crate::ui_egui::views::landing::{LandingAction, LandingView};
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};
use crate::ui_egui::views::year_view::YearView;
use crate::utils::date;

/// Where the memories template stores photos.
const BLOB_STORE_URL: &str = "https://storage.smartplanner.app/uploads";

/// Top-level pages of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Dashboard,
    Planner,
    Habits,
}

pub struct PlannerApp {
    context: AppContext,
    page: Page,
    navigator: CalendarNavigator,
    templates: TemplateState,
    drawer_open: bool,
    uploader: Uploader,
    upload_outcomes: Receiver<UploadOutcome>,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let context = AppContext::with_detected_theme();
        theme::apply_theme(&cc.egui_ctx, context.dark_mode());

        let store = HttpBlobStore::new(BLOB_STORE_URL)?;
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let uploader = Uploader::new(Arc::new(store), outcome_tx);

        Ok(Self {
            context,
            page: Page::Landing,
            navigator: CalendarNavigator::new(date::today()),
            templates: TemplateState::default(),
            drawer_open: true,
            uploader,
            upload_outcomes: outcome_rx,
        })
    }

    /// Move finished uploads into their memory slots. Outcomes from a page
    /// that has since been replaced are dropped by the template state.
    fn drain_upload_outcomes(&mut self) {
        while let Ok(outcome) = self.upload_outcomes.try_recv() {
            self.templates.apply_upload_outcome(outcome);
        }
    }

    fn nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Smart Planner").strong());
                ui.separator();

                for (label, page) in [
                    ("Dashboard", Page::Dashboard),
                    ("Calendar", Page::Planner),
                    ("Habits", Page::Habits),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.context.dark_mode() { "☀" } else { "🌙" };
                    if ui.button(theme_icon).clicked() {
                        self.context.toggle_dark_mode();
                        theme::apply_theme(ctx, self.context.dark_mode());
                    }

                    if self.context.is_authenticated() {
                        if ui.button("Sign out").clicked() {
                            self.context.set_user(None);
                        }
                        if let Some(user) = self.context.user() {
                            ui.label(user.label().to_string());
                        }
                    } else if ui.button("Sign in").clicked() {
                        // Stub sign-in: a fixed demo identity.
                        let mut user = User::new("demo", "demo@smartplanner.app");
                        user.display_name = Some("Demo".to_string());
                        self.context.set_user(Some(user));
                    }
                });
            });
        });
    }

    fn planner_page(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let cursor = *self.navigator.cursor();

        if cursor.day.is_some() {
            let Some(selected) = self.navigator.selected_date() else {
                log::error!("Cursor at day depth without a valid date");
                self.navigator.go_back_one_level();
                return;
            };
            let action = DayView::show(
                ui,
                selected,
                &mut self.templates,
                &mut self.drawer_open,
                &self.uploader,
            );
            if action == DayViewAction::Close {
                self.navigator.go_back_one_level();
            }
        } else if cursor.month0.is_some() {
            let action = MonthView::show(ui, &mut self.navigator, today);
            if let MonthViewAction::OpenDay(day) = action {
                match self.navigator.select_day(day) {
                    Ok(true) => {
                        // Fresh page state for the newly opened day; bumping
                        // the generation retires any in-flight uploads.
                        let next_page = self.templates.generation + 1;
                        self.templates = TemplateState::for_page(next_page);
                        self.drawer_open = true;
                    }
                    Ok(false) => {} // padding click, nothing to do
                    Err(err) => log::error!("Day card click rejected: {err}"),
                }
            }
        } else {
            YearView::show(ui, &mut self.navigator, today);
        }
    }

    fn stub_page(ui: &mut egui::Ui, title: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(egui::RichText::new(title).size(28.0).strong());
            ui.label(egui::RichText::new("Coming soon").weak());
        });
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_upload_outcomes();

        // Re-fetched every frame so midnight rollover is never stale.
        let today = date::today();

        if self.page != Page::Landing {
            self.nav_bar(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Landing => {
                if LandingView::show(ui) == LandingAction::OpenPlanner {
                    self.page = Page::Planner;
                }
            }
            Page::Planner => self.planner_page(ui, today),
            Page::Dashboard => Self::stub_page(ui, "Dashboard"),
            Page::Habits => Self::stub_page(ui, "Habit Tracker"),
        });
    }
}
