use eframe::egui::{self, Align2, Color32, RichText, ScrollArea, Ui};

use crate::builder::{self, BuilderPhase, DragState, SetBuilder};
use crate::catalog::Catalog;
use crate::models::{ExerciseSet, Plan, SetType};

/// What the navigation shell should do once the frame is over.
pub enum PlanAction {
    None,
    Back,
    Save(Plan),
}

/// The plan-creation screen. Owns the plan name, the committed sets and the
/// draft builder; the shell replaces the whole value when the user navigates
/// away, which is what discards the session.
pub struct CreatePlanScreen {
    plan_name: String,
    sets: Vec<ExerciseSet>,
    builder: SetBuilder,
    drag: Option<DragState>,
}

impl CreatePlanScreen {
    pub fn new() -> Self {
        CreatePlanScreen {
            plan_name: String::new(),
            sets: Vec::new(),
            builder: SetBuilder::new(),
            drag: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut Ui, catalog: &Catalog) -> PlanAction {
        let mut action = PlanAction::None;

        ui.horizontal(|ui| {
            if ui.button(RichText::new("←").size(18.0)).clicked() {
                action = PlanAction::Back;
            }
            ui.label(RichText::new("Create Workout Plan").size(18.0).strong());
        });
        ui.separator();

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(6.0);
            let can_save = !self.plan_name.trim().is_empty();
            let save = egui::Button::new(RichText::new("Create Plan").size(16.0))
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(can_save, save).clicked() {
                if let Some(plan) = builder::commit_plan(&self.plan_name, self.sets.clone()) {
                    action = PlanAction::Save(plan);
                }
            }
            ui.separator();

            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Create New Workout Plan").size(17.0).strong());
                    ui.add_space(10.0);

                    ui.label("Plan Name");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.plan_name)
                            .hint_text("Enter plan name")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(16.0);

                    ui.label(RichText::new("Exercises").strong());
                    self.show_sets(ui);
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        if ui.button("Add Exercise").clicked() {
                            self.builder.begin_set(SetType::Single);
                        }
                        if ui.button("Add Superset").clicked() {
                            self.builder.begin_set(SetType::Superset);
                        }
                    });
                });
            });
        });

        match self.builder.phase() {
            BuilderPhase::Selecting => self.show_exercise_picker(ctx, catalog),
            BuilderPhase::Configuring => self.show_set_config(ctx),
            BuilderPhase::Idle => {}
        }

        action
    }

    /// The committed set cards. Each card has a drag handle; vertical
    /// displacement maps to a tentative slot and the move is applied on
    /// release. Cancelled or interrupted drags just drop the state.
    fn show_sets(&mut self, ui: &mut Ui) {
        let total = self.sets.len();
        let mut pending_move: Option<(usize, usize)> = None;

        for index in 0..total {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let handle = ui.add(
                        egui::Label::new(RichText::new("☰").size(15.0))
                            .sense(egui::Sense::drag()),
                    );
                    let title = match self.sets[index].set_type {
                        SetType::Single => "Exercise",
                        SetType::Superset => "Superset",
                    };
                    ui.label(RichText::new(title).strong());

                    if handle.drag_started() {
                        self.drag = Some(DragState::new(index));
                    }
                    if handle.dragged() {
                        if let Some(drag) = self.drag.as_mut() {
                            if drag.start_index() == index {
                                drag.advance(handle.drag_delta().y);
                            }
                        }
                    }
                    if handle.drag_stopped() {
                        if let Some(drag) = self.drag.take() {
                            if drag.start_index() == index {
                                let target = drag.target_index(total);
                                if target != index {
                                    pending_move = Some((index, target));
                                }
                            }
                        }
                    }
                });

                for exercise in &self.sets[index].exercises {
                    ui.label(&exercise.name);
                }

                let set = &self.sets[index];
                let reps = set
                    .reps
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join("/");
                ui.label(
                    RichText::new(format!("{} sets · {} reps", set.set_count, reps))
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        }

        if let Some((from, to)) = pending_move {
            builder::reorder(&mut self.sets, from, to);
        }
        if self.drag.is_some() && !ui.ctx().input(|i| i.pointer.any_down()) {
            self.drag = None;
        }

        if self.sets.is_empty() {
            ui.label(RichText::new("No exercises yet.").color(Color32::GRAY));
        }
    }

    fn show_exercise_picker(&mut self, ctx: &egui::Context, catalog: &Catalog) {
        let (title, confirm) = match self.builder.set_type() {
            SetType::Single => ("Add Exercise", "Add Exercise"),
            SetType::Superset => ("Create Superset", "Add Superset"),
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_width(300.0);
                ui.add(
                    egui::TextEdit::singleline(self.builder.search_mut())
                        .hint_text("Search exercises..."),
                );
                ui.add_space(6.0);

                let results = catalog.search(self.builder.search());
                ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for exercise in &results {
                        let selected = self.builder.is_selected(&exercise.id);
                        let mut label = format!("{}  ·  {}", exercise.name, exercise.category);
                        if selected {
                            label.push_str("  ✓");
                        }
                        if ui.selectable_label(selected, label).clicked() {
                            self.builder.toggle_exercise(exercise);
                        }
                    }
                    if results.is_empty() {
                        ui.label(RichText::new("No exercises found.").color(Color32::GRAY));
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.builder.cancel();
                    }
                    let can_add = !self.builder.selection().is_empty();
                    if ui.add_enabled(can_add, egui::Button::new(confirm)).clicked() {
                        if let Some(set) = self.builder.commit_set() {
                            self.sets.push(set);
                        }
                    }
                });
            });
    }

    fn show_set_config(&mut self, ctx: &egui::Context) {
        egui::Window::new("Configure Exercise")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_width(320.0);

                ui.label(RichText::new("Number of Sets").strong());
                let mut count = self.builder.set_count();
                if ui
                    .add(
                        egui::Slider::new(
                            &mut count,
                            builder::MIN_SET_COUNT..=builder::MAX_SET_COUNT,
                        )
                        .text("sets"),
                    )
                    .changed()
                {
                    self.builder.set_set_count(count);
                }
                ui.add_space(8.0);

                ui.label(RichText::new("Reps per Set").strong());
                ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                    for index in 0..self.builder.set_count() {
                        ui.group(|ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(format!("Set {}", index + 1)).strong());
                                ui.label(
                                    RichText::new(format!(
                                        "{} reps · {}s rest",
                                        self.builder.reps()[index],
                                        self.builder.rest()[index]
                                    ))
                                    .size(13.0)
                                    .color(Color32::GRAY),
                                );
                            });

                            let mut reps = self.builder.reps()[index];
                            if ui
                                .add(
                                    egui::Slider::new(
                                        &mut reps,
                                        builder::MIN_REPS..=builder::MAX_REPS,
                                    )
                                    .text("reps"),
                                )
                                .changed()
                            {
                                self.builder.set_reps_at(index, reps);
                            }

                            let mut rest = self.builder.rest()[index];
                            if ui
                                .add(
                                    egui::Slider::new(&mut rest, 0..=builder::MAX_REST)
                                        .step_by(builder::REST_STEP as f64)
                                        .text("rest (s)"),
                                )
                                .changed()
                            {
                                self.builder.set_rest_at(index, rest);
                            }
                        });
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.builder.cancel();
                    }
                    if ui.button("Add Exercise").clicked() {
                        if let Some(set) = self.builder.commit_set() {
                            self.sets.push(set);
                        }
                    }
                });
            });
    }
}
