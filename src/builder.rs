use chrono::Local;

use crate::models::{Exercise, ExerciseSet, Plan, SetType};

pub const MIN_SET_COUNT: usize = 1;
pub const MAX_SET_COUNT: usize = 5;
pub const MIN_REPS: u32 = 1;
pub const MAX_REPS: u32 = 20;
pub const MAX_REST: u32 = 200;
pub const REST_STEP: u32 = 15;

pub const DEFAULT_SET_COUNT: usize = 3;
pub const DEFAULT_REPS: u32 = 10;
pub const DEFAULT_REST: u32 = 100;

/// Vertical drag distance that moves a dragged card by one list position.
pub const DRAG_ROW_HEIGHT: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderPhase {
    Idle,
    Selecting,
    Configuring,
}

/// Draft state for the exercise set currently being put together.
///
/// One value owns the whole draft: flow phase, selection, search text and the
/// per-set reps/rest configuration. Every transition goes through a method so
/// `reps.len() == rest.len() == set_count` can never be observed broken.
pub struct SetBuilder {
    phase: BuilderPhase,
    set_type: SetType,
    selection: Vec<Exercise>,
    search: String,
    set_count: usize,
    reps: Vec<u32>,
    rest: Vec<u32>,
    next_set_id: u64,
}

impl Default for SetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SetBuilder {
    pub fn new() -> Self {
        SetBuilder {
            phase: BuilderPhase::Idle,
            set_type: SetType::Single,
            selection: Vec::new(),
            search: String::new(),
            set_count: DEFAULT_SET_COUNT,
            reps: vec![DEFAULT_REPS; DEFAULT_SET_COUNT],
            rest: vec![DEFAULT_REST; DEFAULT_SET_COUNT],
            next_set_id: 1,
        }
    }

    pub fn phase(&self) -> BuilderPhase {
        self.phase
    }

    pub fn set_type(&self) -> SetType {
        self.set_type
    }

    pub fn selection(&self) -> &[Exercise] {
        &self.selection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn reps(&self) -> &[u32] {
        &self.reps
    }

    pub fn rest(&self) -> &[u32] {
        &self.rest
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|e| e.id == id)
    }

    /// Opens the selection flow for a new single set or superset. Any previous
    /// selection and search text is dropped.
    pub fn begin_set(&mut self, set_type: SetType) {
        self.set_type = set_type;
        self.selection.clear();
        self.search.clear();
        self.phase = BuilderPhase::Selecting;
    }

    /// Discards the draft. Closing either modal lands here.
    pub fn cancel(&mut self) {
        self.reset_draft();
    }

    /// For a single set, the tapped exercise becomes the whole selection and
    /// the flow advances straight to configuration. For a superset the tap
    /// toggles membership, keeping first-selection order.
    pub fn toggle_exercise(&mut self, exercise: &Exercise) {
        match self.set_type {
            SetType::Single => {
                self.selection = vec![exercise.clone()];
                self.phase = BuilderPhase::Configuring;
            }
            SetType::Superset => {
                if self.is_selected(&exercise.id) {
                    self.selection.retain(|e| e.id != exercise.id);
                } else {
                    self.selection.push(exercise.clone());
                }
            }
        }
    }

    /// Changes the number of sets, clamped to `[MIN_SET_COUNT, MAX_SET_COUNT]`.
    /// Growing appends defaults without touching configured values; shrinking
    /// truncates. Reps and rest stay in lockstep.
    pub fn set_set_count(&mut self, count: usize) {
        let count = count.clamp(MIN_SET_COUNT, MAX_SET_COUNT);
        self.reps.resize(count, DEFAULT_REPS);
        self.rest.resize(count, DEFAULT_REST);
        self.set_count = count;
    }

    pub fn set_reps_at(&mut self, index: usize, value: u32) {
        if let Some(slot) = self.reps.get_mut(index) {
            *slot = value.clamp(MIN_REPS, MAX_REPS);
        }
    }

    pub fn set_rest_at(&mut self, index: usize, value: u32) {
        if let Some(slot) = self.rest.get_mut(index) {
            *slot = value.min(MAX_REST);
        }
    }

    /// Turns the draft into a finished [`ExerciseSet`] and resets for the next
    /// one. Returns `None` when nothing is selected; the UI keeps the commit
    /// affordance disabled in that case.
    pub fn commit_set(&mut self) -> Option<ExerciseSet> {
        if self.selection.is_empty() {
            return None;
        }

        let mut reps = std::mem::take(&mut self.reps);
        let mut rest = std::mem::take(&mut self.rest);
        reps.resize(self.set_count, DEFAULT_REPS);
        rest.resize(self.set_count, DEFAULT_REST);

        let set = ExerciseSet {
            id: self.next_set_id.to_string(),
            set_type: self.set_type,
            exercises: std::mem::take(&mut self.selection),
            set_count: self.set_count,
            reps,
            rest,
        };
        self.next_set_id += 1;
        self.reset_draft();
        Some(set)
    }

    fn reset_draft(&mut self) {
        self.phase = BuilderPhase::Idle;
        self.selection.clear();
        self.search.clear();
        self.set_count = DEFAULT_SET_COUNT;
        self.reps = vec![DEFAULT_REPS; DEFAULT_SET_COUNT];
        self.rest = vec![DEFAULT_REST; DEFAULT_SET_COUNT];
    }
}

/// Assembles the final plan. A blank name yields no plan; the save button is
/// disabled before this is ever reached.
pub fn commit_plan(name: &str, sets: Vec<ExerciseSet>) -> Option<Plan> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Plan {
        name: name.to_string(),
        sets,
        created: Local::now(),
    })
}

/// Stable list move: the element at `from` ends up at `to`, everything in
/// between shifts by one, all other relative order is preserved. Out-of-range
/// indices clamp; `from == to` is a no-op.
pub fn reorder<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if list.is_empty() || from >= list.len() {
        return;
    }
    let to = to.min(list.len() - 1);
    if from == to {
        return;
    }
    let item = list.remove(from);
    list.insert(to, item);
}

/// Tracks one drag gesture over the committed set list. The accumulated
/// vertical offset maps to a tentative target index; release applies the move,
/// while cancel and failure just drop the state.
pub struct DragState {
    start_index: usize,
    offset_y: f32,
}

impl DragState {
    pub fn new(start_index: usize) -> Self {
        DragState {
            start_index,
            offset_y: 0.0,
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn advance(&mut self, delta_y: f32) {
        self.offset_y += delta_y;
    }

    /// `round(offset / DRAG_ROW_HEIGHT) + start_index`, clamped to the list.
    pub fn target_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let shift = (self.offset_y / DRAG_ROW_HEIGHT).round() as isize;
        let target = self.start_index as isize + shift;
        target.clamp(0, len as isize - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, name: &str, category: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn squat() -> Exercise {
        exercise("2", "Squat", "Legs")
    }

    #[test]
    fn begin_set_resets_selection_and_search() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Superset);
        builder.toggle_exercise(&squat());
        builder.search_mut().push_str("sq");

        builder.begin_set(SetType::Single);
        assert_eq!(builder.phase(), BuilderPhase::Selecting);
        assert!(builder.selection().is_empty());
        assert!(builder.search().is_empty());
    }

    #[test]
    fn single_select_replaces_selection_and_advances() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&exercise("1", "Bench Press", "Chest"));
        builder.toggle_exercise(&squat());

        assert_eq!(builder.selection(), &[squat()]);
        assert_eq!(builder.phase(), BuilderPhase::Configuring);
    }

    #[test]
    fn superset_toggle_twice_restores_prior_selection() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Superset);
        builder.toggle_exercise(&exercise("1", "Bench Press", "Chest"));
        builder.toggle_exercise(&squat());
        let before: Vec<Exercise> = builder.selection().to_vec();

        let plank = exercise("10", "Plank", "Core");
        builder.toggle_exercise(&plank);
        builder.toggle_exercise(&plank);

        assert_eq!(builder.selection(), before.as_slice());
        assert_eq!(builder.phase(), BuilderPhase::Selecting);
    }

    #[test]
    fn superset_removal_keeps_remaining_order() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Superset);
        builder.toggle_exercise(&exercise("1", "Bench Press", "Chest"));
        builder.toggle_exercise(&squat());
        builder.toggle_exercise(&exercise("10", "Plank", "Core"));

        builder.toggle_exercise(&squat());
        let names: Vec<&str> = builder.selection().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench Press", "Plank"]);
    }

    #[test]
    fn growing_set_count_keeps_existing_values_and_appends_defaults() {
        let mut builder = SetBuilder::new();
        builder.set_reps_at(0, 5);
        builder.set_rest_at(0, 60);

        builder.set_set_count(4);
        assert_eq!(builder.reps(), &[5, 10, 10, 10]);
        assert_eq!(builder.rest(), &[60, 100, 100, 100]);
        assert_eq!(builder.set_count(), 4);
    }

    #[test]
    fn shrinking_set_count_truncates_both_arrays() {
        let mut builder = SetBuilder::new();
        builder.set_reps_at(0, 12);
        builder.set_reps_at(1, 8);
        builder.set_rest_at(1, 45);

        builder.set_set_count(2);
        assert_eq!(builder.reps(), &[12, 8]);
        assert_eq!(builder.rest(), &[100, 45]);
        assert_eq!(builder.set_count(), 2);
    }

    #[test]
    fn set_count_is_clamped() {
        let mut builder = SetBuilder::new();
        builder.set_set_count(0);
        assert_eq!(builder.set_count(), 1);
        builder.set_set_count(9);
        assert_eq!(builder.set_count(), 5);
        assert_eq!(builder.reps().len(), 5);
        assert_eq!(builder.rest().len(), 5);
    }

    #[test]
    fn pointwise_updates_clamp_and_ignore_bad_indices() {
        let mut builder = SetBuilder::new();
        builder.set_reps_at(1, 99);
        builder.set_reps_at(2, 0);
        builder.set_rest_at(0, 500);
        builder.set_reps_at(7, 15);
        builder.set_rest_at(7, 15);

        assert_eq!(builder.reps(), &[10, 20, 1]);
        assert_eq!(builder.rest(), &[200, 100, 100]);
    }

    #[test]
    fn commit_set_requires_a_selection() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Superset);
        assert!(builder.commit_set().is_none());
    }

    #[test]
    fn committed_set_always_has_matching_lengths() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        builder.set_set_count(5);

        let set = builder.commit_set().unwrap();
        assert_eq!(set.set_count, 5);
        assert_eq!(set.reps.len(), 5);
        assert_eq!(set.rest.len(), 5);
    }

    #[test]
    fn commit_set_resets_the_draft() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        builder.set_set_count(2);
        builder.commit_set().unwrap();

        assert_eq!(builder.phase(), BuilderPhase::Idle);
        assert!(builder.selection().is_empty());
        assert_eq!(builder.set_count(), DEFAULT_SET_COUNT);
        assert_eq!(builder.reps(), &[10, 10, 10]);
        assert_eq!(builder.rest(), &[100, 100, 100]);
    }

    #[test]
    fn committed_sets_get_fresh_ids() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        let first = builder.commit_set().unwrap();

        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        let second = builder.commit_set().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Superset);
        builder.toggle_exercise(&squat());
        builder.set_set_count(5);
        builder.cancel();

        assert_eq!(builder.phase(), BuilderPhase::Idle);
        assert!(builder.selection().is_empty());
        assert_eq!(builder.set_count(), DEFAULT_SET_COUNT);
    }

    #[test]
    fn plan_is_rejected_when_name_is_blank() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        let set = builder.commit_set().unwrap();

        assert!(commit_plan("", vec![set.clone()]).is_none());
        assert!(commit_plan("   ", vec![set]).is_none());
    }

    #[test]
    fn single_set_end_to_end() {
        let mut builder = SetBuilder::new();
        builder.begin_set(SetType::Single);
        builder.toggle_exercise(&squat());
        builder.set_set_count(2);
        builder.set_reps_at(0, 8);
        builder.set_reps_at(1, 8);
        builder.set_rest_at(0, 90);
        builder.set_rest_at(1, 90);
        let set = builder.commit_set().unwrap();

        let plan = commit_plan("Leg Day", vec![set]).unwrap();
        assert_eq!(plan.name, "Leg Day");
        assert_eq!(plan.sets.len(), 1);

        let only = &plan.sets[0];
        assert_eq!(only.set_type, SetType::Single);
        assert_eq!(only.exercises, vec![squat()]);
        assert_eq!(only.set_count, 2);
        assert_eq!(only.reps, vec![8, 8]);
        assert_eq!(only.rest, vec![90, 90]);
    }

    #[test]
    fn reorder_moves_forward_and_backward() {
        let mut list = vec![1, 2, 3, 4];
        reorder(&mut list, 0, 2);
        assert_eq!(list, vec![2, 3, 1, 4]);

        let mut list = vec![1, 2, 3, 4];
        reorder(&mut list, 3, 1);
        assert_eq!(list, vec![1, 4, 2, 3]);
    }

    #[test]
    fn reorder_edge_cases() {
        let mut list = vec![1, 2, 3];
        reorder(&mut list, 1, 1);
        assert_eq!(list, vec![1, 2, 3]);

        reorder(&mut list, 0, 99);
        assert_eq!(list, vec![2, 3, 1]);

        reorder(&mut list, 99, 0);
        assert_eq!(list, vec![2, 3, 1]);

        let mut empty: Vec<i32> = Vec::new();
        reorder(&mut empty, 0, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn drag_target_rounds_displacement_to_rows() {
        let mut drag = DragState::new(2);
        drag.advance(80.0);
        drag.advance(40.0);
        assert_eq!(drag.target_index(5), 3);

        let mut drag = DragState::new(2);
        drag.advance(-260.0);
        assert_eq!(drag.target_index(5), 0);

        let drag = DragState::new(2);
        assert_eq!(drag.target_index(5), 2);
    }

    #[test]
    fn drag_target_clamps_to_list_bounds() {
        let mut drag = DragState::new(4);
        drag.advance(1000.0);
        assert_eq!(drag.target_index(5), 4);
        assert_eq!(drag.target_index(0), 0);
    }
}
