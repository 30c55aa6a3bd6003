//models.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Single,
    Superset,
}

/// One entry of a plan: a single exercise or a superset, performed for
/// `set_count` sets with per-set reps and rest.
///
/// `reps.len() == rest.len() == set_count` always holds after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: String,
    pub set_type: SetType,
    pub exercises: Vec<Exercise>,
    pub set_count: usize,
    pub reps: Vec<u32>,
    pub rest: Vec<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
    pub created: DateTime<Local>,
}
