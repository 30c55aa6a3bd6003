use crate::models::Exercise;

static EXERCISES_JSON: &str = include_str!("exercises.json");

/// Static exercise catalog. Loaded once at startup from the embedded JSON;
/// never mutated afterwards.
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn load() -> Self {
        let exercises: Vec<Exercise> = match serde_json::from_str(EXERCISES_JSON) {
            Ok(list) => list,
            Err(e) => {
                eprintln!("Exercise catalog parsing error: {}", e);
                Vec::new()
            }
        };
        Catalog { exercises }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Entries whose name or category contains `query`, case-insensitively,
    /// in catalog order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Exercise> {
        let needle = query.to_lowercase();
        self.exercises
            .iter()
            .filter(|exercise| {
                exercise.name.to_lowercase().contains(&needle)
                    || exercise.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        let catalog = Catalog::load();
        let results = catalog.search("");
        assert_eq!(results.len(), 10);
        assert_eq!(results, catalog.all());
        assert_eq!(results[0].name, "Bench Press");
        assert_eq!(results[9].name, "Plank");
    }

    #[test]
    fn query_matches_name_or_category_case_insensitively() {
        let catalog = Catalog::load();

        let chest = catalog.search("CHEST");
        let names: Vec<&str> = chest.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench Press", "Push-up"]);

        let press = catalog.search("press");
        let names: Vec<&str> = press.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench Press", "Overhead Press"]);
    }

    #[test]
    fn entries_left_out_match_in_neither_field() {
        let catalog = Catalog::load();
        let query = "legs";
        let returned = catalog.search(query);
        for exercise in catalog.all() {
            let matches = exercise.name.to_lowercase().contains(query)
                || exercise.category.to_lowercase().contains(query);
            assert_eq!(matches, returned.contains(exercise));
        }
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let catalog = Catalog::load();
        assert!(catalog.search("swimming").is_empty());
    }
}
