use crate::core::db::{Hours, NewProject, Project, ProjectUpdate};

pub fn build_new(
    name: String,
    estimated_hours: Option<Hours>,
    actual_hours: Option<Hours>,
    difficulty: Option<i32>,
    notes: Option<String>,
) -> NewProject {
    NewProject {
        name,
        estimated_hours,
        actual_hours,
        difficulty,
        notes,
    }
}

/// Applies `update` on top of `existing`; fields left `None` keep their value.
pub fn merge(existing: &Project, update: ProjectUpdate) -> Project {
    Project {
        id: existing.id,
        name: update.name.unwrap_or_else(|| existing.name.clone()),
        estimated_hours: update.estimated_hours.or(existing.estimated_hours),
        actual_hours: update.actual_hours.or(existing.actual_hours),
        difficulty: update.difficulty.or(existing.difficulty),
        notes: update.notes.or_else(|| existing.notes.clone()),
    }
}
