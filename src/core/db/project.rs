use std::fmt;

use crate::core::db::{DbResult, model::Hours};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// A project that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// Field values for a partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

fn field<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   ID={}", self.id)?;
        writeln!(f, "   name={}", self.name)?;
        writeln!(f, "   estimated hours={}", field(&self.estimated_hours))?;
        writeln!(f, "   actual hours={}", field(&self.actual_hours))?;
        writeln!(f, "   difficulty={}", field(&self.difficulty))?;
        write!(f, "   notes={}", field(&self.notes))
    }
}

/// Storage operations the console session relies on.
pub trait ProjectRepository {
    /// All projects, ascending by id. An empty store yields an empty list.
    fn fetch_all_projects(&self) -> impl Future<Output = DbResult<Vec<Project>>>;
    /// Fails with [`DbError::NotFound`](crate::core::db::DbError::NotFound) for unknown ids.
    fn fetch_project_by_id(&self, id: i64) -> impl Future<Output = DbResult<Project>>;
    fn add_project(&self, project: &NewProject) -> impl Future<Output = DbResult<Project>>;
    fn modify_project_details(&self, project: &Project) -> impl Future<Output = DbResult<()>>;
    fn delete_project(&self, id: i64) -> impl Future<Output = DbResult<()>>;
}
