use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use tracing::{debug, info, warn};

use crate::{
    console::{ConsoleError, ConsoleResult, InputReader, SelectionState, editor},
    core::db::{DbError, ProjectRepository, ProjectUpdate},
};

/// Selection value standing for "blank line at the menu prompt".
pub const EXIT_SELECTION: i64 = -1;

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddProject,
    ListProjects,
    SelectProject,
    UpdateProject,
    DeleteProject,
}

impl Command {
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Command::AddProject),
            2 => Some(Command::ListProjects),
            3 => Some(Command::SelectProject),
            4 => Some(Command::UpdateProject),
            5 => Some(Command::DeleteProject),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

/// The interactive menu loop and its command handlers.
pub struct MenuController<S, R, W> {
    store: S,
    input: InputReader<R, W>,
    selection: SelectionState,
    state: SessionState,
}

impl<S, R, W> MenuController<S, R, W>
where
    S: ProjectRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: InputReader<R, W>) -> Self {
        Self {
            store,
            input,
            selection: SelectionState::new(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.input.into_output()
    }

    /// Runs until the user exits. Only a failing input or output stream ends
    /// the loop with an error; command failures are printed and the menu repeats.
    pub async fn run(&mut self) -> ConsoleResult<()> {
        info!("session started");
        while self.state == SessionState::Running {
            if let Err(err) = self.step().await {
                if err.is_fatal() {
                    return Err(err);
                }
                warn!(error = %err, "command failed");
                writeln!(self.out(), "\nError: {err}. Try again")?;
            }
        }
        info!("session ended");
        Ok(())
    }

    /// Render the menu, read one selection and dispatch it.
    pub async fn step(&mut self) -> ConsoleResult<()> {
        let selection = self.read_selection()?;
        if selection == EXIT_SELECTION {
            return self.exit_menu();
        }
        match Command::from_selection(selection) {
            Some(command) => self.dispatch(command).await,
            None => {
                writeln!(self.out(), "\n{selection} is not a valid selection. Try again.")?;
                Ok(())
            }
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> ConsoleResult<()> {
        debug!(?command, "dispatching");
        match command {
            Command::AddProject => self.create_project().await,
            Command::ListProjects => self.list_projects().await,
            Command::SelectProject => self.select_project().await,
            Command::UpdateProject => self.update_project().await,
            Command::DeleteProject => self.delete_project().await,
        }
    }

    fn out(&mut self) -> &mut W {
        self.input.output()
    }

    fn read_selection(&mut self) -> ConsoleResult<i64> {
        self.print_operations()?;
        Ok(self
            .input
            .read_integer("Enter a menu selection")?
            .unwrap_or(EXIT_SELECTION))
    }

    fn print_operations(&mut self) -> ConsoleResult<()> {
        let out = self.input.output();
        writeln!(out, "\nThese are the available selections. Press the Enter key to quit:")?;
        for line in OPERATIONS {
            writeln!(out, "    {line}")?;
        }
        match self.selection.current() {
            None => writeln!(out, "\nYou are not working with a project.")?,
            Some(project) => writeln!(out, "\nYou are working with project:\n{project}")?,
        }
        Ok(())
    }

    fn exit_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.out(), "\nExiting the menu.")?;
        self.state = SessionState::Exited;
        Ok(())
    }

    async fn create_project(&mut self) -> ConsoleResult<()> {
        let name = self
            .input
            .read_line("Enter the project name")?
            .ok_or(ConsoleError::NameRequired)?;
        let estimated_hours = self.input.read_decimal("Enter the estimated hours")?;
        let actual_hours = self.input.read_decimal("Enter the actual hours")?;
        let difficulty = self.input.read_integer("Enter the project difficulty (1-5)")?;
        let notes = self.input.read_line("Enter the project notes")?;

        let new_project = editor::build_new(name, estimated_hours, actual_hours, difficulty, notes);
        let project = self.store.add_project(&new_project).await?;
        info!(id = project.id, "project created");
        writeln!(self.out(), "\nYou have successfully created project:\n{project}")?;
        Ok(())
    }

    async fn list_projects(&mut self) -> ConsoleResult<()> {
        let projects = self.store.fetch_all_projects().await?;
        let out = self.input.output();
        writeln!(out, "\nProjects:")?;
        for project in &projects {
            writeln!(out, "   {}: {}", project.id, project.name)?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> ConsoleResult<()> {
        self.list_projects().await?;
        match self.input.read_integer("Enter a project ID to select a project")? {
            Some(id) => self.selection.select(&self.store, id).await?,
            None => self.selection.clear(),
        }
        Ok(())
    }

    async fn update_project(&mut self) -> ConsoleResult<()> {
        let current = match self.selection.require() {
            Ok(project) => project.clone(),
            Err(err) => {
                writeln!(self.out(), "\n{err}.")?;
                return Ok(());
            }
        };

        let update = ProjectUpdate {
            name: self
                .input
                .read_line(&format!("Enter the project name [{}]", current.name))?,
            estimated_hours: self.input.read_decimal(&format!(
                "Enter the estimated hours [{}]",
                shown(&current.estimated_hours)
            ))?,
            actual_hours: self.input.read_decimal(&format!(
                "Enter the actual hours [{}]",
                shown(&current.actual_hours)
            ))?,
            difficulty: self.input.read_integer(&format!(
                "Enter the project difficulty (1-5) [{}]",
                shown(&current.difficulty)
            ))?,
            notes: self
                .input
                .read_line(&format!("Enter the project notes [{}]", shown(&current.notes)))?,
        };

        let project = editor::merge(&current, update);
        if let Err(err) = self.store.modify_project_details(&project).await {
            if err.is_not_found() {
                self.selection.clear_if_matches(project.id);
            }
            return Err(err.into());
        }
        self.selection
            .refresh_after_update(&self.store, project.id)
            .await?;
        info!(id = project.id, "project updated");
        Ok(())
    }

    async fn delete_project(&mut self) -> ConsoleResult<()> {
        self.list_projects().await?;
        let Some(id) = self
            .input
            .read_integer("Enter the ID of the project to delete")?
        else {
            writeln!(self.out(), "\nNo project ID entered; nothing was deleted.")?;
            return Ok(());
        };

        // a missing row means the project is gone either way
        match self.store.delete_project(id).await {
            Ok(()) => self.selection.clear_if_matches(id),
            Err(err @ DbError::NotFound { .. }) => {
                self.selection.clear_if_matches(id);
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
        info!(id, "project deleted");
        writeln!(self.out(), "\nProject {id} was deleted successfully.")?;
        Ok(())
    }
}

fn shown<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(String::new, |v| v.to_string())
}
