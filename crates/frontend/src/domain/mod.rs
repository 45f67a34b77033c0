pub mod plans;
pub mod students;
pub mod turmas;
