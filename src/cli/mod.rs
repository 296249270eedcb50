pub mod orchestration;

pub use orchestration::{run_assign_workflow, AssignWorkflowArgs, WorkflowResult};
