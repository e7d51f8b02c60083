// Services module for business logic
pub mod folder_creator;
pub mod observer;
pub mod orchestrator;
