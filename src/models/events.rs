//! Application events for communication between the UI loop and request tasks

use crossterm::event::KeyEvent;

use crate::errors::PumpError;
use crate::models::pipeline::Pipeline;

#[derive(Debug)]
pub enum AppEvent {
    // List events
    PipelinesFetched(Vec<Pipeline>),
    PipelinesFetchFailed(PumpError),

    // Mutation events
    PipelineCreated(Pipeline),
    PipelineRemoved(Pipeline),
    MutationFailed(String, PumpError), // action name, error

    // General events
    Input(KeyEvent),
    Tick,
}
