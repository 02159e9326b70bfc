pub mod http_stoppable;
pub mod stop_controller;

pub use http_stoppable::{HttpStoppable, StoppableService};
pub use stop_controller::{InvocationId, StopController, Stoppable, StoppableMethod};
