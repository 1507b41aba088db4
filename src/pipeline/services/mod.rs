//! Application services for pipeline orchestration.

mod error;
mod pipeline;
mod requests;
mod tasks;

pub use error::{PipelineError, PipelineErrorKind, PipelineResult};
pub use pipeline::PipelineService;
pub use requests::{
    AnnotateApplicationRequest, ReviewTaskRequest, SendTaskRequest, SetApplicationStatusRequest,
    SubmitApplicationRequest, SubmitTaskRequest,
};
