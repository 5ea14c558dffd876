pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod page;
pub mod render;

pub use api::{ApiClient, ApiResponse, Endpoint, Outcome};
pub use config::Settings;
pub use error::{ClientError, ClientResult};
pub use input::{ArgInput, InputSource, RequestNumber, StdinInput};
pub use page::PrimePage;
pub use render::{BufferSink, ResultSink, StdoutSink};
