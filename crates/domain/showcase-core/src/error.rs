use thiserror::Error;

/// Everything that can go wrong in the demo. None of these are fatal; each
/// degrades to a static informational view or a disabled control.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DemoError {
    #[error("step requires {0} from an earlier step")]
    MissingPrerequisite(&'static str),

    #[error("app '{0}' is not in the catalog")]
    UnknownApp(String),

    #[error("base revenue must be a positive number")]
    InvalidRevenue,

    #[error("another simulated operation is already running")]
    OperationInFlight,
}
