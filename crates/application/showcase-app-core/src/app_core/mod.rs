pub mod events;
pub mod reducer;

pub use events::{DomainEvent, SimRunEvent};
pub use reducer::reduce;
