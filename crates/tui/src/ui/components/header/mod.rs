mod header_component;
mod state;

pub use header_component::HeaderComponent;
pub use state::{NavState, Overlay};
