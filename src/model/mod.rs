mod api;
mod chip;
mod season;
mod standing;
mod summary;

pub use api::*;
pub use chip::*;
pub use season::*;
pub use standing::*;
pub use summary::*;
