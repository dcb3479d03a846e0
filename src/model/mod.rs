mod endpoint;
mod fixture;
mod league;
mod standing;

pub use endpoint::*;
pub use fixture::*;
pub use league::*;
pub use standing::*;
