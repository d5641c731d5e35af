mod error;

pub use error::AppError;
pub use tri_state::Tri;
