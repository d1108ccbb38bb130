pub use self::{board::*, piece::*, square::*, square_pool::*, vec3::*};

pub(crate) mod board;
pub(crate) mod piece;
pub(crate) mod square;
pub(crate) mod square_pool;
pub(crate) mod vec3;
