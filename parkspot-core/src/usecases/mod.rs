mod directions;
mod error;
mod purge_expired_spots;
mod select_distance;
mod select_spot;
mod unpark;

#[cfg(test)]
pub mod tests;

pub use self::{
    directions::*, error::Error, purge_expired_spots::*, select_distance::*, select_spot::*,
    unpark::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, store::SpotStore};
}
