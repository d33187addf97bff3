#[macro_use]
extern crate log;

mod init_session;
mod locate_user;
mod open_directions;
mod unpark;

pub mod prelude {
    pub use super::{init_session::*, locate_user::*, open_directions::*, unpark::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use error::AppError;
pub(crate) use parkspot_core::{entities::*, gateways, store::SpotStore, usecases};

#[cfg(test)]
pub(crate) mod tests;
