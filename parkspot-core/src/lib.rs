pub mod gateways;
pub mod radius;
pub mod store;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use parkspot_entities::{geo::*, id::*, radius::*, session::*, spot::*, time::*};
}
