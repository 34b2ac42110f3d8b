mod departure;
mod route;
mod shape;
mod stop;

pub use departure::*;
pub use route::*;
pub use shape::*;
pub use stop::*;
