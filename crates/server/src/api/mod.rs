mod departures;
mod shapes;
mod stops;

pub use departures::*;
pub use shapes::*;
pub use stops::*;
