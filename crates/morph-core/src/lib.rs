#![deny(missing_docs)]
#![doc = "Text configuration layer of the Morph registration engine: the \
energy-term name registry, ordered parameter lists, and the naming and \
configuration contract every polymorphic component implements."]

pub mod energy;
pub mod errors;
pub mod object;
pub mod params;
pub mod text;

pub use energy::{EnergyGroup, EnergyKind};
pub use errors::{ParseValueError, UnknownEnergyName};
pub use object::{Configurable, Named};
pub use params::{ParameterEntry, ParameterList};
pub use text::{from_text, to_text, TextFormat};
