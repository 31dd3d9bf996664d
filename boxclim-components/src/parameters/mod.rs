//! Parameter structs for the box model closures.
//!
//! Every struct implements [`Default`] with the reference values of the model and uses
//! `#[serde(default)]`, so configuration files only need to list the values they change.

mod geometry;
mod ice;
mod mixing;
mod overturning;
mod relaxation;

pub use geometry::{BoxGeometry, SeaLevelParameters};
pub use ice::IceParameters;
pub use mixing::{DensityDifferenceParameters, MixingParameters};
pub use overturning::OverturningParameters;
pub use relaxation::RelaxationParameters;

use serde::{Deserialize, Serialize};

/// All parameters of the box model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxModelParameters {
    pub geometry: BoxGeometry,
    pub relaxation: RelaxationParameters,
    pub overturning: OverturningParameters,
    pub mixing: MixingParameters,
    pub ice: IceParameters,
    pub sea_level: SeaLevelParameters,
}
