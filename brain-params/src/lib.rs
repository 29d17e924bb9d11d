#![warn(missing_docs)]
//! Descriptors of the observation and action spaces of a brain.
//!
//! [`BrainParameters`] tells a decision process the shape of the inputs it
//! receives from an agent and of the outputs it has to produce.
//!
//! ```
//! use brain_params::{BrainParameters, Resolution, SpaceType};
//!
//! let params = BrainParameters::default()
//!     .vector_observation_size(8)
//!     .num_stacked_vector_observations(3)
//!     .vector_action_size(vec![2])
//!     .vector_action_space_type(SpaceType::Continuous)
//!     .add_camera_resolution(Resolution::new(84, 84, true));
//!
//! assert!(params.validate().is_ok());
//! assert_eq!(params.stacked_vector_observation_size(), Some(24));
//! ```
pub mod error;
pub use error::BrainParamsError;

mod space;
pub use space::SpaceType;

mod resolution;
pub use resolution::Resolution;

mod brain_params;
pub use brain_params::{BrainParameters, MAX_STACKED_VECTOR_OBSERVATIONS};
