//! Inputs and outputs of a decision process.
use crate::{BrainParamsError, Resolution, SpaceType};
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Upper bound of [`BrainParameters::num_stacked_vector_observations`].
pub const MAX_STACKED_VECTOR_OBSERVATIONS: usize = 50;

/// Holds information about the brain. It defines what are the inputs and
/// outputs of the decision process.
///
/// Fields are public so that a configuration host can read and write them
/// directly. [`Clone`] gives a deep copy: the cloned sequences never share
/// storage with the original.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct BrainParameters {
    /// If continuous, the length of the float vector that represents the state.
    /// If discrete, the number of possible values the state can take.
    #[serde(alias = "vectorObservationSize")]
    pub vector_observation_size: usize,

    /// Number of consecutive vector observations concatenated into one input,
    /// in `[1, 50]`.
    #[serde(alias = "numStackedVectorObservations")]
    pub num_stacked_vector_observations: usize,

    /// If continuous, the dimension of each action branch.
    /// If discrete, the number of possible values of each action branch.
    #[serde(alias = "vectorActionSize")]
    pub vector_action_size: Vec<usize>,

    /// Resolutions of the visual observations.
    #[serde(alias = "cameraResolutions")]
    pub camera_resolutions: Vec<Resolution>,

    /// Labels of the actions.
    #[serde(alias = "vectorActionDescriptions")]
    pub vector_action_descriptions: Vec<String>,

    /// Defines if the action is discrete or continuous.
    #[serde(alias = "vectorActionSpaceType")]
    pub vector_action_space_type: SpaceType,
}

impl Default for BrainParameters {
    fn default() -> Self {
        Self {
            vector_observation_size: 1,
            num_stacked_vector_observations: 1,
            vector_action_size: vec![1],
            camera_resolutions: vec![],
            vector_action_descriptions: vec![],
            vector_action_space_type: SpaceType::Discrete,
        }
    }
}

impl BrainParameters {
    /// Sets the size of the vector observation.
    pub fn vector_observation_size(mut self, v: usize) -> Self {
        self.vector_observation_size = v;
        self
    }

    /// Sets the number of stacked vector observations.
    pub fn num_stacked_vector_observations(mut self, v: usize) -> Self {
        self.num_stacked_vector_observations = v;
        self
    }

    /// Sets the sizes of action branches.
    pub fn vector_action_size(mut self, v: Vec<usize>) -> Self {
        self.vector_action_size = v;
        self
    }

    /// Sets the camera resolutions.
    pub fn camera_resolutions(mut self, v: Vec<Resolution>) -> Self {
        self.camera_resolutions = v;
        self
    }

    /// Appends a camera resolution.
    pub fn add_camera_resolution(mut self, v: Resolution) -> Self {
        self.camera_resolutions.push(v);
        self
    }

    /// Sets the labels of the actions.
    pub fn vector_action_descriptions<T: Into<String>>(mut self, v: Vec<T>) -> Self {
        self.vector_action_descriptions = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the type of the action space.
    pub fn vector_action_space_type(mut self, v: SpaceType) -> Self {
        self.vector_action_space_type = v;
        self
    }

    /// Length of the input vector after stacking observations.
    ///
    /// Returns `None` if the length does not fit in `usize`.
    pub fn stacked_vector_observation_size(&self) -> Option<usize> {
        self.vector_observation_size.checked_mul(self.num_stacked_vector_observations)
    }

    /// Number of action branches.
    pub fn n_action_branches(&self) -> usize {
        self.vector_action_size.len()
    }

    /// Sum of the sizes of action branches.
    ///
    /// For continuous actions this is the length of the action vector,
    /// for discrete actions the total number of choices over all branches.
    /// Returns `None` if the sum does not fit in `usize`.
    pub fn action_dim(&self) -> Option<usize> {
        self.vector_action_size
            .iter()
            .try_fold(0usize, |acc, &size| acc.checked_add(size))
    }

    /// Number of visual observations.
    pub fn n_visual_observations(&self) -> usize {
        self.camera_resolutions.len()
    }

    /// Checks that the parameters describe a consistent space.
    ///
    /// The first violation found is returned. An empty list of action
    /// descriptions is accepted, otherwise there must be one label per branch
    /// for discrete actions and one label per dimension for continuous actions.
    pub fn validate(&self) -> Result<(), BrainParamsError> {
        if self.vector_observation_size == 0 {
            return Err(BrainParamsError::InvalidVectorObservationSize(
                self.vector_observation_size,
            ));
        }

        if !(1..=MAX_STACKED_VECTOR_OBSERVATIONS).contains(&self.num_stacked_vector_observations)
        {
            return Err(BrainParamsError::InvalidNumStackedVectorObservations(
                self.num_stacked_vector_observations,
            ));
        }

        if self.stacked_vector_observation_size().is_none() {
            return Err(BrainParamsError::StackedVectorObservationOverflow {
                size: self.vector_observation_size,
                n_stack: self.num_stacked_vector_observations,
            });
        }

        if self.vector_action_size.is_empty() {
            return Err(BrainParamsError::EmptyVectorActionSize);
        }

        if let Some((branch, &size)) = self
            .vector_action_size
            .iter()
            .enumerate()
            .find(|&(_, &size)| size == 0)
        {
            return Err(BrainParamsError::InvalidVectorActionSize { branch, size });
        }

        let action_dim = self.action_dim().ok_or(BrainParamsError::ActionDimOverflow)?;

        if let Some((index, res)) = self
            .camera_resolutions
            .iter()
            .enumerate()
            .find(|(_, res)| !res.is_valid())
        {
            return Err(BrainParamsError::InvalidResolution {
                index,
                width: res.width,
                height: res.height,
            });
        }

        if !self.vector_action_descriptions.is_empty() {
            let expected = match self.vector_action_space_type {
                SpaceType::Discrete => self.n_action_branches(),
                SpaceType::Continuous => action_dim,
            };
            let actual = self.vector_action_descriptions.len();
            if expected != actual {
                return Err(BrainParamsError::ActionDescriptionsMismatch { expected, actual });
            }
        }

        Ok(())
    }

    /// Loads [`BrainParameters`] from YAML file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b: Self = serde_yaml::from_reader(rdr)?;
        b.validate()?;
        info!("Load brain parameters from {}", path.display());
        Ok(b)
    }

    /// Saves [`BrainParameters`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save brain parameters into {}", path.display());
        Ok(())
    }
}
