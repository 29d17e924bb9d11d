use anyhow::Result;
use brain_params::{
    BrainParameters, BrainParamsError, Resolution, SpaceType, MAX_STACKED_VECTOR_OBSERVATIONS,
};
use std::fs;
use tempdir::TempDir;
use test_log::test;

fn params() -> BrainParameters {
    BrainParameters::default()
        .vector_observation_size(4)
        .num_stacked_vector_observations(2)
        .vector_action_size(vec![2])
        .vector_action_descriptions(vec!["up", "down"])
        .add_camera_resolution(Resolution::new(84, 84, true))
}

#[test]
fn test_save_and_load() -> Result<()> {
    let dir = TempDir::new("brain_params")?;
    let path = dir.path().join("brain_params.yaml");

    let p = params();
    p.save(&path)?;
    let q = BrainParameters::load(&path)?;
    assert_eq!(p, q);
    Ok(())
}

#[test]
fn test_load_camel_case_keys() -> Result<()> {
    let dir = TempDir::new("brain_params")?;
    let path = dir.path().join("brain_params.yaml");
    fs::write(
        &path,
        "vectorObservationSize: 4\n\
         numStackedVectorObservations: 2\n\
         vectorActionSize: [2]\n\
         cameraResolutions:\n  \
           - width: 84\n    \
             height: 84\n    \
             blackAndWhite: true\n\
         vectorActionDescriptions: [up, down]\n\
         vectorActionSpaceType: Discrete\n",
    )?;

    let q = BrainParameters::load(&path)?;
    assert_eq!(q, params());
    assert_eq!(q.vector_action_space_type, SpaceType::Discrete);
    Ok(())
}

#[test]
fn test_load_missing_sequence_field() -> Result<()> {
    let dir = TempDir::new("brain_params")?;
    let path = dir.path().join("brain_params.yaml");
    fs::write(
        &path,
        "vector_observation_size: 4\n\
         num_stacked_vector_observations: 1\n\
         vector_action_size: [2]\n\
         vector_action_descriptions: []\n\
         vector_action_space_type: Discrete\n",
    )?;

    let err = BrainParameters::load(&path).unwrap_err();
    assert!(err.to_string().contains("camera_resolutions"));
    Ok(())
}

#[test]
fn test_load_rejects_invalid() -> Result<()> {
    let dir = TempDir::new("brain_params")?;
    let path = dir.path().join("brain_params.yaml");

    params().num_stacked_vector_observations(51).save(&path)?;
    let err = BrainParameters::load(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BrainParamsError>(),
        Some(&BrainParamsError::InvalidNumStackedVectorObservations(51))
    );
    Ok(())
}

#[test]
fn test_load_rejects_action_dim_overflow() -> Result<()> {
    let dir = TempDir::new("brain_params")?;
    let path = dir.path().join("brain_params.yaml");
    fs::write(
        &path,
        "vector_observation_size: 4\n\
         num_stacked_vector_observations: 1\n\
         vector_action_size: [18446744073709551615, 1]\n\
         camera_resolutions: []\n\
         vector_action_descriptions: [throttle]\n\
         vector_action_space_type: Continuous\n",
    )?;

    let err = BrainParameters::load(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BrainParamsError>(),
        Some(&BrainParamsError::ActionDimOverflow)
    );
    Ok(())
}

#[test]
fn test_num_stacked_error_message() {
    let msg = BrainParamsError::InvalidNumStackedVectorObservations(0).to_string();
    assert_eq!(
        msg,
        format!(
            "Number of stacked vector observations must be in [1, {}], got 0",
            MAX_STACKED_VECTOR_OBSERVATIONS
        )
    );
}
