use dmart_domain::config::ApiConfig;
use dmart_domain::registry::{FeatureSlice, InitializedSlice};
use dmart_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct DummySlice {
    label: &'static str,
}

impl FeatureSlice for DummySlice {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slice_is_retrievable_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(DummySlice { label: "dummy" }))
        .build()
        .unwrap();

    let slice = state.try_get_slice::<DummySlice>().unwrap();
    assert_eq!(slice.label, "dummy");
    assert_eq!(state.slice_names().count(), 1);
}

#[test]
fn config_and_mailer_extract_as_substates() {
    use axum::extract::FromRef;
    use dmart_mailer::Mailer;

    let mut config = ApiConfig::default();
    config.server.port = 9999;

    let state = ApiState::builder().config(config).build().unwrap();

    let extracted = ApiConfig::from_ref(&state);
    assert_eq!(extracted.server.port, 9999);

    // The default mailer handle clones out of the state as well.
    let _mailer = Mailer::from_ref(&state);
}

#[test]
fn missing_slice_is_an_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let err = state.try_get_slice::<DummySlice>().unwrap_err();
    assert!(matches!(err, ApiStateError::MissingSlice { .. }));
}
