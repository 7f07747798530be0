use dmart_domain::config::ApiConfig;
use dmart_enrollment::{
    BasicInfo, BufferedNotifier, Enrollment, RegistrationFlow, RegistrationStep,
    StaticCodeVerifier,
};

#[test]
fn full_registration_journey_with_demo_verifier() {
    let verifier = StaticCodeVerifier::default();
    let notifier = BufferedNotifier::default();
    let mut flow = RegistrationFlow::new(&verifier, &notifier);

    assert_eq!(flow.step(), RegistrationStep::Basic);

    flow.submit_basic(BasicInfo {
        name: "Sonam".to_owned(),
        email: "sonam@drukmart.bt".to_owned(),
        phone: "17234568".to_owned(),
        password: "hunter2".to_owned(),
    })
    .unwrap();
    assert_eq!(flow.step(), RegistrationStep::Otp);

    // Two bad attempts, then the stub literal.
    flow.submit_otp("0000").unwrap();
    flow.submit_otp("123").unwrap();
    assert_eq!(flow.step(), RegistrationStep::Otp);
    assert_eq!(notifier.notices().len(), 2);

    flow.submit_otp("1234").unwrap();
    assert!(flow.is_complete());
}

#[test]
fn slice_init_exposes_a_working_otp_store() {
    let slice = dmart_enrollment::init(&ApiConfig::default());
    let enrollment =
        slice.state.as_any().downcast_ref::<Enrollment>().expect("enrollment state");

    let store = enrollment.otp_store();
    let code = store.generate_code();
    store.issue("sonam@drukmart.bt", &code);

    assert!(store.verify("sonam@drukmart.bt", &code));
    assert!(!store.verify("sonam@drukmart.bt", "wrong"));
}
