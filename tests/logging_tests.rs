use space_control::setup_logging;

#[test]
fn test_logging_setup() {
    // Installing the subscriber must not panic, even when repeated
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
