use bitdefender_msp::utils::logger::setup_logger;

#[test]
fn test_setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    tracing::info!("logger installed");
}
