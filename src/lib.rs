/// Space Control - a voice skill that tells you how many astronauts are in space.
///
/// This crate implements the Lambda behind the skill. Count requests use a
/// progressive response:
/// 1. The live count is fetched from a public API on a detached task
/// 2. A filler utterance is pushed through the platform's directive service
/// 3. After a fixed delay the answer is spoken from whatever count arrived
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the directive service and the astros API
/// - Tokio for async runtime and the delay gate
/// - tracing for structured `CloudWatch` logs
///
/// # Example
///
/// ```no_run
/// use space_control::core::config::AppConfig;
/// use space_control::core::models::{PlatformContext, Request, RequestKind};
/// use space_control::router::Skill;
///
/// #[tokio::main]
/// async fn main() {
///     space_control::setup_logging();
///
///     let config = AppConfig::default();
///     let skill = Skill::from_config(&config);
///
///     let request = Request::new(
///         RequestKind::GetCount,
///         "amzn1.echo-api.request.demo",
///         PlatformContext {
///             api_endpoint: Some("https://api.amazonalexa.com".to_string()),
///             api_access_token: Some("token".to_string()),
///         },
///     );
///
///     let reply = skill.handle(&request).await;
///     println!("{}", reply.speech_text);
/// }
/// ```
// Module declarations
pub mod alexa;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod progressive;
pub mod router;

pub use errors::SkillError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG`. Calling it again
/// after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// space_control::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
