pub use space_control::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    space_control::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
