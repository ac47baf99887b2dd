use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use small_numerics::utils::{logger, validation::Validate};
use small_numerics::{handle_event, ApiResponse, LambdaConfig};

async fn function_handler(
    config: &LambdaConfig,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let (payload, context) = event.into_parts();
    Ok(handle_event(
        config.function,
        &payload,
        config,
        &context.request_id,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 創建Lambda配置
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!(
        function = %config.function,
        max_factorial_input = config.max_factorial_input,
        "Starting numerics Lambda function"
    );

    let config = &config;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(config, event).await
    }))
    .await
}
