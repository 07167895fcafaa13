use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Shared SDK configuration for every AWS adapter. Credentials come from the
/// default provider chain.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    loader.load().await
}
