//! Example: Generating an Akamai BMP sensor.
//!
//! Run with: ROOLINK_API_KEY=... cargo run --example generate_sensor

use roolink::{BmpSensorRequest, Roolink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let api_key = std::env::var("ROOLINK_API_KEY")
        .map_err(|_| anyhow::anyhow!("set ROOLINK_API_KEY to your Roolink API key"))?;

    let client = Roolink::builder(api_key).build()?;

    // The service generates the sensor through this proxy so the sensor's
    // network fingerprint matches the IP you will submit it from.
    let proxy = std::env::var("ROOLINK_PROXY").unwrap_or_default();

    let req = BmpSensorRequest {
        app: "de.zalando.iphone".into(),
        proxy,
        ..Default::default()
    };

    println!("=== Generating iOS BMP sensor for {} ===", req.app);

    match client.generate_bmp_sensor(&req).await {
        Ok(resp) => {
            println!("Success!");
            println!("  platform: {}", resp.platform);
            println!("  deviceId: {}", resp.device_id);
            println!("  appVersion: {}", resp.app_version);
            println!(
                "  sensor: {}...",
                &resp.sensor[..64.min(resp.sensor.len())]
            );
            for cookie in &resp.cookies {
                println!("  cookie: {}={} ({})", cookie.name, cookie.value, cookie.domain);
            }
        }
        Err(e) => {
            println!("Failed: {}", e);
        }
    }

    Ok(())
}
