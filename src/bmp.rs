//! BMP (mobile app) sensor generation.

use crate::error::Result;
use crate::models::{BmpSensorRequest, BmpSensorResponse};
use crate::Roolink;

impl Roolink {
    /// Generate an Akamai BMP sensor for a mobile app.
    ///
    /// The response carries the sensor along with the device identity it was
    /// generated for; pass the returned `device_id` back in follow-up
    /// requests to keep generating sensors for the same device.
    pub async fn generate_bmp_sensor(&self, req: &BmpSensorRequest) -> Result<BmpSensorResponse> {
        let url = format!("{}/api/v1/sensor", self.bmp_base_url());
        self.post_json(&url, req).await
    }
}
