//! Web sensor, pixel, challenge and script-parse operations.
//!
//! These all live on the web service base URL. A typical flow is
//! [`parse_script`](Roolink::parse_script) once per Akamai script version,
//! then [`generate_web_sensor`](Roolink::generate_web_sensor) with the parsed
//! data for each `_abck` update.

use crate::error::Result;
use crate::models::{
    PixelRequest, PixelResponse, SbsdRequest, SbsdResponse, ScriptData, SecCptRequest,
    SecCptResponse, WebSensorRequest, WebSensorResponse,
};
use crate::Roolink;

impl Roolink {
    /// Generate an Akamai web sensor.
    pub async fn generate_web_sensor(&self, req: &WebSensorRequest) -> Result<WebSensorResponse> {
        let url = format!("{}/api/v1/sensor", self.web_base_url());
        self.post_json(&url, req).await
    }

    /// Generate pixel sensor data.
    pub async fn generate_pixel(&self, req: &PixelRequest) -> Result<PixelResponse> {
        let url = format!("{}/api/v1/pixel", self.web_base_url());
        self.post_json(&url, req).await
    }

    /// Solve a sec-cpt crypto challenge.
    pub async fn solve_sec_cpt(&self, req: &SecCptRequest) -> Result<SecCptResponse> {
        let url = format!("{}/api/v1/sec-cpt", self.web_base_url());
        self.post_json(&url, req).await
    }

    /// Solve an SBSD challenge.
    pub async fn solve_sbsd(&self, req: &SbsdRequest) -> Result<SbsdResponse> {
        let url = format!("{}/api/v1/sbsd", self.web_base_url());
        self.post_json(&url, req).await
    }

    /// Parse an Akamai script and return its configuration data.
    ///
    /// Takes the raw script body as served by the target site and posts it
    /// verbatim (`text/plain`, not JSON).
    pub async fn parse_script(&self, script: impl Into<Vec<u8>>) -> Result<ScriptData> {
        let url = format!("{}/api/v1/parse", self.web_base_url());
        let resp = self.post_raw(&url, script.into(), "text/plain").await?;
        Self::parse_response(resp).await
    }
}
