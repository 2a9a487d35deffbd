// Settings loading for the dashboard binary
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub endpoints: EndpointSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointSettings {
    pub base_url: String,
}

pub fn load_settings() -> anyhow::Result<DashboardSettings> {
    let settings = config::Config::builder()
        .set_default("endpoints.base_url", "http://localhost:8080")?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
