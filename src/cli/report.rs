use std::fmt::Display;
use std::io::Write;

use tabled::Tabled;

use crate::api::client::SdmApi;
use crate::auth::token::AccessToken;
use crate::cli::output::{write_json, write_table, UNKNOWN};
use crate::config::OutputMode;
use crate::error::AppError;
use crate::models::device::Device;
use crate::models::thermostat::ThermostatReading;

const RULE: &str = "--------------------------------";
pub const NO_DEVICES: &str = "No devices found. Check your permissions or Project ID.";
pub const NO_THERMOSTATS: &str = "No thermostats found in your account.";

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "ROOM")]
    room: String,
    #[tabled(rename = "TEMP °F")]
    fahrenheit: String,
    #[tabled(rename = "TEMP °C")]
    celsius: String,
    #[tabled(rename = "HUMIDITY %")]
    humidity: String,
    #[tabled(rename = "MODE")]
    mode: String,
    #[tabled(rename = "HVAC")]
    hvac_status: String,
    #[tabled(rename = "CONNECTIVITY")]
    connectivity: String,
    #[tabled(rename = "FAN")]
    fan_timer_mode: String,
    #[tabled(rename = "ECO")]
    eco_mode: String,
    #[tabled(rename = "DEVICE ID")]
    device_id: String,
}

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

impl From<&ThermostatReading> for ReadingRow {
    fn from(r: &ThermostatReading) -> Self {
        Self {
            room: r.name.clone(),
            fahrenheit: or_unknown(r.temperature.map(|t| format!("{:.1}", t.fahrenheit))),
            celsius: or_unknown(r.temperature.map(|t| format!("{:.1}", t.celsius))),
            humidity: or_unknown(r.humidity_percent),
            mode: or_unknown(r.mode.as_deref()),
            hvac_status: or_unknown(r.hvac_status.as_deref()),
            connectivity: or_unknown(r.connectivity.as_deref()),
            fan_timer_mode: or_unknown(r.fan_timer_mode.as_deref()),
            eco_mode: or_unknown(r.eco_mode.as_deref()),
            device_id: r.device_id.clone(),
        }
    }
}

/// Readings for every thermostat in `devices`, in input order.
pub fn thermostat_readings(devices: &[Device]) -> Vec<ThermostatReading> {
    devices
        .iter()
        .filter(|d| d.is_thermostat())
        .map(ThermostatReading::from_device)
        .collect()
}

fn write_block<W: Write>(out: &mut W, r: &ThermostatReading) -> Result<(), AppError> {
    let temperature = match r.temperature {
        Some(t) => format!("{:.1}°F ({:.1}°C)", t.fahrenheit, t.celsius),
        None => UNKNOWN.to_string(),
    };
    let humidity = match r.humidity_percent {
        Some(h) => format!("{}%", h),
        None => UNKNOWN.to_string(),
    };

    writeln!(out)?;
    writeln!(out, "Device: {}", r.name)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Temperature: {}", temperature)?;
    writeln!(out, "Humidity:    {}", humidity)?;
    writeln!(out, "System Mode: {}", or_unknown(r.mode.as_deref()))?;
    writeln!(out, "HVAC Status: {}", or_unknown(r.hvac_status.as_deref()))?;
    writeln!(out, "Connectivity: {}", or_unknown(r.connectivity.as_deref()))?;
    writeln!(out, "Fan Mode:    {}", or_unknown(r.fan_timer_mode.as_deref()))?;
    writeln!(out, "Eco Mode:    {}", or_unknown(r.eco_mode.as_deref()))?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Write one text block per thermostat, or a single notice when there are none.
/// Returns the number of blocks written.
pub fn render_report<W: Write>(devices: &[Device], out: &mut W) -> Result<usize, AppError> {
    let readings = thermostat_readings(devices);
    if readings.is_empty() {
        writeln!(out, "{}", NO_THERMOSTATS)?;
        return Ok(0);
    }
    for reading in &readings {
        write_block(out, reading)?;
    }
    Ok(readings.len())
}

fn render(devices: &[Device], mode: OutputMode, out: &mut impl Write) -> Result<(), AppError> {
    match mode {
        OutputMode::Text => {
            render_report(devices, out)?;
        }
        OutputMode::Table => {
            let readings = thermostat_readings(devices);
            if readings.is_empty() {
                writeln!(out, "{}", NO_THERMOSTATS)?;
            } else {
                let rows: Vec<ReadingRow> = readings.iter().map(ReadingRow::from).collect();
                write_table(out, &rows)?;
            }
        }
        OutputMode::Json => {
            let readings = thermostat_readings(devices);
            write_json(out, &serde_json::to_value(&readings)?)?;
        }
    }
    Ok(())
}

/// List devices, logging and swallowing any failure so the caller sees an empty list.
pub async fn fetch_devices(api: &SdmApi, token: &AccessToken) -> Vec<Device> {
    match api.list_devices(token).await {
        Ok(devices) => devices,
        Err(err) => {
            tracing::error!(
                error = %err,
                kind = err.error_type(),
                project_id = %api.config().project_id,
                "Error fetching devices"
            );
            Vec::new()
        }
    }
}

/// Refresh the access token, list devices and print the thermostat report.
///
/// A failed refresh ends the run before any device request is made.
pub async fn run<W: Write>(
    api: &SdmApi,
    refresh_token: &str,
    mode: OutputMode,
    out: &mut W,
) -> Result<(), AppError> {
    let text = mode == OutputMode::Text;

    if text {
        writeln!(out, "--- Nest Thermostat Query (SDM API) ---")?;
        writeln!(out, "Refreshing access token...")?;
    }
    let token = api.refresh_access_token(refresh_token).await?;

    if text {
        writeln!(out, "Querying devices...")?;
    }
    let devices = fetch_devices(api, &token).await;

    if devices.is_empty() && mode != OutputMode::Json {
        writeln!(out, "{}", NO_DEVICES)?;
        return Ok(());
    }

    render(&devices, mode, out)
}
