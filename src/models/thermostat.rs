use serde::Serialize;

use super::device::Device;

/// SDM trait names read from a thermostat.
pub mod traits {
    pub const TEMPERATURE: &str = "sdm.devices.traits.Temperature";
    pub const HUMIDITY: &str = "sdm.devices.traits.Humidity";
    pub const THERMOSTAT_MODE: &str = "sdm.devices.traits.ThermostatMode";
    pub const THERMOSTAT_HVAC: &str = "sdm.devices.traits.ThermostatHvac";
    pub const CONNECTIVITY: &str = "sdm.devices.traits.Connectivity";
    pub const FAN: &str = "sdm.devices.traits.Fan";
    pub const THERMOSTAT_ECO: &str = "sdm.devices.traits.ThermostatEco";
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Round to one decimal place using the exact binary value, ties to even.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub celsius: f64,
    pub fahrenheit: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius: round1(celsius),
            fahrenheit: round1(celsius_to_fahrenheit(celsius)),
        }
    }
}

/// Snapshot of one thermostat. `None` means the trait or attribute was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermostatReading {
    pub name: String,
    pub device_id: String,
    pub device_type: Option<String>,
    pub temperature: Option<Temperature>,
    pub humidity_percent: Option<f64>,
    pub mode: Option<String>,
    pub hvac_status: Option<String>,
    pub connectivity: Option<String>,
    pub fan_timer_mode: Option<String>,
    pub eco_mode: Option<String>,
}

fn attr_str(device: &Device, trait_name: &str, attribute: &str) -> Option<String> {
    device
        .trait_value(trait_name)
        .and_then(|t| t.get(attribute))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

fn attr_f64(device: &Device, trait_name: &str, attribute: &str) -> Option<f64> {
    device
        .trait_value(trait_name)
        .and_then(|t| t.get(attribute))
        .and_then(|v| v.as_f64())
}

impl ThermostatReading {
    pub fn from_device(device: &Device) -> Self {
        Self {
            name: device.room_name().to_string(),
            device_id: device.id().to_string(),
            device_type: device.device_type.clone(),
            temperature: attr_f64(device, traits::TEMPERATURE, "ambientTemperatureCelsius")
                .map(Temperature::from_celsius),
            humidity_percent: attr_f64(device, traits::HUMIDITY, "ambientHumidityPercent"),
            mode: attr_str(device, traits::THERMOSTAT_MODE, "mode"),
            hvac_status: attr_str(device, traits::THERMOSTAT_HVAC, "status"),
            connectivity: attr_str(device, traits::CONNECTIVITY, "status"),
            fan_timer_mode: attr_str(device, traits::FAN, "timerMode"),
            eco_mode: attr_str(device, traits::THERMOSTAT_ECO, "mode"),
        }
    }
}
