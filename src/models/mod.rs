pub mod device;
pub mod thermostat;
