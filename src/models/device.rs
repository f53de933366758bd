use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type marker carried by every Nest thermostat in the SDM API.
pub const THERMOSTAT_TYPE: &str = "sdm.devices.types.THERMOSTAT";

const UNKNOWN_ROOM: &str = "Unknown Room";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRelation {
    pub parent: Option<String>,
    pub display_name: Option<String>,
}

/// A device record as returned by `enterprises.devices.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Resource name, `enterprises/{project}/devices/{id}`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub parent_relations: Vec<ParentRelation>,
}

impl Device {
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Substring match on the type tag.
    pub fn is_thermostat(&self) -> bool {
        self.device_type
            .as_deref()
            .is_some_and(|t| t.contains(THERMOSTAT_TYPE))
    }

    /// Display name of the room the device is assigned to.
    pub fn room_name(&self) -> &str {
        self.parent_relations
            .first()
            .and_then(|r| r.display_name.as_deref())
            .unwrap_or(UNKNOWN_ROOM)
    }

    pub fn id(&self) -> &str {
        self.name
            .as_deref()
            .and_then(|n| n.rsplit('/').next())
            .unwrap_or("")
    }

    pub fn trait_value(&self, trait_name: &str) -> Option<&serde_json::Value> {
        self.traits.get(trait_name)
    }
}
