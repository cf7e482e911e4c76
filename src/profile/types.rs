use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One user's medical record as the form submits it. Field names stay
/// camelCase on the wire to match the documents the web client writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalProfile {
    pub age: String,
    pub blood_group: String,
    pub gender: String,
    pub medical_history: String,
    pub allergies: String,
    pub medications: String,
    pub existing_conditions: String,
    pub last_updated: String,
    pub family_members: Vec<FamilyMember>,
}

impl MedicalProfile {
    /// Stamps the record with the current time; called on every save.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now().to_rfc3339();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyMember {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
