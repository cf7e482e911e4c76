//! Firestore REST implementation of the profile store.
//!
//! Documents live under the `medicalForms` collection, one per user id,
//! encoded into Firestore's typed `fields` representation. All profile
//! fields are strings on the form, so the mapping stays flat.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};

use super::store::{ProfileStore, StoreError};
use super::types::{FamilyMember, MedicalProfile};
use crate::config::FirestoreConfig;

const COLLECTION: &str = "medicalForms";

pub struct FirestoreStore {
    http: Client,
    base_url: String,
    api_key: String,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        let base_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            config.project
        );
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    fn document_url(&self, uid: &str) -> String {
        format!("{}/{}/{}?key={}", self.base_url, COLLECTION, uid, self.api_key)
    }
}

#[async_trait]
impl ProfileStore for FirestoreStore {
    async fn fetch(&self, uid: &str) -> Result<Option<MedicalProfile>, StoreError> {
        let response = self
            .http
            .get(self.document_url(uid))
            .send()
            .await
            .map_err(|source| StoreError::Backend(source.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Backend(format!(
                "GET {COLLECTION}/{uid} returned {status}"
            )));
        }

        let document: Value = response
            .json()
            .await
            .map_err(|source| StoreError::Decode(source.to_string()))?;
        decode_document(&document).map(Some)
    }

    async fn save(&self, uid: &str, profile: &MedicalProfile) -> Result<(), StoreError> {
        let body = json!({ "fields": encode_profile(profile) });
        let response = self
            .http
            .patch(self.document_url(uid))
            .json(&body)
            .send()
            .await
            .map_err(|source| StoreError::Backend(source.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Backend(format!(
                "PATCH {COLLECTION}/{uid} returned {status}"
            )));
        }
        Ok(())
    }
}

fn string_value(text: &str) -> Value {
    json!({ "stringValue": text })
}

fn encode_member(member: &FamilyMember) -> Value {
    let mut fields = Map::new();
    fields.insert("name".to_string(), string_value(&member.name));
    fields.insert(
        "relationship".to_string(),
        string_value(&member.relationship),
    );
    fields.insert("phone".to_string(), string_value(&member.phone));
    if let Some(email) = &member.email {
        fields.insert("email".to_string(), string_value(email));
    }
    if let Some(address) = &member.address {
        fields.insert("address".to_string(), string_value(address));
    }
    json!({ "mapValue": { "fields": fields } })
}

pub(crate) fn encode_profile(profile: &MedicalProfile) -> Value {
    let members: Vec<Value> = profile.family_members.iter().map(encode_member).collect();
    json!({
        "age": string_value(&profile.age),
        "bloodGroup": string_value(&profile.blood_group),
        "gender": string_value(&profile.gender),
        "medicalHistory": string_value(&profile.medical_history),
        "allergies": string_value(&profile.allergies),
        "medications": string_value(&profile.medications),
        "existingConditions": string_value(&profile.existing_conditions),
        "lastUpdated": string_value(&profile.last_updated),
        "familyMembers": { "arrayValue": { "values": members } },
    })
}

fn field_str(fields: &Value, name: &str) -> String {
    fields[name]["stringValue"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

fn field_str_opt(fields: &Value, name: &str) -> Option<String> {
    fields[name]["stringValue"].as_str().map(str::to_string)
}

fn decode_member(value: &Value) -> FamilyMember {
    let fields = &value["mapValue"]["fields"];
    FamilyMember {
        name: field_str(fields, "name"),
        relationship: field_str(fields, "relationship"),
        phone: field_str(fields, "phone"),
        email: field_str_opt(fields, "email"),
        address: field_str_opt(fields, "address"),
    }
}

pub(crate) fn decode_document(document: &Value) -> Result<MedicalProfile, StoreError> {
    let fields = document
        .get("fields")
        .ok_or_else(|| StoreError::Decode("document has no fields".to_string()))?;

    let family_members = fields["familyMembers"]["arrayValue"]["values"]
        .as_array()
        .map(|values| values.iter().map(decode_member).collect())
        .unwrap_or_default();

    Ok(MedicalProfile {
        age: field_str(fields, "age"),
        blood_group: field_str(fields, "bloodGroup"),
        gender: field_str(fields, "gender"),
        medical_history: field_str(fields, "medicalHistory"),
        allergies: field_str(fields, "allergies"),
        medications: field_str(fields, "medications"),
        existing_conditions: field_str(fields, "existingConditions"),
        last_updated: field_str(fields, "lastUpdated"),
        family_members,
    })
}
