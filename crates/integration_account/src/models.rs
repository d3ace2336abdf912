//! Raw account API payloads

use domain::{Protector, UserProfile};
use serde::Deserialize;

/// Body of `GET /me`
#[derive(Debug, Deserialize)]
pub(crate) struct RawMeResponse {
    user: RawUser,
    represent_protector: Option<RawProtector>,
    represent_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    user_login_id: String,
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    user_gender: String,
    #[serde(default)]
    user_phone: String,
    #[serde(default, deserialize_with = "lenient_age")]
    user_age: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawProtector {
    #[serde(default)]
    protector_name: String,
    #[serde(default)]
    protector_email: String,
}

/// Error body, `{ "message": "..." }`
#[derive(Debug, Deserialize)]
pub(crate) struct RawErrorBody {
    pub(crate) message: Option<String>,
}

impl From<RawMeResponse> for UserProfile {
    fn from(raw: RawMeResponse) -> Self {
        Self {
            login_id: raw.user.user_login_id,
            name: raw.user.user_name,
            gender: raw.user.user_gender,
            phone: raw.user.user_phone,
            age: raw.user.user_age,
            represent_protector: raw.represent_protector.map(|p| Protector {
                name: p.protector_name,
                email: p.protector_email,
            }),
            represent_address: raw.represent_address.filter(|a| !a.trim().is_empty()),
        }
    }
}

/// Ages arrive as numbers or numeric strings depending on the form that saved them
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Age>::deserialize(deserializer)? {
        Some(Age::Number(n)) => Some(n),
        Some(Age::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
