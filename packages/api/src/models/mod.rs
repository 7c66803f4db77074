//! Wire schemas for every backend entity.

mod email;
mod regulation;
mod report;
mod user;

pub use email::{EmailPayload, NotificationEmail, SentEmail};
pub use regulation::{Category, Regulation, ReportRef};
pub use report::{GlobalPrompt, ImportAck, Report};
pub use user::{LoginRequest, User, UserPayload};

use serde::{Deserialize, Deserializer};

/// Identifiers the backend sends either as numbers or as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Num(i64),
    Str(String),
}

impl From<RawKey> for String {
    fn from(key: RawKey) -> Self {
        match key {
            RawKey::Num(n) => n.to_string(),
            RawKey::Str(s) => s,
        }
    }
}

pub(crate) fn key<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    RawKey::deserialize(d).map(String::from)
}

pub(crate) fn optional_key<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawKey>::deserialize(d)?.map(String::from))
}
