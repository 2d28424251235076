use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const COLLECTION: &str = "reservation";

pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub party_size: i64,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub party_size: u8,
    pub occasion: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<ReservationCreate> for Reservation {
    type Error = AppError;

    fn try_from(payload: ReservationCreate) -> Result<Self, Self::Error> {
        if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&payload.party_size) {
            return Err(AppError::Validation(format!(
                "party_size must be between {MIN_PARTY_SIZE} and {MAX_PARTY_SIZE}, got {}",
                payload.party_size
            )));
        }

        let party_size = u8::try_from(payload.party_size)
            .map_err(|e| AppError::Validation(format!("invalid party_size: {e}")))?;

        Ok(Reservation {
            name: payload.name,
            phone: payload.phone,
            date: payload.date,
            time: payload.time,
            party_size,
            occasion: payload.occasion,
            notes: payload.notes,
        })
    }
}
