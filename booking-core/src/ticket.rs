use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One flight reservation. `id` is caller-assigned and intentionally not
/// checked for uniqueness on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: i64,
    pub flight_name: String,
    pub flight_date: NaiveDate,
    #[serde(with = "flight_time")]
    pub flight_time: NaiveTime,
    pub destination: String,
}

/// Wire format for `flight_time` is "HH:MM"; chrono's default NaiveTime
/// serde would add seconds.
mod flight_time {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Ticket {
        Ticket {
            id: 1,
            flight_name: "AA123".to_string(),
            flight_date: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            flight_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            destination: "New York".to_string(),
        }
    }

    #[test]
    fn serializes_to_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "flight_name": "AA123",
                "flight_date": "2025-10-15",
                "flight_time": "14:30",
                "destination": "New York"
            })
        );
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let ticket: Ticket = serde_json::from_value(json!({
            "id": 1,
            "flight_name": "AA123",
            "flight_date": "2025-10-15",
            "flight_time": "14:30",
            "destination": "New York"
        }))
        .unwrap();
        assert_eq!(ticket, sample());
    }

    #[test]
    fn rejects_time_with_seconds() {
        let result: Result<Ticket, _> = serde_json::from_value(json!({
            "id": 1,
            "flight_name": "AA123",
            "flight_date": "2025-10-15",
            "flight_time": "14:30:00",
            "destination": "New York"
        }));
        assert!(result.is_err());
    }
}
