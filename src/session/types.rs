use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Session counter as reported by the tracker. Anything that is not a
/// non-negative integer is kept as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SessionNumber {
    Known(u64),
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for SessionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_u64()
            .map(SessionNumber::Known)
            .unwrap_or(SessionNumber::Unknown))
    }
}

impl Serialize for SessionNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SessionNumber::Known(n) => serializer.serialize_u64(*n),
            SessionNumber::Unknown => serializer.serialize_str("?"),
        }
    }
}

/// `null` decodes to the field default, like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Usage record for one session. Read once, never mutated.
///
/// Trackers disagree on a few key names, so both spellings are accepted and
/// the primary one wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SessionData {
    #[serde(default)]
    pub(crate) session_number: SessionNumber,
    #[serde(default)]
    pub(crate) primary_model: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) remaining_seconds: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) message_count: u64,
    #[serde(default)]
    pub(crate) tokens: Option<u64>,
    #[serde(default)]
    pub(crate) total_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) cost: Option<f64>,
    #[serde(default)]
    pub(crate) total_cost: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) active: bool,
    #[serde(default)]
    pub(crate) session_end_time: Option<String>,
}

impl SessionData {
    pub(crate) fn model_id(&self) -> Option<&str> {
        self.primary_model.as_deref().or(self.model.as_deref())
    }

    pub(crate) fn token_count(&self) -> u64 {
        self.tokens.or(self.total_tokens).unwrap_or(0)
    }

    pub(crate) fn cost_usd(&self) -> f64 {
        self.cost.or(self.total_cost).unwrap_or(0.0)
    }

    /// End time to show instead of the countdown, if the tracker supplied one
    pub(crate) fn end_time(&self) -> Option<&str> {
        self.session_end_time
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let json = r#"{
            "session_number": 119,
            "primary_model": "claude-sonnet-4-20250514",
            "remaining_seconds": 7200,
            "message_count": 682,
            "tokens": 64336669,
            "cost": 25.47,
            "active": true,
            "data_source": "live",
            "session_end_time": "14:30"
        }"#;
        let session: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_number, SessionNumber::Known(119));
        assert_eq!(session.model_id(), Some("claude-sonnet-4-20250514"));
        assert_eq!(session.remaining_seconds, 7200);
        assert_eq!(session.message_count, 682);
        assert_eq!(session.token_count(), 64_336_669);
        assert!((session.cost_usd() - 25.47).abs() < f64::EPSILON);
        assert!(session.active);
        assert_eq!(session.end_time(), Some("14:30"));
    }

    #[test]
    fn empty_object_uses_defaults() {
        let session: SessionData = serde_json::from_str("{}").unwrap();
        assert_eq!(session.session_number, SessionNumber::Unknown);
        assert!(session.model_id().is_none());
        assert_eq!(session.remaining_seconds, 0);
        assert_eq!(session.token_count(), 0);
        assert_eq!(session.cost_usd(), 0.0);
        assert!(!session.active);
        assert!(session.end_time().is_none());
    }

    #[test]
    fn accepts_alternate_field_names() {
        let json = r#"{"model":"claude-opus-4-1","total_tokens":4567890,"total_cost":12.34}"#;
        let session: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(session.model_id(), Some("claude-opus-4-1"));
        assert_eq!(session.token_count(), 4_567_890);
        assert!((session.cost_usd() - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn primary_spellings_win_when_both_present() {
        let json = r#"{
            "primary_model": "claude-opus-4-1-20250805",
            "model": "claude-haiku-3",
            "tokens": 10,
            "total_tokens": 20,
            "cost": 1.0,
            "total_cost": 2.0
        }"#;
        let session: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(session.model_id(), Some("claude-opus-4-1-20250805"));
        assert_eq!(session.token_count(), 10);
        assert_eq!(session.cost_usd(), 1.0);
    }

    #[test]
    fn non_numeric_session_number_is_unknown() {
        let session: SessionData = serde_json::from_str(r#"{"session_number":"?"}"#).unwrap();
        assert_eq!(session.session_number, SessionNumber::Unknown);
        let session: SessionData = serde_json::from_str(r#"{"session_number":null}"#).unwrap();
        assert_eq!(session.session_number, SessionNumber::Unknown);
    }

    #[test]
    fn null_end_time_and_empty_end_time_are_absent() {
        let session: SessionData =
            serde_json::from_str(r#"{"session_end_time":null}"#).unwrap();
        assert!(session.end_time().is_none());
        let session: SessionData = serde_json::from_str(r#"{"session_end_time":""}"#).unwrap();
        assert!(session.end_time().is_none());
    }

    #[test]
    fn null_values_decode_to_defaults() {
        let json = r#"{
            "primary_model": "claude-sonnet-4",
            "active": null,
            "message_count": null,
            "remaining_seconds": null,
            "tokens": null,
            "cost": null
        }"#;
        let session: SessionData = serde_json::from_str(json).unwrap();
        assert!(!session.active);
        assert_eq!(session.message_count, 0);
        assert_eq!(session.remaining_seconds, 0);
        assert_eq!(session.token_count(), 0);
        assert_eq!(session.cost_usd(), 0.0);
    }

    #[test]
    fn null_primary_spelling_falls_back_to_alternate() {
        let json = r#"{"tokens":null,"total_tokens":12,"cost":null,"total_cost":0.5}"#;
        let session: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(session.token_count(), 12);
        assert_eq!(session.cost_usd(), 0.5);
    }

    #[test]
    fn negative_token_count_is_rejected() {
        assert!(serde_json::from_str::<SessionData>(r#"{"tokens":-5}"#).is_err());
    }

    #[test]
    fn negative_remaining_seconds_is_accepted() {
        let session: SessionData =
            serde_json::from_str(r#"{"remaining_seconds":-30}"#).unwrap();
        assert_eq!(session.remaining_seconds, -30);
    }

    #[test]
    fn session_number_serializes_unknown_as_marker() {
        assert_eq!(
            serde_json::to_string(&SessionNumber::Unknown).unwrap(),
            "\"?\""
        );
        assert_eq!(serde_json::to_string(&SessionNumber::Known(7)).unwrap(), "7");
    }
}
