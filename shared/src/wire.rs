//! Response body decoding.
//!
//! The backend answers either with the bare payload or with the
//! `{status, message, data}` envelope; both shapes decode to the same type.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FetchError;

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

/// Decode a JSON body, unwrapping the `data` envelope when present.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    // Parse once into a Value so a non-JSON body reports the real syntax
    // error rather than the untagged "did not match any variant" message.
    let value: serde_json::Value = serde_json::from_str(body)?;
    match serde_json::from_value::<Envelope<T>>(value) {
        Ok(Envelope::Wrapped { data }) | Ok(Envelope::Bare(data)) => Ok(data),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OfficerPayload, OverallPayload};

    #[test]
    fn test_decode_bare_payload() {
        let body = r#"{
            "snapshot": {"week": "20 Sep", "totalOutstanding": 1, "totalGrossProvision": 2, "overallPAR": 0.0419},
            "weekly": [{"week": "20 Sep", "outstanding": 1, "provision": 2, "par": 0.0419}],
            "officers": ["Steve Kibor"]
        }"#;
        let payload: OverallPayload = decode_payload(body).unwrap();
        assert_eq!(payload.weekly.len(), 1);
        assert_eq!(payload.officers, vec!["Steve Kibor".to_string()]);
    }

    #[test]
    fn test_decode_enveloped_payload() {
        let body = r#"{"status": true, "message": "ok", "data": {
            "weekly": [{"week": "5 Sep", "outstanding": 10, "provision": 1, "par": 4.84}],
            "officers": ["Ochieng Stephen", "Steve Kibor"]
        }}"#;
        let payload: OverallPayload = decode_payload(body).unwrap();
        assert_eq!(payload.weekly[0].week, "5 Sep");
        assert_eq!(payload.officers.len(), 2);
        assert!(payload.snapshot.is_none());
    }

    #[test]
    fn test_decode_empty_weekly_is_not_an_error() {
        let payload: OfficerPayload = decode_payload(r#"{"weekly": []}"#).unwrap();
        assert!(payload.weekly.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_payload::<OverallPayload>("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
