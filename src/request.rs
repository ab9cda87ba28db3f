//! Builds the signed form request for the track-query endpoint.

use crate::error::TrackError;
use crate::sign::sign;

/// `RequestType` for the instant track query.
pub const REQUEST_TYPE_TRACK: &str = "1002";

/// Response format requested from the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Xml = 1,
    Json = 2,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Xml => "1",
            DataType::Json => "2",
        }
    }
}

/// A fully assembled, signed track-query request.
///
/// `encoded_payload` and `data_sign` are already percent-encoded; the form
/// body is sent as-is, so the transport must not encode it again.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub business_id: String,
    pub encoded_payload: String,
    pub request_type: &'static str,
    pub data_sign: String,
    pub data_type: DataType,
}

impl SignedRequest {
    /// Builds a request for one waybill.
    ///
    /// Fails with [`TrackError::Validation`] when the carrier code or
    /// tracking number is blank; nothing is encoded or signed in that case.
    pub fn build(
        carrier_code: &str,
        tracking_number: &str,
        business_id: &str,
        app_key: &str,
        data_type: DataType,
    ) -> Result<Self, TrackError> {
        if carrier_code.trim().is_empty() {
            return Err(TrackError::Validation {
                field: "carrier_code",
            });
        }
        if tracking_number.trim().is_empty() {
            return Err(TrackError::Validation {
                field: "tracking_number",
            });
        }

        let payload = match data_type {
            DataType::Json => json_payload(carrier_code, tracking_number),
            DataType::Xml => xml_payload(carrier_code, tracking_number),
        };
        let data_sign = sign(&payload, app_key);

        Ok(Self {
            business_id: business_id.to_string(),
            encoded_payload: urlencoding::encode(&payload).into_owned(),
            request_type: REQUEST_TYPE_TRACK,
            data_sign: urlencoding::encode(&data_sign).into_owned(),
            data_type,
        })
    }

    /// Renders the `application/x-www-form-urlencoded` body in the fixed
    /// field order the vendor endpoint expects.
    pub fn form_body(&self) -> String {
        format!(
            "RequestData={}&EBusinessID={}&RequestType={}&DataSign={}&DataType={}",
            self.encoded_payload,
            self.business_id,
            self.request_type,
            self.data_sign,
            self.data_type.as_str(),
        )
    }
}

// The endpoint matches this string layout byte-for-byte (single-quoted keys,
// empty order code), so it is a template, not serde serialization.
fn json_payload(carrier_code: &str, tracking_number: &str) -> String {
    format!("{{'OrderCode':'','ShipperCode':'{carrier_code}','LogisticCode':'{tracking_number}'}}")
}

fn xml_payload(carrier_code: &str, tracking_number: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?><Content><OrderCode></OrderCode>\
         <ShipperCode>{carrier_code}</ShipperCode>\
         <LogisticCode>{tracking_number}</LogisticCode></Content>"
    )
}
