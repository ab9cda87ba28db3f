//! Maps the vendor's JSON response body into a [`TrackResult`].

use serde::Deserialize;

use crate::models::{ShipmentState, TraceEvent, TrackResult};

/// Track-query response, vendor field names (partial, only fields we need).
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(rename = "EBusinessID")]
    business_id: Option<String>,
    #[serde(rename = "OrderCode")]
    order_code: Option<String>,
    #[serde(rename = "ShipperCode")]
    shipper_code: Option<String>,
    #[serde(rename = "LogisticCode")]
    logistic_code: Option<String>,
    #[serde(rename = "Success")]
    success: Option<bool>,
    #[serde(rename = "Reason")]
    reason: Option<String>,
    #[serde(rename = "State")]
    state: Option<i64>,
    #[serde(rename = "Traces")]
    traces: Option<Vec<Option<WireTrace>>>,
}

#[derive(Debug, Deserialize)]
struct WireTrace {
    #[serde(rename = "AcceptTime")]
    accept_time: Option<String>,
    #[serde(rename = "AcceptStation")]
    accept_station: Option<String>,
    #[serde(rename = "Remark")]
    remark: Option<String>,
}

/// Parses a raw response body.
///
/// Returns `None` for a blank or unparsable body; this is the "no result"
/// case, never an error. The wire trace list arrives newest-first and is
/// reversed here so callers see chronological order. Null trace elements
/// are skipped without failing the parse.
pub fn parse_track_response(body: &str) -> Option<TrackResult> {
    if body.trim().is_empty() {
        return None;
    }

    let wire: WireResponse = serde_json::from_str(body).ok()?;

    let state = ShipmentState::from_code(wire.state);

    let traces = wire
        .traces
        .unwrap_or_default()
        .into_iter()
        .rev()
        .flatten()
        .map(|trace| TraceEvent {
            accept_time: trace.accept_time.unwrap_or_default(),
            accept_station: trace.accept_station.unwrap_or_default(),
            remark: trace.remark.unwrap_or_default(),
        })
        .collect();

    Some(TrackResult {
        business_id: wire.business_id.unwrap_or_default(),
        order_code: wire.order_code.unwrap_or_default(),
        carrier_code: wire.shipper_code.unwrap_or_default(),
        tracking_number: wire.logistic_code.unwrap_or_default(),
        success: wire.success.unwrap_or_default(),
        reason: wire.reason.unwrap_or_default(),
        state,
        state_label: state.label().to_string(),
        traces,
    })
}
