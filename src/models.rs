/// Logistics state codes defined by the track-query contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentState {
    Unknown = 0,
    InTransit = 2,
    Delivered = 3,
    Exception = 4,
}

/// Vendor state code, typed state, display label.
const STATE_TABLE: &[(i64, ShipmentState, &str)] = &[
    (2, ShipmentState::InTransit, "在途中"),
    (3, ShipmentState::Delivered, "签收"),
    (4, ShipmentState::Exception, "问题件"),
];

impl ShipmentState {
    /// Maps a wire state code; absent or unrecognized codes become `Unknown`.
    pub fn from_code(code: Option<i64>) -> Self {
        code.and_then(|code| {
            STATE_TABLE
                .iter()
                .find(|(wire_code, _, _)| *wire_code == code)
                .map(|(_, state, _)| *state)
        })
        .unwrap_or(ShipmentState::Unknown)
    }

    /// Human-readable label; empty for `Unknown`, total over all inputs.
    pub fn label(self) -> &'static str {
        STATE_TABLE
            .iter()
            .find(|(_, state, _)| *state == self)
            .map(|(_, _, label)| *label)
            .unwrap_or("")
    }
}

/// One scan event on a waybill's route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub accept_time: String,
    pub accept_station: String,
    pub remark: String,
}

/// Result of one track query, with traces in chronological order
/// (oldest first).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackResult {
    pub business_id: String,
    pub order_code: String,
    pub carrier_code: String,
    pub tracking_number: String,
    pub success: bool,
    /// Populated only when `success` is false.
    pub reason: String,
    pub state: ShipmentState,
    pub state_label: String,
    pub traces: Vec<TraceEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_label_mapping_is_total() {
        assert_eq!(ShipmentState::from_code(Some(2)).label(), "在途中");
        assert_eq!(ShipmentState::from_code(Some(3)).label(), "签收");
        assert_eq!(ShipmentState::from_code(Some(4)).label(), "问题件");
        assert_eq!(ShipmentState::from_code(Some(0)).label(), "");
        assert_eq!(ShipmentState::from_code(Some(99)).label(), "");
        assert_eq!(ShipmentState::from_code(None).label(), "");
    }

    #[test]
    fn unrecognized_codes_become_unknown() {
        assert_eq!(ShipmentState::from_code(Some(-1)), ShipmentState::Unknown);
        assert_eq!(ShipmentState::from_code(None), ShipmentState::Unknown);
        assert_eq!(ShipmentState::from_code(Some(3)), ShipmentState::Delivered);
    }
}
