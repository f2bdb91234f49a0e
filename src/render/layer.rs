use serde::{Deserialize, Serialize};

/// Role of a group node in a chart's drawing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Root group carrying the surface transform.
    Surface,
    BoundingBox,
    Series,
    Axis,
    TickMarks,
    Labels,
}

impl LayerKind {
    /// Paint order of the layers under the surface group.
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::BoundingBox,
        Self::Series,
        Self::Axis,
        Self::TickMarks,
        Self::Labels,
    ];

    /// Stable identifier used by markup serializers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::BoundingBox => "bounding-box",
            Self::Series => "series",
            Self::Axis => "axis",
            Self::TickMarks => "tick-marks",
            Self::Labels => "labels",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayerKind;

    #[test]
    fn canonical_order_paints_series_under_axes_and_labels() {
        assert_eq!(
            LayerKind::CANONICAL_ORDER,
            [
                LayerKind::BoundingBox,
                LayerKind::Series,
                LayerKind::Axis,
                LayerKind::TickMarks,
                LayerKind::Labels,
            ]
        );
    }
}
