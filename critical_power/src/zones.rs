//! Training zones as fixed fractions of critical power:
//!
//! - Z1(Recovery) - below `0.7`
//! - Z2(Endurance) - `0.7-0.8`
//! - Z3(Tempo) - `0.8-0.9`
//! - Z4(Threshold) - `0.9-1.0`
//! - Z5(VO2 Max) - `1.0-1.2`
//! - Z6(Anaerobic) - above `1.2`
//!
//! A zone includes its lower bound and excludes its upper one.

/// Fractions of CP separating neighbour zones, ascending
pub const ZONE_BOUNDARIES: [f64; 5] = [0.7, 0.8, 0.9, 1.0, 1.2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneKind {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
}

impl ZoneKind {
    pub const ALL: [Self; 6] = [Self::Z1, Self::Z2, Self::Z3, Self::Z4, Self::Z5, Self::Z6];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Z1 => "Z1 (<70% CP)",
            Self::Z2 => "Z2 (70-80% CP)",
            Self::Z3 => "Z3 (80-90% CP)",
            Self::Z4 => "Z4 (90-100% CP)",
            Self::Z5 => "Z5 (100-120% CP)",
            Self::Z6 => "Z6 (>120% CP)",
        }
    }

    /// Fractions of CP bounding the zone. `None` marks an open end
    pub const fn fractions(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Z1 => (None, Some(0.7)),
            Self::Z2 => (Some(0.7), Some(0.8)),
            Self::Z3 => (Some(0.8), Some(0.9)),
            Self::Z4 => (Some(0.9), Some(1.0)),
            Self::Z5 => (Some(1.0), Some(1.2)),
            Self::Z6 => (Some(1.2), None),
        }
    }

    /// Zone of a power reading against a known CP.
    pub fn from_power(critical_power: f64, power: f64) -> Self {
        let [z2, z3, z4, z5, z6] = ZONE_BOUNDARIES.map(|fraction| critical_power * fraction);

        if power >= z6 {
            return Self::Z6;
        }

        if power >= z5 {
            return Self::Z5;
        }

        if power >= z4 {
            return Self::Z4;
        }

        if power >= z3 {
            return Self::Z3;
        }

        if power >= z2 {
            return Self::Z2;
        }

        Self::Z1
    }
}

/// One row of the zone table. Bounds are in watts, `None` marks an open end
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zone {
    pub kind: ZoneKind,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Zone {
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Human readable power range with bounds rounded by [`watts`]
    pub fn range_text(&self) -> String {
        match (self.lower, self.upper) {
            (None, Some(upper)) => format!("< {} W", watts(upper)),
            (Some(lower), Some(upper)) => format!("{} - {} W", watts(lower), watts(upper)),
            (Some(lower), None) => format!("> {} W", watts(lower)),
            (None, None) => "any".into(),
        }
    }
}

/// Watt bound rounded for display.
///
/// Halves round away from zero: `157.5` displays as `158`, `-157.5` as `-158`
#[inline]
pub fn watts(value: f64) -> i64 {
    value.round() as i64
}

/// Zone table for a CP estimate.
///
/// Every bound is an independent fraction of the same `critical_power`.
/// Zero and negative CP flow through the same arithmetic.
pub fn zones(critical_power: f64) -> [Zone; 6] {
    ZoneKind::ALL.map(|kind| {
        let (lower, upper) = kind.fractions();

        Zone {
            kind,
            lower: lower.map(|fraction| critical_power * fraction),
            upper: upper.map(|fraction| critical_power * fraction),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_table() {
        let table = zones(225.0);

        assert_eq!(table.len(), 6);
        assert_eq!(table[0].lower, None);
        assert_eq!(table[5].upper, None);

        let expected = [157.5, 180.0, 202.5, 225.0, 270.0];
        for (i, bound) in expected.iter().enumerate() {
            assert_eq!(table[i].upper, Some(*bound));
            assert_eq!(table[i + 1].lower, Some(*bound));
        }

        let kinds = table.map(|zone| zone.kind);
        assert_eq!(kinds, ZoneKind::ALL);
    }

    #[test]
    fn test_range_text() {
        let table = zones(225.0);

        let expected = [
            "< 158 W",
            "158 - 180 W",
            "180 - 203 W",
            "203 - 225 W",
            "225 - 270 W",
            "> 270 W",
        ];
        for (zone, text) in table.iter().zip(expected) {
            assert_eq!(zone.range_text(), text);
        }
    }

    #[test]
    fn test_half_watt_rounding() {
        assert_eq!(watts(157.5), 158);
        assert_eq!(watts(157.4), 157);
        assert_eq!(watts(202.5), 203);
        assert_eq!(watts(-157.5), -158);
        assert_eq!(watts(0.0), 0);
    }

    #[test]
    fn test_labels() {
        let labels = ZoneKind::ALL.map(ZoneKind::label);
        assert_eq!(
            labels,
            [
                "Z1 (<70% CP)",
                "Z2 (70-80% CP)",
                "Z3 (80-90% CP)",
                "Z4 (90-100% CP)",
                "Z5 (100-120% CP)",
                "Z6 (>120% CP)",
            ]
        );
    }

    #[test]
    fn test_bound_monotonicity() {
        let ascending = zones(225.0);
        for pair in ascending[1..5].windows(2) {
            assert!(pair[0].lower < pair[0].upper);
            assert!(pair[1].lower < pair[1].upper);
        }

        let zero = zones(0.0);
        for zone in &zero[1..5] {
            assert_eq!(zone.lower, Some(0.0));
            assert_eq!(zone.upper, Some(0.0));
        }

        let descending = zones(-200.0);
        for zone in &descending[1..5] {
            assert!(zone.lower > zone.upper);
        }
    }

    #[test]
    fn test_repeat_calls() {
        assert_eq!(zones(312.5), zones(312.5));
    }

    #[test]
    fn test_from_power() {
        // CP 200 puts the boundaries at 140, 160, 180, 200, 240
        let cp = 200.0;

        assert_eq!(ZoneKind::from_power(cp, 0.0), ZoneKind::Z1);
        assert_eq!(ZoneKind::from_power(cp, 139.9), ZoneKind::Z1);
        assert_eq!(ZoneKind::from_power(cp, 140.0), ZoneKind::Z2);
        assert_eq!(ZoneKind::from_power(cp, 159.9), ZoneKind::Z2);
        assert_eq!(ZoneKind::from_power(cp, 160.0), ZoneKind::Z3);
        assert_eq!(ZoneKind::from_power(cp, 180.0), ZoneKind::Z4);
        assert_eq!(ZoneKind::from_power(cp, 200.0), ZoneKind::Z5);
        assert_eq!(ZoneKind::from_power(cp, 239.9), ZoneKind::Z5);
        assert_eq!(ZoneKind::from_power(cp, 240.0), ZoneKind::Z6);
        assert_eq!(ZoneKind::from_power(cp, 1000.0), ZoneKind::Z6);
    }

    #[test]
    fn test_table_agrees_with_from_power() {
        let cp = 287.0;

        for zone in zones(cp) {
            if let Some(lower) = zone.lower {
                assert_eq!(ZoneKind::from_power(cp, lower), zone.kind);
            }
        }
    }
}
