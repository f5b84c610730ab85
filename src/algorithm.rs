//! Algorithm selectors.
//!
//! Each primitive family has a closed set of algorithms. Tags coming from
//! scripts or UIs are parsed with [`FromStr`]; an unrecognized tag is an
//! error, never a silent fallback.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Line (and polygon edge) rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Slope evaluation per column, truncating toward zero.
    Naive,
    /// Digital differential analyzer with per-step rounding.
    Dda,
    /// Integer-only Bresenham.
    #[default]
    Bresenham,
}

/// Curve evaluation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveAlgorithm {
    /// Bézier curve via De Casteljau interpolation.
    #[default]
    Bezier,
    /// Uniform cubic B-spline via the Cox–de Boor recurrence.
    BSpline,
}

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipAlgorithm {
    /// Region outcodes with iterative boundary clipping.
    #[default]
    CohenSutherland,
    /// Parametric entry/exit clipping.
    LiangBarsky,
}

impl LineAlgorithm {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Naive, Self::Dda, Self::Bresenham];

    /// Canonical tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

impl CurveAlgorithm {
    /// All variants, in declaration order.
    pub const ALL: [Self; 2] = [Self::Bezier, Self::BSpline];

    /// Canonical tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }
}

impl ClipAlgorithm {
    /// All variants, in declaration order.
    pub const ALL: [Self; 2] = [Self::CohenSutherland, Self::LiangBarsky];

    /// Canonical tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

/// Case-insensitive lookup of `tag` among the canonical tags of `all`.
fn parse_tag<T: Copy>(
    family: &'static str,
    tag: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, Error> {
    let wanted = tag.trim();
    all.iter()
        .copied()
        .find(|&v| name(v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownAlgorithm {
            family,
            tag: tag.to_string(),
        })
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("line", s, &Self::ALL, Self::tag)
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("curve", s, &Self::ALL, Self::tag)
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag("clip", s, &Self::ALL, Self::tag)
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_tags() {
        assert_eq!("Naive".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Naive);
        assert_eq!("DDA".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
        assert_eq!("Bresenham".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Bresenham);
        assert_eq!("Bezier".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::Bezier);
        assert_eq!("B-spline".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::BSpline);
        assert_eq!(
            "Cohen-Sutherland".parse::<ClipAlgorithm>().unwrap(),
            ClipAlgorithm::CohenSutherland
        );
        assert_eq!("Liang-Barsky".parse::<ClipAlgorithm>().unwrap(), ClipAlgorithm::LiangBarsky);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("dda".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
        assert_eq!(" b-SPLINE ".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::BSpline);
    }

    #[test]
    fn test_unknown_tag_is_error() {
        let err = "Wu".parse::<LineAlgorithm>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownAlgorithm {
                family: "line",
                tag: "Wu".to_string()
            }
        );
        assert!("Bezier".parse::<ClipAlgorithm>().is_err());
        assert!("".parse::<CurveAlgorithm>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for alg in LineAlgorithm::ALL {
            assert_eq!(alg.to_string().parse::<LineAlgorithm>().unwrap(), alg);
        }
        for alg in CurveAlgorithm::ALL {
            assert_eq!(alg.to_string().parse::<CurveAlgorithm>().unwrap(), alg);
        }
        for alg in ClipAlgorithm::ALL {
            assert_eq!(alg.to_string().parse::<ClipAlgorithm>().unwrap(), alg);
        }
    }
}
