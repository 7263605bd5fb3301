// SPDX-License-Identifier: MPL-2.0
//! Easing curves addressed by their conventional names.
//!
//! Names follow the `family.ramp` convention used by web animation tools:
//! `power1`..`power4` (also `quad`, `cubic`, `quart`, `quint`) and `sine`,
//! each with an `in`, `out` or `inOut` ramp, plus `none`/`linear`. A bare
//! family name means its `out` ramp.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Which end of the transition the curve eases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    In,
    Out,
    InOut,
}

/// An easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Polynomial curve of degree `strength + 1`.
    Power(u8, Ramp),
    Sine(Ramp),
}

impl Default for Easing {
    fn default() -> Self {
        Self::POWER3_OUT
    }
}

/// Returned when an easing name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing: {}", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl Easing {
    pub const POWER2_IN: Easing = Easing::Power(2, Ramp::In);
    pub const POWER2_OUT: Easing = Easing::Power(2, Ramp::Out);
    pub const POWER3_OUT: Easing = Easing::Power(3, Ramp::Out);

    /// Parses `name`, falling back to `power3.out` for unknown names.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownEasing| {
            tracing::warn!(%err, "falling back to power3.out");
            Self::default()
        })
    }

    /// Applies the curve to a progress value, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear | Easing::Power(0, _) => t,
            Easing::Power(strength, ramp) => power(strength, ramp, t),
            Easing::Sine(ramp) => sine(ramp, t),
        }
    }
}

fn power(strength: u8, ramp: Ramp, t: f32) -> f32 {
    let exponent = i32::from(strength) + 1;
    match ramp {
        Ramp::In => t.powi(exponent),
        Ramp::Out => 1.0 - (1.0 - t).powi(exponent),
        Ramp::InOut => {
            if t < 0.5 {
                2f32.powi(exponent - 1) * t.powi(exponent)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(exponent) / 2.0
            }
        }
    }
}

fn sine(ramp: Ramp, t: f32) -> f32 {
    match ramp {
        Ramp::In => 1.0 - (t * PI / 2.0).cos(),
        Ramp::Out => (t * PI / 2.0).sin(),
        Ramp::InOut => -((PI * t).cos() - 1.0) / 2.0,
    }
}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let (family, ramp) = match name.split_once('.') {
            Some((family, ramp)) => (family, Some(ramp)),
            None => (name, None),
        };

        let ramp = match ramp {
            None | Some("out") => Ramp::Out,
            Some("in") => Ramp::In,
            Some("inOut") => Ramp::InOut,
            Some(_) => return Err(UnknownEasing(name.to_string())),
        };

        let easing = match family {
            "none" | "linear" => Easing::Linear,
            "power0" => Easing::Linear,
            "power1" | "quad" => Easing::Power(1, ramp),
            "power2" | "cubic" => Easing::Power(2, ramp),
            "power3" | "quart" => Easing::Power(3, ramp),
            "power4" | "quint" | "strong" => Easing::Power(4, ramp),
            "sine" => Easing::Sine(ramp),
            _ => return Err(UnknownEasing(name.to_string())),
        };
        Ok(easing)
    }
}
