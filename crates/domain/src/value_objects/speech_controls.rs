//! Speed and pitch controls offered next to the convert button

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Lowest value accepted for speed and pitch
pub const CONTROL_MIN: f32 = 0.5;
/// Highest value accepted for speed and pitch
pub const CONTROL_MAX: f32 = 2.0;
/// Slider granularity
pub const CONTROL_STEP: f32 = 0.1;
/// Neutral value for both controls
pub const CONTROL_DEFAULT: f32 = 1.0;

/// Tenths per unit; controls are stored as whole tenths
const TENTHS: f32 = 10.0;
const MIN_TENTHS: u8 = 5;
const MAX_TENTHS: u8 = 20;
const DEFAULT_TENTHS: u8 = 10;

/// Speed and pitch requested for synthesis
///
/// Values are kept within [`CONTROL_MIN`, `CONTROL_MAX`] and snapped to
/// [`CONTROL_STEP`]. They are stored as whole tenths so that `0.7` stays
/// `0.7` when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ControlValues", into = "ControlValues")]
pub struct SpeechControls {
    speed_tenths: u8,
    pitch_tenths: u8,
}

/// Serialized form of [`SpeechControls`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ControlValues {
    speed: f64,
    pitch: f64,
}

impl SpeechControls {
    /// Create controls, validating both values
    pub fn new(speed: f32, pitch: f32) -> Result<Self, DomainError> {
        Ok(Self {
            speed_tenths: snap("speed", speed)?,
            pitch_tenths: snap("pitch", pitch)?,
        })
    }

    /// Replace the speed
    pub fn with_speed(self, speed: f32) -> Result<Self, DomainError> {
        Ok(Self {
            speed_tenths: snap("speed", speed)?,
            ..self
        })
    }

    /// Replace the pitch
    pub fn with_pitch(self, pitch: f32) -> Result<Self, DomainError> {
        Ok(Self {
            pitch_tenths: snap("pitch", pitch)?,
            ..self
        })
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        f32::from(self.speed_tenths) / TENTHS
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        f32::from(self.pitch_tenths) / TENTHS
    }

    /// Speed as the nearest `f64` to the decimal value, for display
    #[must_use]
    pub fn speed_value(&self) -> f64 {
        f64::from(self.speed_tenths) / f64::from(TENTHS)
    }

    /// Pitch as the nearest `f64` to the decimal value, for display
    #[must_use]
    pub fn pitch_value(&self) -> f64 {
        f64::from(self.pitch_tenths) / f64::from(TENTHS)
    }

    /// Whether both controls are at their neutral value
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.speed_tenths == DEFAULT_TENTHS && self.pitch_tenths == DEFAULT_TENTHS
    }
}

impl Default for SpeechControls {
    fn default() -> Self {
        Self {
            speed_tenths: DEFAULT_TENTHS,
            pitch_tenths: DEFAULT_TENTHS,
        }
    }
}

impl From<SpeechControls> for ControlValues {
    fn from(controls: SpeechControls) -> Self {
        Self {
            speed: controls.speed_value(),
            pitch: controls.pitch_value(),
        }
    }
}

impl TryFrom<ControlValues> for SpeechControls {
    type Error = DomainError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(values: ControlValues) -> Result<Self, Self::Error> {
        Self::new(values.speed as f32, values.pitch as f32)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn snap(control: &'static str, value: f32) -> Result<u8, DomainError> {
    // Half a step of tolerance so slider values like 2.0000002 are accepted
    let tolerance = CONTROL_STEP / 2.0;
    if !value.is_finite() || value < CONTROL_MIN - tolerance || value > CONTROL_MAX + tolerance {
        return Err(DomainError::out_of_range(
            control,
            value,
            CONTROL_MIN,
            CONTROL_MAX,
        ));
    }

    // In range, so the rounded value fits in u8
    let tenths = (value * TENTHS).round() as u8;
    Ok(tenths.clamp(MIN_TENTHS, MAX_TENTHS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_is_neutral() {
        let controls = SpeechControls::default();
        assert!(controls.is_neutral());
        assert!(approx(controls.speed(), 1.0));
        assert!(approx(controls.pitch(), 1.0));
    }

    #[test]
    fn accepts_range_bounds() {
        let controls = SpeechControls::new(0.5, 2.0).unwrap();
        assert!(approx(controls.speed(), 0.5));
        assert!(approx(controls.pitch(), 2.0));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(SpeechControls::new(0.3, 1.0).is_err());
        assert!(SpeechControls::new(1.0, 2.5).is_err());
        assert!(SpeechControls::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn snaps_to_step() {
        let controls = SpeechControls::new(1.23, 1.77).unwrap();
        assert!(approx(controls.speed(), 1.2));
        assert!(approx(controls.pitch(), 1.8));
    }

    #[test]
    fn with_speed_keeps_pitch() {
        let controls = SpeechControls::new(1.0, 1.5)
            .unwrap()
            .with_speed(0.7)
            .unwrap();
        assert!(approx(controls.speed(), 0.7));
        assert!(approx(controls.pitch(), 1.5));
        assert!(!controls.is_neutral());
    }

    #[test]
    fn serializes_exact_decimals() {
        let controls = SpeechControls::new(0.7, 1.3).unwrap();
        let json = serde_json::to_string(&controls).unwrap();
        assert_eq!(json, r#"{"speed":0.7,"pitch":1.3}"#);

        let back: SpeechControls = serde_json::from_str(&json).unwrap();
        assert_eq!(back, controls);
    }

    #[test]
    fn deserializing_out_of_range_fails() {
        let result: Result<SpeechControls, _> = serde_json::from_str(r#"{"speed":3.0,"pitch":1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejected_update_reports_control_name() {
        let err = SpeechControls::default().with_pitch(9.0).unwrap_err();
        assert!(err.to_string().starts_with("pitch must be between"));
    }
}
