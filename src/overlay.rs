use crate::constants::APP_TITLE;
use helix_core::{AnimationState, HelixParameters, Vitals};

/// Metric readouts shown alongside the helix.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsOverlay {
    pub visible: bool,
}

impl Default for MetricsOverlay {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl MetricsOverlay {
    #[inline]
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Label for the show/hide control.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            "Hide Metrics"
        } else {
            "Show Metrics"
        }
    }

    /// Individual readout lines, empty when hidden.
    pub fn lines(
        &self,
        vitals: &Vitals,
        animation: &AnimationState,
        params: &HelixParameters,
    ) -> Vec<String> {
        if !self.visible {
            return Vec::new();
        }
        vec![
            heart_rate_text(vitals),
            oxygen_text(vitals),
            format!("Base Pairs {}", params.base_pair_count),
            format!("Helical Turns {}", params.turn_count),
            cell_activity_text(animation.secondary_oscillation),
        ]
    }

    /// Window title carrying the readout, or the key hint when hidden.
    pub fn title(
        &self,
        vitals: &Vitals,
        animation: &AnimationState,
        params: &HelixParameters,
    ) -> String {
        let lines = self.lines(vitals, animation, params);
        if lines.is_empty() {
            format!("{APP_TITLE} | M: {}", self.toggle_label())
        } else {
            format!("{APP_TITLE} | {}", lines.join(" | "))
        }
    }
}

pub fn heart_rate_text(vitals: &Vitals) -> String {
    format!("Heart Rate {} BPM", vitals.bpm_display())
}

pub fn oxygen_text(vitals: &Vitals) -> String {
    let marker = if vitals.oxygen_active() { "" } else { " (low)" };
    format!("Oxygen {:.1}%{marker}", vitals.oxygen_percent)
}

pub fn cell_activity_text(activity: f32) -> String {
    format!("Cell Activity {:.0}%", activity * 100.0)
}
