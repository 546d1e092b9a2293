//! Text rendering of a session for the terminal.

use advisor_core::{Phase, SessionState, suggest_clothing};

pub fn render(state: &SessionState) -> String {
    let mut out = String::new();

    if state.is_loading {
        out.push_str("Searching...\n");
        return out;
    }

    if let Some(error) = &state.error_message {
        out.push_str(&format!("Error: {error}\n"));
    }

    match &state.observation {
        Some(obs) => {
            let advisory = suggest_clothing(obs.temperature_c);

            out.push_str(&format!(
                "{}, {}  {}\n",
                obs.location_name,
                obs.country_code,
                obs.condition_icon()
            ));
            out.push_str(&format!(
                "  {}°C  {}\n",
                round_degrees(obs.temperature_c),
                obs.condition_description
            ));
            out.push_str(&format!(
                "  Feels like {}°C | Humidity {}% | Wind {} m/s\n",
                round_degrees(obs.feels_like_c),
                obs.humidity_pct,
                obs.wind_speed_mps
            ));
            if let Some(at) = obs.observed_at {
                out.push_str(&format!("  Updated {} UTC\n", at.format("%Y-%m-%d %H:%M")));
            }
            out.push_str(&format!(
                "\n👔 Clothing Suggestion: {} [{}]\n  {}\n",
                advisory.label, advisory.accent_color, advisory.description
            ));
        }
        None if state.phase() == Phase::Idle => {
            out.push_str(
                "Welcome! 👋\nEnter a city name to get weather information and clothing suggestions.\n",
            );
        }
        None => {}
    }

    out
}

/// Whole degrees, half away from zero.
fn round_degrees(value: f64) -> i64 {
    value.round() as i64
}
