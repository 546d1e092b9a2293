//! Static lookups that turn an observation into display data.

use serde::Serialize;

/// Clothing recommendation for a temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClothingAdvisory {
    pub label: &'static str,
    pub description: &'static str,
    /// Hex RGB color, e.g. `#ff6b35`.
    pub accent_color: &'static str,
}

struct Band {
    /// Inclusive lower bound in °C. `None` for the coldest band.
    min_c: Option<f64>,
    advisory: ClothingAdvisory,
}

// Ordered warmest first; the first band whose lower bound is met wins, so a
// boundary value belongs to the warmer band.
static BANDS: [Band; 7] = [
    Band {
        min_c: Some(30.0),
        advisory: ClothingAdvisory {
            label: "Very Hot",
            description: "☀️ Light cotton clothes, shorts, t-shirt, sunglasses, and sunscreen",
            accent_color: "#ff6b35",
        },
    },
    Band {
        min_c: Some(25.0),
        advisory: ClothingAdvisory {
            label: "Hot",
            description: "🌞 Light clothes, short sleeves, comfortable fabrics",
            accent_color: "#f7931e",
        },
    },
    Band {
        min_c: Some(20.0),
        advisory: ClothingAdvisory {
            label: "Warm",
            description: "👕 Light shirt or t-shirt, jeans or light pants",
            accent_color: "#fdc500",
        },
    },
    Band {
        min_c: Some(15.0),
        advisory: ClothingAdvisory {
            label: "Mild",
            description: "🧥 Long sleeves, light jacket, comfortable pants",
            accent_color: "#92d050",
        },
    },
    Band {
        min_c: Some(10.0),
        advisory: ClothingAdvisory {
            label: "Cool",
            description: "🧥 Jacket or sweater, long pants, closed shoes",
            accent_color: "#00b0f0",
        },
    },
    Band {
        min_c: Some(5.0),
        advisory: ClothingAdvisory {
            label: "Cold",
            description: "🧥 Warm jacket, sweater, scarf, gloves",
            accent_color: "#7030a0",
        },
    },
    Band {
        min_c: None,
        advisory: ClothingAdvisory {
            label: "Very Cold",
            description: "🧣 Heavy winter coat, multiple layers, hat, gloves, scarf, warm boots",
            accent_color: "#002060",
        },
    },
];

/// Map a temperature in °C to its clothing advisory.
///
/// Total over `f64`: NaN never satisfies a lower bound and lands in the
/// coldest band.
pub fn suggest_clothing(temperature_c: f64) -> ClothingAdvisory {
    BANDS
        .iter()
        .find(|band| band.min_c.is_none_or(|min| temperature_c >= min))
        .map(|band| band.advisory)
        .unwrap_or(BANDS[BANDS.len() - 1].advisory)
}

/// Shown for condition codes missing from the table.
pub const DEFAULT_ICON: &str = "🌤️";

static ICONS: [(&str, &str); 9] = [
    ("Clear", "☀️"),
    ("Clouds", "☁️"),
    ("Rain", "🌧️"),
    ("Drizzle", "🌦️"),
    ("Thunderstorm", "⛈️"),
    ("Snow", "❄️"),
    ("Mist", "🌫️"),
    ("Fog", "🌫️"),
    ("Haze", "🌫️"),
];

/// Icon for an API `weather[0].main` code. Exact, case-sensitive match.
pub fn icon_for(condition_main: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(code, _)| *code == condition_main)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_warmer_band() {
        let cases = [
            (30.0, "Very Hot"),
            (25.0, "Hot"),
            (20.0, "Warm"),
            (15.0, "Mild"),
            (10.0, "Cool"),
            (5.0, "Cold"),
        ];
        for (t, label) in cases {
            assert_eq!(suggest_clothing(t).label, label, "at {t}°C");
        }
    }

    #[test]
    fn values_just_below_boundaries_fall_to_colder_band() {
        let cases = [
            (29.999, "Hot"),
            (24.9, "Warm"),
            (19.99, "Mild"),
            (14.5, "Cool"),
            (9.9, "Cold"),
            (4.99, "Very Cold"),
        ];
        for (t, label) in cases {
            assert_eq!(suggest_clothing(t).label, label, "at {t}°C");
        }
    }

    #[test]
    fn extremes_are_covered() {
        assert_eq!(suggest_clothing(55.0).label, "Very Hot");
        assert_eq!(suggest_clothing(f64::INFINITY).label, "Very Hot");
        assert_eq!(suggest_clothing(-40.0).label, "Very Cold");
        assert_eq!(suggest_clothing(f64::NEG_INFINITY).label, "Very Cold");
        assert_eq!(suggest_clothing(f64::NAN).label, "Very Cold");
    }

    #[test]
    fn every_temperature_hits_exactly_one_band() {
        let mut t = -20.0;
        while t <= 40.0 {
            let matching = BANDS
                .iter()
                .enumerate()
                .filter(|(i, band)| {
                    let above_min = band.min_c.is_none_or(|min| t >= min);
                    let below_max = match i.checked_sub(1).and_then(|prev| BANDS[prev].min_c) {
                        Some(max) => t < max,
                        None => true,
                    };
                    above_min && below_max
                })
                .count();
            assert_eq!(matching, 1, "at {t}°C");
            t += 0.25;
        }
    }

    #[test]
    fn advisory_carries_table_text() {
        let advisory = suggest_clothing(12.0);
        assert_eq!(advisory.label, "Cool");
        assert_eq!(advisory.accent_color, "#00b0f0");
        assert!(advisory.description.contains("long pants"));
    }

    #[test]
    fn known_icons() {
        assert_eq!(icon_for("Rain"), "🌧️");
        assert_eq!(icon_for("Clear"), "☀️");
        assert_eq!(icon_for("Fog"), icon_for("Mist"));
    }

    #[test]
    fn unknown_icon_falls_back() {
        assert_eq!(icon_for("Blizzard"), DEFAULT_ICON);
        assert_eq!(icon_for(""), DEFAULT_ICON);
    }

    #[test]
    fn icon_lookup_is_case_sensitive() {
        assert_eq!(icon_for("rain"), DEFAULT_ICON);
        assert_eq!(icon_for("RAIN"), DEFAULT_ICON);
        assert_eq!(icon_for(" Rain"), DEFAULT_ICON);
    }
}
