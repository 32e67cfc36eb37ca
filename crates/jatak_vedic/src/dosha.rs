//! Dosha screening over a computed chart.
//!
//! Each detector takes only the placements it needs and returns a
//! self-describing [`Dosha`] record, so callers can append them to a
//! chart without caring which detector produced what.

/// Severity grade attached to a present dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoshaSeverity {
    Low,
    Medium,
    High,
}

impl DoshaSeverity {
    pub fn name(self) -> &'static str {
        match self {
            DoshaSeverity::Low => "Low",
            DoshaSeverity::Medium => "Medium",
            DoshaSeverity::High => "High",
        }
    }
}

/// One screened affliction, present or not. `severity` and `remedy`
/// are populated only when the dosha is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dosha {
    pub name: &'static str,
    pub present: bool,
    pub severity: Option<DoshaSeverity>,
    pub description: String,
    pub remedy: Option<&'static str>,
}

/// Mangal dosha from Mars's whole-sign house placement.
///
/// Present when Mars occupies house 1, 4, 7, 8 or 12 from the
/// ascendant; house 8 grades High, the others Medium. The check runs
/// from the lagna only, without the Moon/Venus variants or the
/// classical exceptions.
pub fn mangal_dosha(mars_house: u8) -> Dosha {
    let present = matches!(mars_house, 1 | 4 | 7 | 8 | 12);
    let severity = if present {
        Some(if mars_house == 8 {
            DoshaSeverity::High
        } else {
            DoshaSeverity::Medium
        })
    } else {
        None
    };
    let description = if present {
        format!(
            "Mars is positioned in house {mars_house}, creating Mangal Dosha \
             which may impact relationships and energy levels."
        )
    } else {
        String::from("No Mangal Dosha present in the chart.")
    };
    Dosha {
        name: "Mangal Dosha",
        present,
        severity,
        description,
        remedy: present.then_some("Perform Kumbh Vivah or recite Hanuman Chalisa regularly."),
    }
}

/// Kalsarpa yoga screening.
///
/// The hemispheric arc-membership test against the Rahu-Ketu axis is
/// not wired up yet, so this always reports the dosha absent rather
/// than guessing between the competing arc conventions.
pub fn kalsarpa_dosha() -> Dosha {
    Dosha {
        name: "Kalsarpa Yoga",
        present: false,
        severity: None,
        description: String::from("Planets are not hemmed between Rahu and Ketu."),
        remedy: None,
    }
}
