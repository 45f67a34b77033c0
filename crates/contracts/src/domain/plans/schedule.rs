use serde::{Deserialize, Serialize};

/// How often classes take place within the billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// "Todos os dias"
    EveryDay,
    /// "1 vez", "2 vezes", ... up to 7 in the option table
    Times(u16),
}

impl Frequency {
    /// Human-readable label shown in the dropdown
    pub fn label(&self) -> String {
        match self {
            Frequency::EveryDay => "Todos os dias".to_string(),
            Frequency::Times(1) => "1 vez".to_string(),
            Frequency::Times(n) => format!("{} vezes", n),
        }
    }

    /// Parse a label back into a frequency
    pub fn parse(label: &str) -> Option<Self> {
        if label == "Todos os dias" {
            return Some(Frequency::EveryDay);
        }
        let n: u16 = label.split(' ').next()?.parse().ok()?;
        Some(Frequency::Times(n))
    }

    /// The fixed option table, in display order
    pub fn all() -> Vec<Frequency> {
        let mut options = vec![Frequency::EveryDay];
        options.extend((1..=7).map(Frequency::Times));
        options
    }
}

/// Billing period a frequency is counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    PerWeek,
    PerMonth,
    PerYear,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::PerWeek => "Por semana",
            Period::PerMonth => "Por mês",
            Period::PerYear => "Por ano",
        }
    }

    /// Short form used when composing a plan's frequency label ("5x semana")
    pub fn short_label(&self) -> &'static str {
        match self {
            Period::PerWeek => "semana",
            Period::PerMonth => "mês",
            Period::PerYear => "ano",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Por semana" => Some(Period::PerWeek),
            "Por mês" => Some(Period::PerMonth),
            "Por ano" => Some(Period::PerYear),
            _ => None,
        }
    }

    pub fn all() -> Vec<Period> {
        vec![Period::PerWeek, Period::PerMonth, Period::PerYear]
    }

    /// Largest numeric frequency that fits into the period
    pub fn max_frequency(&self) -> u16 {
        match self {
            Period::PerWeek => 7,
            Period::PerMonth => 31,
            Period::PerYear => 365,
        }
    }
}

/// How often the plan is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

impl Recurrence {
    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Mensal => "Mensal",
            Recurrence::Trimestral => "Trimestral",
            Recurrence::Semestral => "Semestral",
            Recurrence::Anual => "Anual",
        }
    }

    /// Suffix shown next to the price in the plan list ("/mês")
    pub fn period_label(&self) -> &'static str {
        match self {
            Recurrence::Mensal => "/mês",
            Recurrence::Trimestral => "/trimestre",
            Recurrence::Semestral => "/semestre",
            Recurrence::Anual => "/ano",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Mensal" => Some(Recurrence::Mensal),
            "Trimestral" => Some(Recurrence::Trimestral),
            "Semestral" => Some(Recurrence::Semestral),
            "Anual" => Some(Recurrence::Anual),
            _ => None,
        }
    }

    pub fn all() -> Vec<Recurrence> {
        vec![
            Recurrence::Mensal,
            Recurrence::Trimestral,
            Recurrence::Semestral,
            Recurrence::Anual,
        ]
    }
}

/// Subset of the frequency table that is selectable under `period`,
/// preserving display order. "Todos os dias" only makes sense for
/// week and month periods.
pub fn valid_frequencies(period: Period) -> Vec<Frequency> {
    Frequency::all()
        .into_iter()
        .filter(|f| match f {
            Frequency::EveryDay => matches!(period, Period::PerWeek | Period::PerMonth),
            Frequency::Times(n) => *n <= period.max_frequency(),
        })
        .collect()
}

/// Corrects `current` after a period change. A frequency that is no
/// longer selectable under the new period falls back to "1 vez";
/// anything still valid is kept as-is, even when its meaning overlaps
/// another option (e.g. "7 vezes" per week).
pub fn reconcile(period: Period, current: Frequency) -> Frequency {
    match current {
        Frequency::EveryDay if period == Period::PerYear => Frequency::Times(1),
        Frequency::Times(n) if n > period.max_frequency() => Frequency::Times(1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_labels_round_trip() {
        for f in Frequency::all() {
            assert_eq!(Frequency::parse(&f.label()), Some(f));
        }
        assert_eq!(Frequency::parse("1 vez"), Some(Frequency::Times(1)));
        assert_eq!(Frequency::parse("5 vezes"), Some(Frequency::Times(5)));
        assert_eq!(Frequency::parse("qualquer coisa"), None);
    }

    #[test]
    fn test_period_labels_round_trip() {
        for p in Period::all() {
            assert_eq!(Period::parse(p.label()), Some(p));
        }
        assert_eq!(Period::parse("Por dia"), None);
    }

    #[test]
    fn test_recurrence_labels_round_trip() {
        for r in Recurrence::all() {
            assert_eq!(Recurrence::parse(r.label()), Some(r));
        }
    }

    #[test]
    fn test_every_day_excluded_for_year() {
        assert!(valid_frequencies(Period::PerWeek).contains(&Frequency::EveryDay));
        assert!(valid_frequencies(Period::PerMonth).contains(&Frequency::EveryDay));
        assert!(!valid_frequencies(Period::PerYear).contains(&Frequency::EveryDay));
    }

    #[test]
    fn test_valid_frequencies_preserve_table_order() {
        let expected: Vec<Frequency> = Frequency::all();
        assert_eq!(valid_frequencies(Period::PerWeek), expected);
        // Per year drops only "Todos os dias"
        assert_eq!(valid_frequencies(Period::PerYear), expected[1..].to_vec());
    }

    #[test]
    fn test_reconcile_every_day_under_year_falls_back() {
        assert_eq!(
            reconcile(Period::PerYear, Frequency::EveryDay),
            Frequency::Times(1)
        );
    }

    #[test]
    fn test_reconcile_keeps_numeric_at_the_limit() {
        // 7 ≤ 7, nothing to correct when switching month -> week
        assert_eq!(
            reconcile(Period::PerWeek, Frequency::Times(7)),
            Frequency::Times(7)
        );
    }

    #[test]
    fn test_reconcile_result_is_always_valid() {
        for period in Period::all() {
            for current in Frequency::all() {
                let corrected = reconcile(period, current);
                assert!(
                    valid_frequencies(period).contains(&corrected),
                    "{:?} under {:?} reconciled to invalid {:?}",
                    current,
                    period,
                    corrected
                );
            }
        }
    }
}
