use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::plans::schedule::{
    reconcile, valid_frequencies, Frequency, Period, Recurrence,
};
use crate::shared::money::{digits_only, format_brl};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub Uuid);

impl PlanId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Subscription plan as displayed in the plan list. The labels are
/// derived once when the plan is created and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    #[serde(rename = "frequencyLabel")]
    pub frequency_label: String,
    #[serde(rename = "priceLabel")]
    pub price_label: String,
    #[serde(rename = "periodLabel")]
    pub period_label: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Draft
// ============================================================================

/// Form state for a plan under creation. The value field is kept as a
/// raw digit buffer (centavos); the formatted display string is derived,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    pub frequency: Frequency,
    pub period: Period,
    pub recurrence: Recurrence,
    #[serde(rename = "valueCents")]
    pub value_cents: String,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            name: "Plano Vôlei Pro".to_string(),
            frequency: Frequency::Times(5),
            period: Period::PerWeek,
            recurrence: Recurrence::Mensal,
            value_cents: String::new(),
        }
    }
}

impl PlanDraft {
    /// Formatted currency string for the value field
    pub fn value_display(&self) -> String {
        format_brl(&self.value_cents)
    }

    /// Replaces the value buffer with the digits found in `raw`
    pub fn set_value(&mut self, raw: &str) {
        self.value_cents = digits_only(raw);
    }

    /// Applies a period change together with the frequency correction it
    /// implies, so the draft never holds a period/frequency mismatch.
    pub fn set_period(&mut self, period: Period) {
        self.frequency = reconcile(period, self.frequency);
        self.period = period;
    }

    /// Frequency label for the read model, e.g. "5x semana"
    pub fn frequency_label(&self) -> String {
        match self.frequency {
            Frequency::EveryDay => "Todos os dias".to_string(),
            Frequency::Times(n) => format!("{}x {}", n, self.period.short_label()),
        }
    }

    /// Checks the draft before it is handed to the persistence service.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            bail!("Informe o nome do plano");
        }
        if self.value_cents.is_empty() {
            bail!("Informe o valor do plano");
        }
        if !valid_frequencies(self.period).contains(&self.frequency) {
            bail!(
                "Frequência \"{}\" não é válida para o período \"{}\"",
                self.frequency.label(),
                self.period.label()
            );
        }
        Ok(())
    }

    /// Builds the display read model for an accepted draft. Identity and
    /// creation time are assigned by the persistence service.
    pub fn into_plan(self, id: PlanId, created_at: DateTime<Utc>) -> Plan {
        let frequency_label = self.frequency_label();
        Plan {
            id,
            name: self.name,
            frequency_label,
            price_label: format_brl(&self.value_cents),
            period_label: self.recurrence.period_label().to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_matches_form_defaults() {
        let draft = PlanDraft::default();
        assert_eq!(draft.name, "Plano Vôlei Pro");
        assert_eq!(draft.frequency, Frequency::Times(5));
        assert_eq!(draft.period, Period::PerWeek);
        assert_eq!(draft.recurrence, Recurrence::Mensal);
        assert_eq!(draft.value_display(), "");
    }

    #[test]
    fn test_set_period_reconciles_frequency() {
        let mut draft = PlanDraft {
            frequency: Frequency::EveryDay,
            period: Period::PerWeek,
            ..PlanDraft::default()
        };
        draft.set_period(Period::PerYear);
        assert_eq!(draft.period, Period::PerYear);
        assert_eq!(draft.frequency, Frequency::Times(1));
    }

    #[test]
    fn test_set_period_keeps_valid_frequency() {
        let mut draft = PlanDraft {
            frequency: Frequency::Times(7),
            period: Period::PerMonth,
            ..PlanDraft::default()
        };
        draft.set_period(Period::PerWeek);
        assert_eq!(draft.frequency, Frequency::Times(7));
    }

    #[test]
    fn test_set_value_keeps_raw_digits() {
        let mut draft = PlanDraft::default();
        draft.set_value("R$ 12,50");
        assert_eq!(draft.value_cents, "1250");
        assert_eq!(draft.value_display(), "R$ 12,50");

        // Re-applying the displayed string does not shift the amount
        let display = draft.value_display();
        draft.set_value(&display);
        assert_eq!(draft.value_display(), "R$ 12,50");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut draft = PlanDraft::default();
        assert!(draft.validate().is_err()); // no value yet

        draft.set_value("30000");
        assert!(draft.validate().is_ok());

        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_into_plan_derives_labels() {
        let mut draft = PlanDraft {
            name: "Plano Vôlei Premium".to_string(),
            frequency: Frequency::Times(3),
            period: Period::PerWeek,
            recurrence: Recurrence::Anual,
            value_cents: String::new(),
        };
        draft.set_value("50000");

        let created_at = Utc::now();
        let plan = draft.into_plan(PlanId::new_v4(), created_at);
        assert_eq!(plan.name, "Plano Vôlei Premium");
        assert_eq!(plan.frequency_label, "3x semana");
        assert_eq!(plan.price_label, "R$ 500,00");
        assert_eq!(plan.period_label, "/ano");
        assert_eq!(plan.created_at, created_at);
    }

    #[test]
    fn test_into_plan_every_day_label() {
        let draft = PlanDraft {
            frequency: Frequency::EveryDay,
            value_cents: "9900".to_string(),
            ..PlanDraft::default()
        };
        let plan = draft.into_plan(PlanId::new_v4(), Utc::now());
        assert_eq!(plan.frequency_label, "Todos os dias");
    }
}
