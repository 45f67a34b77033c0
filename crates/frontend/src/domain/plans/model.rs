use chrono::Utc;
use contracts::domain::plans::aggregate::{Plan, PlanDraft, PlanId};
use leptos::prelude::*;

/// In-memory stand-in for the plan persistence service, provided to the
/// pages through context. It owns the displayed collection and assigns
/// identity and creation time to accepted drafts; swapping in a real
/// backend client only needs to keep this API.
#[derive(Clone, Copy)]
pub struct PlanStore {
    plans: RwSignal<Vec<Plan>>,
}

impl PlanStore {
    pub fn new(initial: Vec<Plan>) -> Self {
        Self {
            plans: RwSignal::new(initial),
        }
    }

    pub fn with_mock_plans() -> Self {
        Self::new(mock_plans())
    }

    /// The displayed collection, in insertion order
    pub fn plans(&self) -> Signal<Vec<Plan>> {
        self.plans.into()
    }

    /// Validates and stores a draft. On success the created plan is
    /// appended to the collection and returned; on rejection the caller
    /// keeps the draft untouched.
    pub async fn create(&self, draft: PlanDraft) -> Result<Plan, String> {
        draft.validate().map_err(|e| e.to_string())?;

        let plan = draft.into_plan(PlanId::new_v4(), Utc::now());
        log::info!(
            "plan created: {}",
            serde_json::to_string(&plan).unwrap_or_default()
        );
        self.plans.update(|plans| plans.push(plan.clone()));
        Ok(plan)
    }
}

/// Static display data until a real query interface exists.
pub(crate) fn mock_plans() -> Vec<Plan> {
    let seed = [
        ("Plano Vôlei Pro", "2x semana", "R$ 300,00", "/semestre"),
        ("Plano Vôlei Premium", "3x semana", "R$ 500,00", "/ano"),
        ("Plano Vôlei Livre", "2x semana", "R$ 250,00", "/mês"),
    ];

    seed.into_iter()
        .map(|(name, frequency_label, price_label, period_label)| Plan {
            id: PlanId::new_v4(),
            name: name.to_string(),
            frequency_label: frequency_label.to_string(),
            price_label: price_label.to_string(),
            period_label: period_label.to_string(),
            created_at: Utc::now(),
        })
        .collect()
}
