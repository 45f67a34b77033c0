use crate::domain::plans::model::PlanStore;
use contracts::domain::plans::aggregate::PlanDraft;
use contracts::domain::plans::schedule::{valid_frequencies, Frequency, Period, Recurrence};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the plan creation form. Holds the draft and the
/// submission error; all mutations are synchronous field updates except
/// `save_command`, which hands the draft to the plan store.
#[derive(Clone, Copy)]
pub struct CreatePlanViewModel {
    pub form: RwSignal<PlanDraft>,
    pub error: RwSignal<Option<String>>,
    store: PlanStore,
}

impl CreatePlanViewModel {
    pub fn new(store: PlanStore) -> Self {
        Self {
            form: RwSignal::new(PlanDraft::default()),
            error: RwSignal::new(None),
            store,
        }
    }

    pub fn set_name(&self, name: String) {
        self.form.update(|f| f.name = name);
    }

    pub fn set_frequency(&self, label: &str) {
        if let Some(frequency) = Frequency::parse(label) {
            self.form.update(|f| f.frequency = frequency);
        }
    }

    /// Applies the period and the frequency correction it implies in one
    /// update, so no period/frequency mismatch is ever observable.
    pub fn set_period(&self, label: &str) {
        if let Some(period) = Period::parse(label) {
            self.form.update(|f| f.set_period(period));
        }
    }

    pub fn set_recurrence(&self, recurrence: Recurrence) {
        self.form.update(|f| f.recurrence = recurrence);
    }

    /// Stores the keystroke's digits; the display derives from the buffer
    pub fn set_value(&self, raw: &str) {
        self.form.update(|f| f.set_value(raw));
    }

    pub fn value_display(&self) -> String {
        self.form.with(|f| f.value_display())
    }

    /// Frequency options selectable under the draft's current period
    pub fn frequency_options(&self) -> Vec<String> {
        self.form
            .with(|f| valid_frequencies(f.period))
            .iter()
            .map(Frequency::label)
            .collect()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| !f.name.trim().is_empty() && !f.value_cents.is_empty())
    }

    /// Hands the draft to the store. The form stays populated on
    /// rejection so the user can correct it and retry.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let draft = self.form.get();
        if let Err(e) = draft.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let store = self.store;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match store.create(draft).await {
                Ok(_) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
