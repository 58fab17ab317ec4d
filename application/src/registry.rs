use std::collections::HashMap;
use std::sync::Arc;

use transcription_domain::{TranscriptionModel, TranscriptionProvider};

/// Read-only lookup from model identifier to its provider adapter.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<TranscriptionModel, Arc<dyn TranscriptionProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, provider: Arc<dyn TranscriptionProvider>) -> Self {
        self.providers.insert(provider.model(), provider);
        self
    }

    pub fn get(&self, model: TranscriptionModel) -> Option<Arc<dyn TranscriptionProvider>> {
        self.providers.get(&model).cloned()
    }

    pub fn models(&self) -> Vec<TranscriptionModel> {
        TranscriptionModel::ALL
            .into_iter()
            .filter(|model| self.providers.contains_key(model))
            .collect()
    }
}
