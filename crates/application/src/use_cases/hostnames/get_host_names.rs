use crate::services::HostNameCache;
use erlide_domain::NameMode;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostNameReport {
    pub long_name: String,
    pub short_name: String,
    pub resolved_long_name: Option<String>,
    pub resolved_short_name: Option<String>,
    pub can_use_long_names: bool,
    pub can_use_short_names: bool,
}

pub struct GetHostNamesUseCase {
    cache: Arc<HostNameCache>,
}

impl GetHostNamesUseCase {
    pub fn new(cache: Arc<HostNameCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> HostNameReport {
        let names = self.cache.snapshot();
        HostNameReport {
            long_name: names.effective(NameMode::Long).to_string(),
            short_name: names.effective(NameMode::Short).to_string(),
            resolved_long_name: names.long().map(str::to_string),
            resolved_short_name: names.short().map(str::to_string),
            can_use_long_names: names.long().is_some(),
            can_use_short_names: names.short().is_some(),
        }
    }
}
