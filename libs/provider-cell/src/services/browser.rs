use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorPreferences};
use shared_models::clinic::Provider;
use tracing::warn;

use crate::models::{SortBy, ALL_SPECIALTIES};

/// Filter choices: `"all"`, then each non-empty specialty once, in the order
/// first seen.
pub fn specialty_options(providers: &[Provider]) -> Vec<String> {
    let mut options = vec![ALL_SPECIALTIES.to_string()];

    for provider in providers {
        if !provider.specialty.is_empty() && !options.iter().any(|o| o == &provider.specialty) {
            options.push(provider.specialty.clone());
        }
    }

    options
}

pub fn filter_by_specialty(providers: Vec<Provider>, specialty: &str) -> Vec<Provider> {
    if specialty == ALL_SPECIALTIES {
        return providers;
    }

    providers
        .into_iter()
        .filter(|p| p.specialty == specialty)
        .collect()
}

/// Stable sort; equal keys keep their fetch order.
pub fn sort_providers(providers: &mut [Provider], sort: SortBy) {
    match sort {
        SortBy::Rating => providers.sort_by(|a, b| {
            b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortBy::Experience => {
            providers.sort_by(|a, b| b.years_of_experience.cmp(&a.years_of_experience))
        }
        SortBy::Name => sort_by_name(providers),
    }
}

/// Root-locale collation: accents and case only break ties, lowercase first.
fn sort_by_name(providers: &mut [Provider]) {
    match Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()) {
        Ok(collator) => providers.sort_by(|a, b| collator.compare(&a.name, &b.name)),
        Err(err) => {
            warn!("Name collation unavailable, using code point order: {}", err);
            providers.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}
