use crate::models::{CatalogOption, OptionPrice, PriceConfig};
use crate::options::OptionSet;
use log::{debug, trace};

/// Decides whether a mandatory candidate is accepted, given the records
/// accepted so far.
pub trait MandatoryFilter {
    fn accept(&self, accepted: &[CatalogOption], candidate: &CatalogOption) -> bool;
}

impl<F> MandatoryFilter for F
where
    F: Fn(&[CatalogOption], &CatalogOption) -> bool,
{
    fn accept(&self, accepted: &[CatalogOption], candidate: &CatalogOption) -> bool {
        self(accepted, candidate)
    }
}

/// Rejects every candidate of the listed families.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFamilies {
    families: Vec<String>,
}

impl ExcludeFamilies {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }
}

impl MandatoryFilter for ExcludeFamilies {
    fn accept(&self, _accepted: &[CatalogOption], candidate: &CatalogOption) -> bool {
        !self.families.iter().any(|f| f == candidate.family())
    }
}

/// Rejects candidates of `family` once an option of `chosen` was accepted.
#[derive(Debug, Clone)]
pub struct SkipWhenChosen {
    pub family: String,
    pub chosen: String,
}

impl SkipWhenChosen {
    pub fn new(family: impl Into<String>, chosen: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            chosen: chosen.into(),
        }
    }
}

impl MandatoryFilter for SkipWhenChosen {
    fn accept(&self, accepted: &[CatalogOption], candidate: &CatalogOption) -> bool {
        candidate.family() != self.family || !accepted.iter().any(|o| o.family() == self.chosen)
    }
}

/// All filters must accept.
impl MandatoryFilter for Vec<Box<dyn MandatoryFilter>> {
    fn accept(&self, accepted: &[CatalogOption], candidate: &CatalogOption) -> bool {
        self.iter().all(|f| f.accept(accepted, candidate))
    }
}

/// Mandatory records in input order, optionally narrowed by `filter`.
pub fn mandatory_options(
    records: &[CatalogOption],
    filter: Option<&dyn MandatoryFilter>,
) -> Vec<CatalogOption> {
    let mut options: Vec<CatalogOption> = Vec::new();

    for record in records.iter().filter(|r| r.mandatory) {
        if let Some(filter) = filter {
            if !filter.accept(&options, record) {
                debug!("Filter rejected mandatory option {}", record.option);
                continue;
            }
        }

        options.push(record.clone());
    }

    options
}

/// Cheapest mandatory record per family under the default price config.
pub fn cheapest_mandatory_options(records: &[CatalogOption]) -> Vec<CatalogOption> {
    cheapest_mandatory_options_with(records, &PriceConfig::default())
}

/// Cheapest mandatory record per family under `config`.
///
/// The first record of a family takes its slot. A later record replaces it
/// only when both sides have a price under `config` and the newcomer's is
/// strictly lower; ties and unpriced records leave the slot alone.
pub fn cheapest_mandatory_options_with(
    records: &[CatalogOption],
    config: &PriceConfig,
) -> Vec<CatalogOption> {
    let mut options: Vec<CatalogOption> = Vec::new();

    for record in records.iter().filter(|r| r.mandatory) {
        let Some(slot) = options.iter().position(|o| o.family() == record.family()) else {
            options.push(record.clone());
            continue;
        };

        let Some(new_price) = resolve_price(record, config) else {
            trace!("{} has no {} price, skipped", record.option, config);
            continue;
        };

        let Some(current_price) = resolve_price(&options[slot], config) else {
            trace!("{} has no {} price, kept", options[slot].option, config);
            continue;
        };

        if new_price.price_in_ucents < current_price.price_in_ucents {
            debug!(
                "{} ({}) is cheaper than {} ({})",
                record.option,
                new_price.price_in_ucents,
                options[slot].option,
                current_price.price_in_ucents
            );
            options[slot] = record.clone();
        }
    }

    options
}

/// First price of `record` matching `config`.
pub fn resolve_price<'a>(
    record: &'a CatalogOption,
    config: &PriceConfig,
) -> Option<&'a OptionPrice> {
    record.price_for(config)
}

/// The options carried by `records`, in order.
pub fn to_options(records: &[CatalogOption]) -> OptionSet {
    records.iter().map(|r| r.option.clone()).collect()
}

/// Sum of the records' prices under `config`, or `None` when one of them
/// cannot be priced.
pub fn total_price(records: &[CatalogOption], config: &PriceConfig) -> Option<i64> {
    records
        .iter()
        .map(|r| resolve_price(r, config).map(|p| p.price_in_ucents))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionPrice, OrderOption};

    fn record(family: &str, plan_code: &str, mandatory: bool, price: Option<i64>) -> CatalogOption {
        let prices = price
            .map(|p| vec![OptionPrice::new("P1M", "default", p)])
            .unwrap_or_default();
        CatalogOption::new(OrderOption::new(family, plan_code), mandatory, prices)
    }

    fn plan_codes(records: &[CatalogOption]) -> Vec<&str> {
        records.iter().map(|r| r.plan_code()).collect()
    }

    #[test]
    fn test_mandatory_options_without_filter() {
        let records = vec![
            record("memory", "ram-32g", true, Some(10)),
            record("bandwidth", "bw-1g", false, Some(5)),
            record("storage", "ssd-1", true, None),
        ];

        let mandatory = mandatory_options(&records, None);
        assert_eq!(plan_codes(&mandatory), vec!["ram-32g", "ssd-1"]);
    }

    #[test]
    fn test_mandatory_options_filter_sees_accepted_records() {
        let records = vec![
            record("system-storage", "nvme-1", true, None),
            record("storage", "ssd-1", true, None),
            record("memory", "ram-32g", true, None),
        ];

        let filter = |accepted: &[CatalogOption], candidate: &CatalogOption| {
            !(candidate.family() == "storage"
                && accepted.iter().any(|o| o.family() == "system-storage"))
        };

        let mandatory = mandatory_options(&records, Some(&filter));
        assert_eq!(plan_codes(&mandatory), vec!["nvme-1", "ram-32g"]);
    }

    #[test]
    fn test_rejected_candidate_is_not_seen_by_later_evaluations() {
        let records = vec![
            record("storage", "ssd-1", true, None),
            record("memory", "ram-32g", true, None),
        ];
        let filters: Vec<Box<dyn MandatoryFilter>> = vec![
            Box::new(ExcludeFamilies::new(["storage"])),
            Box::new(SkipWhenChosen::new("memory", "storage")),
        ];

        let mandatory = mandatory_options(&records, Some(&filters));
        assert_eq!(plan_codes(&mandatory), vec!["ram-32g"]);
    }

    #[test]
    fn test_cheapest_replaces_only_when_strictly_lower() {
        let records = vec![
            record("memory", "ram-32g", true, Some(300)),
            record("memory", "ram-16g", true, Some(100)),
            record("memory", "ram-16g-bis", true, Some(100)),
            record("memory", "ram-64g", true, Some(500)),
        ];

        let cheapest = cheapest_mandatory_options(&records);
        assert_eq!(plan_codes(&cheapest), vec!["ram-16g"]);
    }

    #[test]
    fn test_cheapest_keeps_family_position() {
        let records = vec![
            record("memory", "ram-32g", true, Some(300)),
            record("storage", "ssd-1", true, Some(50)),
            record("memory", "ram-16g", true, Some(100)),
        ];

        let cheapest = cheapest_mandatory_options(&records);
        assert_eq!(plan_codes(&cheapest), vec!["ram-16g", "ssd-1"]);
    }

    #[test]
    fn test_cheapest_skips_unresolvable_prices() {
        // Unpriced newcomer never replaces
        let records = vec![
            record("memory", "ram-32g", true, Some(300)),
            record("memory", "ram-free", true, None),
        ];
        assert_eq!(plan_codes(&cheapest_mandatory_options(&records)), vec!["ram-32g"]);

        // Unpriced occupant is never replaced either
        let records = vec![
            record("memory", "ram-unknown", true, None),
            record("memory", "ram-16g", true, Some(1)),
        ];
        assert_eq!(
            plan_codes(&cheapest_mandatory_options(&records)),
            vec!["ram-unknown"]
        );
    }

    #[test]
    fn test_cheapest_ignores_optional_records() {
        let records = vec![
            record("memory", "ram-32g", true, Some(300)),
            record("memory", "ram-8g", false, Some(1)),
        ];
        assert_eq!(plan_codes(&cheapest_mandatory_options(&records)), vec!["ram-32g"]);
    }

    #[test]
    fn test_cheapest_with_explicit_config() {
        let mut yearly = record("memory", "ram-32g", true, Some(300));
        yearly.prices.push(OptionPrice::new("P12M", "default", 10));
        let monthly_cheaper = CatalogOption::new(
            OrderOption::new("memory", "ram-16g"),
            true,
            vec![
                OptionPrice::new("P1M", "default", 100),
                OptionPrice::new("P12M", "default", 20),
            ],
        );
        let records = vec![yearly, monthly_cheaper];

        assert_eq!(plan_codes(&cheapest_mandatory_options(&records)), vec!["ram-16g"]);

        let config = PriceConfig::new("P12M", "default");
        assert_eq!(
            plan_codes(&cheapest_mandatory_options_with(&records, &config)),
            vec!["ram-32g"]
        );
    }

    #[test]
    fn test_to_options_and_total_price() {
        let records = vec![
            record("memory", "ram-32g", true, Some(300)),
            record("storage", "ssd-1", true, Some(50)),
        ];

        let options = to_options(&records);
        assert_eq!(options.families(), vec!["memory", "storage"]);
        assert_eq!(total_price(&records, &PriceConfig::default()), Some(350));

        let records = vec![record("memory", "ram-32g", true, None)];
        assert_eq!(total_price(&records, &PriceConfig::default()), None);
        assert_eq!(total_price(&[], &PriceConfig::default()), Some(0));
    }
}
