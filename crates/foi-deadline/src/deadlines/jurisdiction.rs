use super::calculator::DeadlineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Government body whose access-to-information statute sets the response window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Ontario,
    Federal,
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    Newfoundland,
    NovaScotia,
    Pei,
    Quebec,
    Saskatchewan,
    NorthwestTerritories,
    Nunavut,
    Yukon,
}

impl Jurisdiction {
    /// Display order used by selection lists and reports.
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Ontario,
            Self::Federal,
            Self::Alberta,
            Self::BritishColumbia,
            Self::Manitoba,
            Self::NewBrunswick,
            Self::Newfoundland,
            Self::NovaScotia,
            Self::Pei,
            Self::Quebec,
            Self::Saskatchewan,
            Self::NorthwestTerritories,
            Self::Nunavut,
            Self::Yukon,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Ontario => "ontario",
            Self::Federal => "federal",
            Self::Alberta => "alberta",
            Self::BritishColumbia => "british_columbia",
            Self::Manitoba => "manitoba",
            Self::NewBrunswick => "new_brunswick",
            Self::Newfoundland => "newfoundland",
            Self::NovaScotia => "nova_scotia",
            Self::Pei => "pei",
            Self::Quebec => "quebec",
            Self::Saskatchewan => "saskatchewan",
            Self::NorthwestTerritories => "northwest_territories",
            Self::Nunavut => "nunavut",
            Self::Yukon => "yukon",
        }
    }

    pub fn policy(self) -> &'static JurisdictionPolicy {
        &REGISTRY[self as usize]
    }

    pub fn from_code(code: &str) -> Result<Self, DeadlineError> {
        let trimmed = code.trim();
        Self::ordered()
            .into_iter()
            .find(|jurisdiction| jurisdiction.code() == trimmed)
            .ok_or_else(|| DeadlineError::UnknownJurisdiction(trimmed.to_string()))
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = DeadlineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_code(value)
    }
}

/// How a jurisdiction counts the days in its response window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    BusinessDays,
    CalendarDays,
}

impl PeriodUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessDays => "business days",
            Self::CalendarDays => "calendar days",
        }
    }
}

/// Statutory response window for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionPolicy {
    pub jurisdiction: Jurisdiction,
    pub display_name: &'static str,
    pub period_length: u32,
    pub period_unit: PeriodUnit,
    pub description: &'static str,
}

impl JurisdictionPolicy {
    pub fn code(&self) -> &'static str {
        self.jurisdiction.code()
    }
}

const fn policy(
    jurisdiction: Jurisdiction,
    display_name: &'static str,
    period_length: u32,
    period_unit: PeriodUnit,
    description: &'static str,
) -> JurisdictionPolicy {
    JurisdictionPolicy {
        jurisdiction,
        display_name,
        period_length,
        period_unit,
        description,
    }
}

use Jurisdiction as J;
use PeriodUnit::{BusinessDays, CalendarDays};

// Indexed by `Jurisdiction as usize`; keep in declaration order.
static REGISTRY: [JurisdictionPolicy; 14] = [
    policy(J::Ontario, "Ontario", 30, BusinessDays, "30 business days from receipt"),
    policy(J::Federal, "Federal", 30, CalendarDays, "30 calendar days from receipt"),
    policy(J::Alberta, "Alberta", 30, CalendarDays, "30 calendar days from receipt"),
    policy(
        J::BritishColumbia,
        "British Columbia",
        30,
        BusinessDays,
        "30 business days from receipt",
    ),
    policy(J::Manitoba, "Manitoba", 30, CalendarDays, "30 calendar days from receipt"),
    policy(
        J::NewBrunswick,
        "New Brunswick",
        30,
        CalendarDays,
        "30 calendar days from receipt",
    ),
    policy(
        J::Newfoundland,
        "Newfoundland and Labrador",
        20,
        BusinessDays,
        "20 business days from receipt",
    ),
    policy(
        J::NovaScotia,
        "Nova Scotia",
        30,
        CalendarDays,
        "30 calendar days from receipt",
    ),
    policy(
        J::Pei,
        "Prince Edward Island",
        30,
        CalendarDays,
        "30 calendar days from receipt",
    ),
    policy(J::Quebec, "Quebec", 20, CalendarDays, "20 calendar days from receipt"),
    policy(
        J::Saskatchewan,
        "Saskatchewan",
        30,
        CalendarDays,
        "30 calendar days from receipt",
    ),
    policy(
        J::NorthwestTerritories,
        "Northwest Territories",
        30,
        CalendarDays,
        "30 calendar days from receipt",
    ),
    policy(J::Nunavut, "Nunavut", 30, CalendarDays, "30 calendar days from receipt"),
    policy(J::Yukon, "Yukon", 30, CalendarDays, "30 calendar days from receipt"),
];

/// Read-only view over the process-wide policy table.
#[derive(Debug, Clone, Copy, Default)]
pub struct JurisdictionRegistry;

impl JurisdictionRegistry {
    pub fn lookup(code: &str) -> Result<&'static JurisdictionPolicy, DeadlineError> {
        Jurisdiction::from_code(code).map(Jurisdiction::policy)
    }

    pub fn policies() -> &'static [JurisdictionPolicy] {
        &REGISTRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rows_line_up_with_enum_order() {
        for (index, jurisdiction) in Jurisdiction::ordered().into_iter().enumerate() {
            assert_eq!(REGISTRY[index].jurisdiction, jurisdiction);
            assert_eq!(jurisdiction.policy().jurisdiction, jurisdiction);
        }
    }

    #[test]
    fn every_policy_has_a_positive_window() {
        assert!(JurisdictionRegistry::policies()
            .iter()
            .all(|policy| policy.period_length > 0));
    }

    #[test]
    fn description_matches_the_counting_unit() {
        for policy in JurisdictionRegistry::policies() {
            let expected = format!(
                "{} {} from receipt",
                policy.period_length,
                policy.period_unit.label()
            );
            assert_eq!(policy.description, expected, "{}", policy.code());
        }
    }

    #[test]
    fn only_three_jurisdictions_count_business_days() {
        let business: Vec<_> = JurisdictionRegistry::policies()
            .iter()
            .filter(|policy| policy.period_unit == PeriodUnit::BusinessDays)
            .map(JurisdictionPolicy::code)
            .collect();
        assert_eq!(business, vec!["ontario", "british_columbia", "newfoundland"]);
    }

    #[test]
    fn lookup_trims_but_stays_case_sensitive() {
        let policy = JurisdictionRegistry::lookup("  quebec ").expect("quebec resolves");
        assert_eq!(policy.display_name, "Quebec");
        assert_eq!(policy.period_length, 20);

        let err = JurisdictionRegistry::lookup("Quebec").expect_err("codes are lowercase");
        assert!(matches!(err, DeadlineError::UnknownJurisdiction(code) if code == "Quebec"));
    }
}
