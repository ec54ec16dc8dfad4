//! Coverage tier lookup keyed by number of children.

/// Maximum age (inclusive) at which a worker still has coverage.
///
/// Workers strictly older than 65 have no coverage and therefore no cost;
/// a worker aged exactly 65 is still covered.
pub const COVERAGE_MAX_AGE: u32 = 65;

/// One of the three discrete cost bands, in UF.
///
/// Each tier carries the health/life component and the dental component;
/// the dental component only contributes when the policy has dental care.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageTier {
    /// Health/life coverage cost per worker, in UF.
    pub health_life: f64,
    /// Dental coverage cost per worker, in UF.
    pub dental: f64,
}

impl CoverageTier {
    /// Returns the total tier cost, including dental only when covered.
    pub fn total(&self, has_dental_care: bool) -> f64 {
        if has_dental_care {
            self.health_life + self.dental
        } else {
            self.health_life
        }
    }
}

/// Tier for workers with no children.
pub const TIER_NO_CHILDREN: CoverageTier = CoverageTier {
    health_life: 0.279,
    dental: 0.12,
};

/// Tier for workers with exactly one child.
pub const TIER_ONE_CHILD: CoverageTier = CoverageTier {
    health_life: 0.4396,
    dental: 0.1950,
};

/// Tier for workers with two or more children.
pub const TIER_TWO_OR_MORE: CoverageTier = CoverageTier {
    health_life: 0.5599,
    dental: 0.2480,
};

/// Selects the coverage tier for a worker's number of children.
///
/// The lookup is explicit: 0 and 1 have dedicated tiers, everything else
/// falls into the two-or-more tier. Negative counts are intentionally not
/// rejected; they take the fallback tier as well.
///
/// # Examples
///
/// ```
/// use policy_engine::calculation::tier_for_childs;
///
/// assert_eq!(tier_for_childs(0).health_life, 0.279);
/// assert_eq!(tier_for_childs(1).health_life, 0.4396);
/// assert_eq!(tier_for_childs(2).health_life, 0.5599);
/// assert_eq!(tier_for_childs(10).health_life, 0.5599);
/// assert_eq!(tier_for_childs(-3).health_life, 0.5599);
/// ```
pub fn tier_for_childs(childs: i64) -> &'static CoverageTier {
    match childs {
        0 => &TIER_NO_CHILDREN,
        1 => &TIER_ONE_CHILD,
        _ => &TIER_TWO_OR_MORE,
    }
}
