use crate::store::models::Cabin;

/// Capacity buckets offered by the cabins page filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityFilter {
    All,
    /// Up to 3 guests.
    Small,
    /// 4 to 7 guests.
    Medium,
    /// 8 guests and up.
    Large,
}

impl CapacityFilter {
    /// Unknown or absent values fall back to showing everything.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("small") => CapacityFilter::Small,
            Some("medium") => CapacityFilter::Medium,
            Some("large") => CapacityFilter::Large,
            _ => CapacityFilter::All,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            CapacityFilter::All => "all",
            CapacityFilter::Small => "small",
            CapacityFilter::Medium => "medium",
            CapacityFilter::Large => "large",
        }
    }

    pub fn matches(self, cabin: &Cabin) -> bool {
        match self {
            CapacityFilter::All => true,
            CapacityFilter::Small => cabin.max_capacity <= 3,
            CapacityFilter::Medium => (4..=7).contains(&cabin.max_capacity),
            CapacityFilter::Large => cabin.max_capacity >= 8,
        }
    }
}

pub fn filter_cabins(cabins: Vec<Cabin>, filter: CapacityFilter) -> Vec<Cabin> {
    cabins.into_iter().filter(|c| filter.matches(c)).collect()
}
