/// How disruptive a recommended price change is likely to be
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RiskTier {
    /// A change of at most 2 currency units
    Low,
    /// A change of more than 2 and at most 5 currency units
    Medium,
    /// A change of more than 5 currency units
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::from_str::<RiskTier>("\"high\"").unwrap(),
            RiskTier::High
        );
        assert_eq!(RiskTier::Low.to_string(), "low");
    }
}
