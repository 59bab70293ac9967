use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Ethereum,
    Arbitrum,
    Optimism,
    Base,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Ethereum,
        Network::Arbitrum,
        Network::Optimism,
        Network::Base,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Arbitrum => "Arbitrum",
            Network::Optimism => "Optimism",
            Network::Base => "Base",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "network",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderName {
    #[serde(rename = "Aave V3")]
    AaveV3,
    Morpho,
    Custom,
}

impl ProviderName {
    pub const ALL: [ProviderName; 3] = [
        ProviderName::AaveV3,
        ProviderName::Morpho,
        ProviderName::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::AaveV3 => "Aave V3",
            ProviderName::Morpho => "Morpho",
            ProviderName::Custom => "Custom",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "aave-v3" / "aavev3" on the command line as well as the display name.
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        ProviderName::ALL
            .into_iter()
            .find(|p| {
                p.as_str()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase()
                    == normalized
            })
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "provider",
                value: s.to_string(),
            })
    }
}

/// Coarse risk selector, read as "survive an X% drawdown".
///
/// Only the three recognised selectors are representable, so any other
/// integer is rejected when the value enters the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RiskTarget {
    Drawdown15,
    Drawdown25,
    Drawdown35,
}

impl RiskTarget {
    pub const ALL: [RiskTarget; 3] = [
        RiskTarget::Drawdown15,
        RiskTarget::Drawdown25,
        RiskTarget::Drawdown35,
    ];

    pub fn percent(&self) -> u8 {
        match self {
            RiskTarget::Drawdown15 => 15,
            RiskTarget::Drawdown25 => 25,
            RiskTarget::Drawdown35 => 35,
        }
    }
}

impl TryFrom<u8> for RiskTarget {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(RiskTarget::Drawdown15),
            25 => Ok(RiskTarget::Drawdown25),
            35 => Ok(RiskTarget::Drawdown35),
            other => Err(DomainError::InvalidRiskTarget(u32::from(other))),
        }
    }
}

impl From<RiskTarget> for u8 {
    fn from(target: RiskTarget) -> Self {
        target.percent()
    }
}

impl fmt::Display for RiskTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for RiskTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        let value: u32 = trimmed.parse().map_err(|_| DomainError::UnknownVariant {
            kind: "risk target",
            value: s.to_string(),
        })?;
        u8::try_from(value)
            .map_err(|_| DomainError::InvalidRiskTarget(value))
            .and_then(RiskTarget::try_from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    #[default]
    Simple,
    Pro,
}

impl fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyMode::Simple => f.write_str("simple"),
            StrategyMode::Pro => f.write_str("pro"),
        }
    }
}

/// Valuation scenario for a points airdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FdvScenario {
    Conservative,
    Base,
    Bull,
}

/// How much the expected points range can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}
