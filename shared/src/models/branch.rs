//! Branch Model

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Physical café location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// IANA timezone the branch operates in; drives calendar day boundaries
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

pub fn default_timezone() -> Tz {
    chrono_tz::Europe::Lisbon
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_defaults() {
        let branch: Branch = serde_json::from_str(r#"{"id":1,"name":"Baixa"}"#).unwrap();
        assert_eq!(branch.timezone, chrono_tz::Europe::Lisbon);
        assert!(branch.is_active);
    }

    #[test]
    fn test_branch_timezone_parse() {
        let branch: Branch =
            serde_json::from_str(r#"{"id":2,"name":"Porto","timezone":"America/Sao_Paulo"}"#)
                .unwrap();
        assert_eq!(branch.timezone, chrono_tz::America::Sao_Paulo);
    }
}
