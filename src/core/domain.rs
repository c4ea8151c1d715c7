use serde::{Deserialize, Serialize};

pub type ItemId = u32;

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable {
    fn id(&self) -> ItemId;
}

// Configuration abstracts lending options for the library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // days an item may be kept before fines start to accrue
    pub grace_period_days: i64,
    // fine in whole currency units for each day past the grace period
    pub fine_per_day: u64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            grace_period_days: 7,
            fine_per_day: 10,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(7, config.grace_period_days);
        assert_eq!(10, config.fine_per_day);
    }

    #[test]
    fn test_should_build_default_config() {
        assert_eq!(Configuration::new("main"), Configuration::default());
    }
}
