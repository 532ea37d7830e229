use crate::config::ConfigError;

/// Default blend of the five primary dimensions. Growth is reported but has
/// no weight of its own.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    personality: 0.30,
    values: 0.25,
    lifestyle: 0.20,
    attraction: 0.15,
    circumstantial: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub personality: f64,
    pub values: f64,
    pub lifestyle: f64,
    pub attraction: f64,
    pub circumstantial: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.personality + self.values + self.lifestyle + self.attraction + self.circumstantial
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("personality", self.personality),
            ("values", self.values),
            ("lifestyle", self.lifestyle),
            ("attraction", self.attraction),
            ("circumstantial", self.circumstantial),
        ]
    }

    /// Weights are used as given (no renormalization), so only reject values
    /// that would make the blend meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.sum() == 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn negative_or_nan_weight_is_rejected() {
        let negative = Weights {
            values: -0.1,
            ..DEFAULT_WEIGHTS
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::InvalidWeight {
                name: "values",
                value: -0.1
            })
        );

        let nan = Weights {
            attraction: f64::NAN,
            ..DEFAULT_WEIGHTS
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidWeight {
                name: "attraction",
                ..
            })
        ));
    }

    #[test]
    fn unnormalized_weights_are_accepted() {
        let heavy = Weights {
            personality: 1.0,
            ..DEFAULT_WEIGHTS
        };
        assert!(heavy.validate().is_ok());
        assert!(heavy.sum() > 1.0);
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let zero = Weights {
            personality: 0.0,
            values: 0.0,
            lifestyle: 0.0,
            attraction: 0.0,
            circumstantial: 0.0,
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroWeights));
    }
}
