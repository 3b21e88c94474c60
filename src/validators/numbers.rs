//! Sign validators

use super::number_validator;

number_validator!(
    /// An integer that is zero or above.
    Positive,
    "number is not positive",
    |n| n >= 0
);

number_validator!(
    /// An integer below zero.
    Negative,
    "number is not negative",
    |n| n < 0
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Validator};
    use proptest::prelude::*;

    #[test]
    fn test_positive_boundaries() {
        assert!(Positive::from(0).validate().is_ok());
        assert!(Positive::from(i64::MAX).validate().is_ok());
        assert_eq!(
            Positive::from(-1).validate(),
            Err(Error::invalid("number is not positive"))
        );
    }

    #[test]
    fn test_negative_boundaries() {
        assert!(Negative::from(-1).validate().is_ok());
        assert!(Negative::from(i64::MIN).validate().is_ok());
        assert_eq!(
            Negative::from(0).validate(),
            Err(Error::invalid("number is not negative"))
        );
    }

    #[test]
    fn test_access() {
        let n = Negative::from(-7);
        assert_eq!(n.get(), -7);
        assert_eq!(*n, -7);
        assert_eq!(n.to_string(), "-7");
    }

    proptest! {
        #[test]
        fn prop_exactly_one_sign_holds(n in any::<i64>()) {
            let positive = Positive::from(n).validate().is_ok();
            let negative = Negative::from(n).validate().is_ok();
            prop_assert!(positive != negative);
        }
    }
}
