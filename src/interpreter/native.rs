use super::error::{RangeError, RuntimeErrorKind};
use crate::ast::Function;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Evaluates built-in functions on already evaluated arguments.
///
/// Trigonometric functions take radians as-is.
#[derive(Debug)]
pub struct Natives {
    rng: StdRng,
}

impl Natives {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn call(
        &mut self,
        function: Function,
        arguments: &[f64],
    ) -> Result<f64, RuntimeErrorKind> {
        let result = match (function, arguments) {
            (Function::Sin, &[v]) => Ok(v.sin()),
            (Function::Cos, &[v]) => Ok(v.cos()),
            (Function::Tan, &[v]) => Ok(v.tan()),
            (Function::Sqrt, &[v]) => {
                if v < 0.0 {
                    Err(RangeError::NegativeSqrt(v))
                } else {
                    Ok(v.sqrt())
                }
            }
            (Function::Random, &[lower, upper]) => {
                if !lower.is_finite() || !upper.is_finite() {
                    Err(RangeError::UnboundedInterval { lower, upper })
                } else if upper < lower {
                    Err(RangeError::InvertedInterval { lower, upper })
                } else if (upper - lower).is_finite() {
                    Ok(self.rng.gen_range(lower..=upper))
                } else {
                    // The width overflows, so interpolate between the bounds instead.
                    let t: f64 = self.rng.gen_range(0.0..=1.0);
                    Ok((lower * (1.0 - t) + upper * t).clamp(lower, upper))
                }
            }
            _ => {
                return Err(RuntimeErrorKind::InvalidArgumentCount {
                    function: function.get_name(),
                    actual: arguments.len(),
                    expected: function.arity(),
                });
            }
        };
        result.map_err(RuntimeErrorKind::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigonometry_uses_radians() {
        let mut natives = Natives::new(Some(0));
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert_eq!(natives.call(Function::Sin, &[half_pi]), Ok(1.0));
        assert_eq!(natives.call(Function::Cos, &[0.0]), Ok(1.0));
        assert_eq!(natives.call(Function::Tan, &[0.0]), Ok(0.0));
    }

    #[test]
    fn sqrt_rejects_negative_arguments() {
        let mut natives = Natives::new(Some(0));
        assert_eq!(natives.call(Function::Sqrt, &[16.0]), Ok(4.0));
        assert_eq!(natives.call(Function::Sqrt, &[0.0]), Ok(0.0));
        assert_eq!(
            natives.call(Function::Sqrt, &[-1.0]),
            Err(RangeError::NegativeSqrt(-1.0).into())
        );
    }

    #[test]
    fn random_stays_within_bounds() {
        let mut natives = Natives::new(Some(42));
        for _ in 0..1000 {
            let v = natives.call(Function::Random, &[1.0, 5.0]).unwrap();
            assert!((1.0..=5.0).contains(&v));
        }
        assert_eq!(natives.call(Function::Random, &[3.0, 3.0]), Ok(3.0));
        assert_eq!(
            natives.call(Function::Random, &[5.0, 1.0]),
            Err(RangeError::InvertedInterval {
                lower: 5.0,
                upper: 1.0
            }
            .into())
        );
        assert_eq!(
            natives.call(Function::Random, &[0.0, f64::INFINITY]),
            Err(RangeError::UnboundedInterval {
                lower: 0.0,
                upper: f64::INFINITY
            }
            .into())
        );
    }

    #[test]
    fn random_handles_intervals_wider_than_f64() {
        let mut natives = Natives::new(Some(1));
        for _ in 0..100 {
            let v = natives.call(Function::Random, &[-1e308, 1e308]).unwrap();
            assert!((-1e308..=1e308).contains(&v));
        }
        let v = natives
            .call(Function::Random, &[-f64::MAX, f64::MAX])
            .unwrap();
        assert!(v.is_finite());
    }

    #[test]
    fn wrong_arity_is_reported() {
        let mut natives = Natives::new(Some(0));
        assert_eq!(
            natives.call(Function::Random, &[1.0]),
            Err(RuntimeErrorKind::InvalidArgumentCount {
                function: "random",
                actual: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn seeded_generators_repeat() {
        let mut a = Natives::new(Some(7));
        let mut b = Natives::new(Some(7));
        for _ in 0..10 {
            assert_eq!(
                a.call(Function::Random, &[0.0, 100.0]),
                b.call(Function::Random, &[0.0, 100.0])
            );
        }
    }
}
