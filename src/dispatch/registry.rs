// ============================================================================
// Dispatch Registry
// Selects an implementation by the runtime kinds of all arguments
// ============================================================================

use super::value::{Kind, Value};
use crate::numeric::{AlgebraError, AlgebraResult};
use smallvec::SmallVec;
use std::fmt;

/// Declared argument kinds of one alternative, in order.
pub type Signature = SmallVec<[Kind; 2]>;

/// An implementation: receives the receiver and the original arguments.
pub type Handler<R> = fn(&R, &[Value]) -> AlgebraResult<Value>;

struct Alternative<R> {
    signature: Signature,
    handler: Handler<R>,
}

impl<R> Alternative<R> {
    /// Exact, order-sensitive match: same arity, same kind at every position.
    fn matches(&self, arguments: &[Value]) -> bool {
        self.signature.len() == arguments.len()
            && self
                .signature
                .iter()
                .zip(arguments)
                .all(|(&kind, argument)| argument.kind() == kind)
    }
}

/// Registration handle passed to the setup procedure of [`Overloaded::new`].
pub struct Overloader<R> {
    alternatives: Vec<Alternative<R>>,
    otherwise: Option<Handler<R>>,
}

impl<R> Overloader<R> {
    /// Register `handler` for arguments of exactly `kinds`.
    ///
    /// An empty `kinds` list registers the default implementation instead,
    /// replacing any earlier default.
    pub fn overload(&mut self, kinds: &[Kind], handler: Handler<R>) -> &mut Self {
        if kinds.is_empty() {
            self.otherwise = Some(handler);
        } else {
            self.alternatives.push(Alternative {
                signature: SmallVec::from_slice(kinds),
                handler,
            });
        }
        self
    }
}

/// An operation with several typed alternatives and one default.
///
/// Alternatives are tried in registration order and the first whose
/// signature matches every argument kind exactly is invoked. If none
/// matches, the default runs; without a registered default the call fails
/// with `UnmatchedArguments`.
///
/// # Example
/// ```
/// use decimal_algebra::dispatch::{Kind, Overloaded, Value};
/// use decimal_algebra::numeric::DecimalValue;
///
/// let negate_or_echo = Overloaded::<DecimalValue>::new("echo", Kind::Decimal, |o| {
///     o.overload(&[Kind::Decimal], |receiver, _| Ok(Value::from(receiver.negated())));
///     o.overload(&[], |_, arguments| Ok(arguments[0].clone()));
/// });
///
/// let one = DecimalValue::one();
/// assert_eq!(negate_or_echo.call(&one, &[Value::from(5)]).unwrap(), Value::from(-1));
/// ```
pub struct Overloaded<R> {
    operation: &'static str,
    receiver: Kind,
    alternatives: Vec<Alternative<R>>,
    otherwise: Option<Handler<R>>,
}

impl<R> Overloaded<R> {
    /// Build the operation by running `setup` against a fresh [`Overloader`].
    pub fn new(
        operation: &'static str,
        receiver: Kind,
        setup: impl FnOnce(&mut Overloader<R>),
    ) -> Self {
        let mut overloader = Overloader {
            alternatives: Vec::new(),
            otherwise: None,
        };
        setup(&mut overloader);

        Self {
            operation,
            receiver,
            alternatives: overloader.alternatives,
            otherwise: overloader.otherwise,
        }
    }

    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    #[inline]
    pub fn has_default(&self) -> bool {
        self.otherwise.is_some()
    }

    /// Registered signatures in registration order.
    pub fn signatures(&self) -> impl Iterator<Item = &[Kind]> {
        self.alternatives.iter().map(|alt| alt.signature.as_slice())
    }

    /// The first alternative matching `arguments`, if any.
    pub fn resolve(&self, arguments: &[Value]) -> Option<Handler<R>> {
        self.alternatives
            .iter()
            .find(|alt| alt.matches(arguments))
            .map(|alt| alt.handler)
    }

    /// Resolve and invoke with the receiver and arguments unchanged.
    pub fn call(&self, receiver: &R, arguments: &[Value]) -> AlgebraResult<Value> {
        if let Some(handler) = self.resolve(arguments) {
            return handler(receiver, arguments);
        }

        let kinds: Vec<Kind> = arguments.iter().map(Value::kind).collect();
        tracing::debug!(
            operation = self.operation,
            receiver = %self.receiver,
            arguments = ?kinds,
            "no overload matched"
        );

        match self.otherwise {
            Some(handler) => handler(receiver, arguments),
            None => Err(self.unmatched(arguments)),
        }
    }

    /// The error reported for arguments no alternative accepts.
    pub fn unmatched(&self, arguments: &[Value]) -> AlgebraError {
        AlgebraError::UnmatchedArguments {
            operation: self.operation,
            receiver: self.receiver.name(),
            arguments: arguments.iter().map(|a| a.kind().name()).collect(),
        }
    }
}

impl<R> fmt::Display for Overloaded<R> {
    /// One line per alternative, then the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for signature in self.signatures() {
            let kinds: Vec<&str> = signature.iter().map(|k| k.name()).collect();
            writeln!(f, "{}.{}({})", self.receiver, self.operation, kinds.join(", "))?;
        }
        write!(f, "{}.{}(..)", self.receiver, self.operation)
    }
}

impl<R> fmt::Debug for Overloaded<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overloaded")
            .field("operation", &self.operation)
            .field("receiver", &self.receiver)
            .field("alternatives", &self.alternatives.len())
            .field("has_default", &self.has_default())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ComplexValue;
    use crate::numeric::DecimalValue;

    struct Probe;

    fn tagged(tag: i32) -> AlgebraResult<Value> {
        Ok(Value::from(tag))
    }

    fn sample() -> Overloaded<Probe> {
        Overloaded::new("probe", Kind::Decimal, |o| {
            o.overload(&[Kind::Decimal], |_, _| tagged(1))
                .overload(&[Kind::Complex], |_, _| tagged(2))
                .overload(&[Kind::Decimal], |_, _| tagged(3))
                .overload(&[Kind::Decimal, Kind::Complex], |_, _| tagged(4));
        })
    }

    #[test]
    fn test_first_match_wins() {
        let probe = sample();
        assert_eq!(probe.call(&Probe, &[Value::from(7)]).unwrap(), Value::from(1));
        assert_eq!(
            probe
                .call(&Probe, &[Value::Complex(ComplexValue::new(1, 1))])
                .unwrap(),
            Value::from(2)
        );
    }

    #[test]
    fn test_arity_and_order_sensitive() {
        let probe = sample();
        let z = Value::Complex(ComplexValue::new(0, 1));
        assert_eq!(
            probe.call(&Probe, &[Value::from(1), z.clone()]).unwrap(),
            Value::from(4)
        );
        assert!(probe.call(&Probe, &[z, Value::from(1)]).is_err());
    }

    #[test]
    fn test_unmatched_without_default() {
        let probe = sample();
        let err = probe.call(&Probe, &[]).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::UnmatchedArguments {
                operation: "probe",
                receiver: "Decimal",
                arguments: Vec::new(),
            }
        );
        assert!(err.is_type_error());
        assert!(!probe.has_default());
    }

    #[test]
    fn test_empty_signature_registers_default() {
        let probe: Overloaded<Probe> = Overloaded::new("probe", Kind::Matrix, |o| {
            o.overload(&[Kind::Decimal], |_, _| tagged(1));
            o.overload(&[], |_, arguments| tagged(arguments.len() as i32 * 10));
        });

        assert!(probe.has_default());
        assert_eq!(probe.signatures().count(), 1);
        let z = Value::Complex(ComplexValue::new(2, 3));
        assert_eq!(probe.call(&Probe, &[z.clone(), z]).unwrap(), Value::from(20));
    }

    #[test]
    fn test_resolve() {
        let probe = sample();
        assert!(probe.resolve(&[Value::from(1)]).is_some());
        assert!(probe.resolve(&[Value::from(1), Value::from(1)]).is_none());
    }

    #[test]
    fn test_display_lists_signatures() {
        let rendered = sample().to_string();
        assert!(rendered.starts_with("Decimal.probe(Decimal)\nDecimal.probe(Complex)\n"));
        assert!(rendered.contains("Decimal.probe(Decimal, Complex)"));
        assert!(rendered.ends_with("Decimal.probe(..)"));
    }

    #[test]
    fn test_handlers_see_receiver_type() {
        let scale = Overloaded::<DecimalValue>::new("scale", Kind::Decimal, |o| {
            o.overload(&[Kind::Decimal], |receiver, arguments| match arguments {
                [Value::Decimal(factor)] => Ok(Value::from(receiver.multiply(factor))),
                _ => Err(AlgebraError::InvalidInput),
            });
            o.overload(&[], |receiver, _| Ok(Value::from(receiver.negated())));
        });

        let half: DecimalValue = "0.5".parse().unwrap();
        assert_eq!(
            scale.call(&half, &[Value::from(4)]).unwrap(),
            Value::from(2)
        );
        assert_eq!(
            scale.call(&DecimalValue::from(3), &[]).unwrap(),
            Value::from(-3)
        );
    }
}
