//! Naming and configuration contract for polymorphic engine components.
//!
//! Every component of the registration engine (energy terms, forces,
//! transformations, optimizers) is configured through this surface: a
//! caller holding a `&mut dyn Configurable` can identify the component by
//! name, push named parameters at it as text, and read its state back as a
//! [`ParameterList`], all without knowing the concrete type.

use crate::params::ParameterList;

/// Identification of a component by a class-name string.
///
/// The common case is a fixed name generated by [`named_object!`]; a
/// component documented as *mutable* may instead compute
/// [`class_name`](Named::class_name) from its state, e.g. when it behaves
/// like different algorithm variants depending on configuration.
pub trait Named {
    /// Returns the fixed identifier of the declared type.
    ///
    /// Usable without an instance, so it is excluded from the vtable.
    fn type_name() -> &'static str
    where
        Self: Sized;

    /// Returns the identifier of this instance.
    ///
    /// For most components this is [`type_name`](Named::type_name) of the
    /// concrete type; mutable components may return a state-dependent name.
    fn class_name(&self) -> &str;
}

/// Uniform text-configuration surface of an engine component.
///
/// The default implementations describe a component with no configurable
/// state: every assignment is rejected, the reported state is empty.
/// Components override [`set`](Configurable::set) and
/// [`parameters`](Configurable::parameters) to expose their own vocabulary.
pub trait Configurable: Named {
    /// Attempts to apply one named parameter given as text.
    ///
    /// Returns `true` on success, `false` when the name is not recognized
    /// or the value does not parse. The boolean is the only error channel:
    /// the two failure causes are indistinguishable to the caller.
    fn set(&mut self, name: &str, value: &str) -> bool {
        let _ = (name, value);
        false
    }

    /// Returns the current configurable state as name/value pairs, in a
    /// stable order chosen by the component.
    fn parameters(&self) -> ParameterList {
        ParameterList::new()
    }

    /// Applies every entry of `params` in order through
    /// [`set`](Configurable::set), ignoring individual failures.
    ///
    /// Not transactional: entries that applied before a rejected one stay
    /// in effect. Callers that must not lose a rejection call `set` per
    /// entry themselves.
    fn set_parameters(&mut self, params: &ParameterList) {
        for entry in params {
            self.set(&entry.name, &entry.value);
        }
    }
}

/// Implements [`Named`] for a type with a fixed class name.
///
/// ```
/// use morph_core::{named_object, Named};
///
/// struct SpringForce;
/// named_object!(SpringForce);
///
/// assert_eq!(SpringForce::type_name(), "SpringForce");
/// assert_eq!(SpringForce.class_name(), "SpringForce");
/// ```
///
/// Mutable components implement [`Named`] by hand instead, keeping
/// `type_name` fixed and computing `class_name` from state.
#[macro_export]
macro_rules! named_object {
    ($type:ty) => {
        impl $crate::Named for $type {
            fn type_name() -> &'static str {
                stringify!($type)
            }

            fn class_name(&self) -> &str {
                stringify!($type)
            }
        }
    };
}
