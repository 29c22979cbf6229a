use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::ensure_finite;

/// Handle to one scalar in a [`TimeValues`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ValueId(pub(crate) u32);

impl ValueId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The scalar clock(s) driving an animation: a small fixed set of named `f64` values.
///
/// Values are declared up front and only advanced by the driver between frames; layers receive
/// them read-only.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TimeValues {
    names: Vec<String>,
    values: Vec<f64>,
}

impl TimeValues {
    /// Empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new named value with its initial state.
    pub fn declare(&mut self, name: impl Into<String>, initial: f64) -> FieldResult<ValueId> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldError::config("time value name must be non-empty"));
        }
        if self.names.iter().any(|n| *n == name) {
            return Err(FieldError::config(format!(
                "duplicate time value '{name}'"
            )));
        }
        let initial = ensure_finite(&format!("initial value of '{name}'"), initial)?;
        let id = u32::try_from(self.values.len())
            .map_err(|_| FieldError::config("too many time values"))?;
        self.names.push(name);
        self.values.push(initial);
        Ok(ValueId(id))
    }

    /// Number of declared values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `id` was declared in this set.
    pub fn contains(&self, id: ValueId) -> bool {
        id.index() < self.values.len()
    }

    /// Current value of `id`.
    ///
    /// Ids are validated when a driver is built, so an unknown id here is a caller bug; it
    /// reads as `0.0` rather than panicking mid-frame.
    pub fn get(&self, id: ValueId) -> f64 {
        self.values.get(id.index()).copied().unwrap_or(0.0)
    }

    /// Name `id` was declared with.
    pub fn name(&self, id: ValueId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Id of the value declared as `name`.
    pub fn id_of(&self, name: &str) -> Option<ValueId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| ValueId(i as u32))
    }

    pub(crate) fn set(&mut self, id: ValueId, v: f64) {
        if let Some(slot) = self.values.get_mut(id.index()) {
            *slot = v;
        }
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/time.rs"]
mod tests;
