//! Translation between closed value sets and the ordinal used by horizontal option widgets.

use crate::setting::SettingValue;
use std::fmt;

/// A closed, ordered mapping between ordinals `0..len` and legal values.
///
/// Translation is total in both directions: an ordinal outside `0..len` maps to the fallback
/// value (entry 0) and a value missing from the table maps to ordinal 0.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct OrdinalTable<V: 'static> {
    values: &'static [V],
    labels: &'static [&'static str],
}

impl<V: 'static> OrdinalTable<V> {
    /// Create a table from values and the labels displayed for them.
    ///
    /// # Panics
    ///
    /// If the table is empty or `labels` doesn't have one entry per value. Tables are built in
    /// statics, so this fails at compile time.
    pub const fn new(values: &'static [V], labels: &'static [&'static str]) -> Self {
        assert!(!values.is_empty(), "ordinal table must not be empty");
        assert!(
            values.len() == labels.len(),
            "ordinal table needs one label per value"
        );
        Self { values, labels }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn values(&self) -> &'static [V] {
        self.values
    }

    #[inline]
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        self.labels
    }
}

impl<V: Copy + PartialEq + 'static> OrdinalTable<V> {
    /// The value returned for out-of-range ordinals.
    #[inline]
    pub fn fallback(&self) -> V {
        self.values[0]
    }

    /// Translate a widget ordinal into a value.
    pub fn ordinal_to_value(&self, ordinal: i32) -> V {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| self.values.get(index))
            .copied()
            .unwrap_or_else(|| self.fallback())
    }

    /// Translate a value into a widget ordinal.
    #[must_use]
    pub fn value_to_ordinal(&self, value: V) -> i32 {
        self.values
            .iter()
            .position(|&entry| entry == value)
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, value: V) -> bool {
        self.values.contains(&value)
    }
}

/// A type-erased [`OrdinalTable`] speaking in [`SettingValue`]s.
pub trait Choices: fmt::Debug + Sync {
    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label of each entry, in ordinal order.
    fn labels(&self) -> &'static [&'static str];

    /// See [`OrdinalTable::ordinal_to_value`].
    fn value_at(&self, ordinal: i32) -> SettingValue;

    /// See [`OrdinalTable::value_to_ordinal`]. Values of the wrong type map to 0.
    fn ordinal_of(&self, value: SettingValue) -> i32;

    /// Whether `value` has the type of this table's entries.
    fn accepts(&self, value: SettingValue) -> bool;

    /// Whether `value` is an entry of this table.
    fn contains(&self, value: SettingValue) -> bool;
}

impl<V> Choices for OrdinalTable<V>
where
    V: fmt::Debug + Copy + PartialEq + Sync + Into<SettingValue> + TryFrom<SettingValue> + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    fn value_at(&self, ordinal: i32) -> SettingValue {
        self.ordinal_to_value(ordinal).into()
    }

    fn ordinal_of(&self, value: SettingValue) -> i32 {
        V::try_from(value).map_or(0, |value| self.value_to_ordinal(value))
    }

    fn accepts(&self, value: SettingValue) -> bool {
        V::try_from(value).is_ok()
    }

    fn contains(&self, value: SettingValue) -> bool {
        V::try_from(value).map_or(false, |value| self.values.contains(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIVISORS: OrdinalTable<i32> = OrdinalTable::new(&[1, 2, 4], &["Full", "Half", "Quarter"]);

    #[test]
    fn ordinal_to_value_is_total() {
        assert_eq!(DIVISORS.ordinal_to_value(0), 1);
        assert_eq!(DIVISORS.ordinal_to_value(2), 4);
        for ordinal in [-1, 3, 4, i32::MIN, i32::MAX] {
            assert_eq!(DIVISORS.ordinal_to_value(ordinal), 1, "ordinal {ordinal}");
        }
    }

    #[test]
    fn value_to_ordinal_unknown_is_zero() {
        assert_eq!(DIVISORS.value_to_ordinal(2), 1);
        assert_eq!(DIVISORS.value_to_ordinal(3), 0);
        assert_eq!(DIVISORS.value_to_ordinal(-8), 0);
    }

    #[test]
    fn type_erased() {
        let choices: &dyn Choices = &DIVISORS;
        assert_eq!(choices.len(), 3);
        assert_eq!(choices.value_at(1), SettingValue::Int(2));
        assert_eq!(choices.ordinal_of(SettingValue::Int(4)), 2);
        assert_eq!(choices.ordinal_of(SettingValue::Bool(true)), 0);
        assert!(choices.accepts(SettingValue::Int(3)));
        assert!(!choices.contains(SettingValue::Int(3)));
        assert!(!choices.accepts(SettingValue::Float(2.0)));
        assert_eq!(choices.labels(), ["Full", "Half", "Quarter"]);
    }
}
