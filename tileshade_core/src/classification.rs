//! Breakpoint classification of a scalar attribute, as used for choropleth maps.
//!
//! A [`ClassificationTable`] maps a value to the attribute of the first breakpoint
//! strictly greater than the value. Values below the minimum, missing values and
//! values beyond the last breakpoint get the default attribute. The buckets are
//! therefore `(min, b1] → a1`, `(b1, b2] → a2`, and so on, with a value equal to a
//! breakpoint belonging to the lower bucket.
//!
//! # Examples
//!
//! ```
//! use tileshade_core::ClassificationTable;
//!
//! let table = ClassificationTable::new(0.0, "white", vec![(50.0, "green"), (100.0, "lightgreen")]).unwrap();
//! assert_eq!(*table.classify(Some(50.0)), "green");
//! assert_eq!(*table.classify(Some(50.0001)), "lightgreen");
//! assert_eq!(*table.classify(Some(100.0)), "lightgreen");
//! assert_eq!(*table.classify(Some(100.5)), "white");
//! assert_eq!(*table.classify(None), "white");
//! ```

use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An ordered breakpoint → attribute lookup with a minimum value and a default attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationTable<V, A> {
	min_value: V,
	default_attribute: A,
	breakpoints: Vec<(V, A)>,
}

impl<V, A> ClassificationTable<V, A>
where
	V: PartialOrd + Copy + Debug,
{
	/// Creates a table from breakpoints given in ascending order.
	///
	/// # Errors
	/// Returns an error if the breakpoints are not strictly increasing, which
	/// includes duplicates and unordered values such as `NaN`.
	pub fn new(min_value: V, default_attribute: A, breakpoints: Vec<(V, A)>) -> Result<Self> {
		for pair in breakpoints.windows(2) {
			ensure!(
				pair[0].0 < pair[1].0,
				"breakpoints must be strictly increasing, but {:?} is followed by {:?}",
				pair[0].0,
				pair[1].0
			);
		}
		if let Some((first, _)) = breakpoints.first() {
			ensure!(first.partial_cmp(first).is_some(), "breakpoint {first:?} is not comparable");
		}
		Ok(ClassificationTable {
			min_value,
			default_attribute,
			breakpoints,
		})
	}

	#[must_use]
	pub fn min_value(&self) -> V {
		self.min_value
	}

	#[must_use]
	pub fn default_attribute(&self) -> &A {
		&self.default_attribute
	}

	#[must_use]
	pub fn breakpoints(&self) -> &[(V, A)] {
		&self.breakpoints
	}

	/// Looks up the attribute for `key`.
	///
	/// Runs in `O(log n)` via an upper-bound search over the sorted breakpoints,
	/// with the same result as scanning them in ascending order for the first
	/// breakpoint `> key`.
	#[must_use]
	pub fn classify(&self, key: Option<V>) -> &A {
		let Some(key) = key else {
			return &self.default_attribute;
		};

		if key < self.min_value {
			return &self.default_attribute;
		}

		// written as a negation so that unordered keys (NaN) fall through to the default
		#[allow(clippy::neg_cmp_op_on_partial_ord)]
		let index = self.breakpoints.partition_point(|(breakpoint, _)| !(*breakpoint > key));

		match self.breakpoints.get(index) {
			Some((_, attribute)) => attribute,
			None => &self.default_attribute,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn population_density() -> ClassificationTable<f64, &'static str> {
		ClassificationTable::new(
			0.0,
			"white",
			vec![
				(50.0, "green"),
				(100.0, "lightgreen"),
				(250.0, "yellow"),
				(500.0, "orange"),
				(1000.0, "red"),
				(2500.0, "darkred"),
				(f64::MAX, "purple"),
			],
		)
		.unwrap()
	}

	fn linear_scan<'a>(table: &'a ClassificationTable<f64, &'static str>, key: Option<f64>) -> &'a &'static str {
		let Some(key) = key else {
			return table.default_attribute();
		};
		if key < table.min_value() {
			return table.default_attribute();
		}
		for (breakpoint, attribute) in table.breakpoints() {
			if *breakpoint > key {
				return attribute;
			}
		}
		table.default_attribute()
	}

	#[rstest]
	#[case(Some(0.0), "green")]
	#[case(Some(49.999), "green")]
	#[case(Some(50.0), "green")]
	#[case(Some(50.0001), "lightgreen")]
	#[case(Some(100.0), "lightgreen")]
	#[case(Some(249.0), "yellow")]
	#[case(Some(250.0), "yellow")]
	#[case(Some(499.0), "orange")]
	#[case(Some(999.9), "red")]
	#[case(Some(2500.0), "darkred")]
	#[case(Some(1e9), "purple")]
	#[case(Some(f64::MAX), "white")]
	#[case(Some(f64::INFINITY), "white")]
	#[case(Some(-1.0), "white")]
	#[case(Some(-0.0001), "white")]
	#[case(Some(f64::NAN), "white")]
	#[case(None, "white")]
	fn classify_population_density(#[case] key: Option<f64>, #[case] expected: &str) {
		let table = population_density();
		assert_eq!(*table.classify(key), expected);
		assert_eq!(table.classify(key), linear_scan(&table, key));
	}

	#[test]
	fn matches_linear_scan_everywhere() {
		let table = population_density();
		for i in -100..6000 {
			let key = f64::from(i) * 0.5;
			assert_eq!(table.classify(Some(key)), linear_scan(&table, Some(key)), "key {key}");
		}
	}

	#[test]
	fn integer_keys() {
		let table = ClassificationTable::new(10u32, 'x', vec![(20, 'a'), (30, 'b')]).unwrap();
		assert_eq!(*table.classify(Some(9)), 'x');
		assert_eq!(*table.classify(Some(10)), 'a');
		assert_eq!(*table.classify(Some(20)), 'a');
		assert_eq!(*table.classify(Some(21)), 'b');
		assert_eq!(*table.classify(Some(30)), 'b');
		assert_eq!(*table.classify(Some(31)), 'x');
	}

	#[test]
	fn empty_table_returns_default() {
		let table: ClassificationTable<f64, u8> = ClassificationTable::new(0.0, 7, vec![]).unwrap();
		assert_eq!(*table.classify(Some(1.0)), 7);
	}

	#[rstest]
	#[case(vec![(2.0, 'a'), (1.0, 'b')])]
	#[case(vec![(1.0, 'a'), (1.0, 'b')])]
	#[case(vec![(1.0, 'a'), (f64::NAN, 'b')])]
	#[case(vec![(f64::NAN, 'a')])]
	fn rejects_unordered_breakpoints(#[case] breakpoints: Vec<(f64, char)>) {
		assert!(ClassificationTable::new(0.0, 'x', breakpoints).is_err());
	}
}
