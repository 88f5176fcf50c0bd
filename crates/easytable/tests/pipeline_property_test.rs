//! Property-based tests for the filter, sort and paginate stages

use easytable::filtering::filter_rows;
use easytable::pagination::{paginate, total_pages};
use easytable::sorting::{compare_values, sort_rows};
use easytable::{
	Column, DataTable, MatchPolicy, PageLink, Row, SortDirection, TableOptions, Value, ViewEvent,
	ViewState, page_window,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn columns() -> Vec<Column> {
	vec![Column::text("name", "Name"), Column::number("score", "Score")]
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
	proptest::collection::vec(
		("[a-dA-D]{0,4}", proptest::option::of(0i32..5)),
		0..30,
	)
	.prop_map(|cells| {
		cells
			.into_iter()
			.enumerate()
			.map(|(i, (name, score))| Row::new(i.to_string()).with("name", name).with("score", score))
			.collect()
	})
}

fn arb_policy() -> impl Strategy<Value = MatchPolicy> {
	prop_oneof![Just(MatchPolicy::Contains), Just(MatchPolicy::Prefix)]
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
	prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn arb_mixed_rows() -> impl Strategy<Value = Vec<Row>> {
	let value = prop_oneof![
		Just(Value::Null),
		(-50i32..150).prop_map(Value::from),
		(-50i32..150).prop_map(|n| Value::from(n.to_string())),
		"[a-cA-C0-9]{0,3}".prop_map(Value::from),
	];
	proptest::collection::vec(value, 0..120).prop_map(|values| {
		values
			.into_iter()
			.enumerate()
			.map(|(i, value)| Row::new(i.to_string()).with("v", value))
			.collect()
	})
}

fn arb_column() -> impl Strategy<Value = Column> {
	prop_oneof![
		Just(Column::text("v", "V")),
		Just(Column::number("v", "V")),
	]
}

fn position(rows: &[&Row], row: &Row) -> usize {
	rows.iter().position(|r| r.id() == row.id()).unwrap()
}

proptest! {
	#[test]
	fn prop_filter_keeps_exactly_matching_rows(
		rows in arb_rows(),
		query in "[a-dA-D0-4]{1,2}",
		policy in arb_policy(),
	) {
		// Arrange
		let columns = columns();
		let needle = query.to_lowercase();
		let is_match = |row: &Row| {
			columns
				.iter()
				.any(|column| policy.matches(&column.value(row).to_string().to_lowercase(), &needle))
		};

		// Act
		let filtered = filter_rows(&rows, &columns, &query, policy);

		// Assert
		for row in filtered.iter().copied() {
			prop_assert!(is_match(row));
		}
		let expected: Vec<&str> = rows.iter().filter(|row| is_match(*row)).map(Row::id).collect();
		let actual: Vec<&str> = filtered.iter().map(|row| row.id()).collect();
		prop_assert_eq!(actual, expected);
	}

	#[test]
	fn prop_empty_query_is_identity(rows in arb_rows(), policy in arb_policy()) {
		let filtered = filter_rows(&rows, &columns(), "", policy);
		prop_assert_eq!(filtered.len(), rows.len());
		for (kept, original) in filtered.iter().zip(&rows) {
			prop_assert_eq!(kept.id(), original.id());
		}
	}

	#[test]
	fn prop_sort_is_stable(rows in arb_rows(), direction in arb_direction()) {
		// Arrange
		let column = Column::number("score", "Score");
		let original: Vec<&Row> = rows.iter().collect();
		let mut sorted = original.clone();

		// Act
		sort_rows(&mut sorted, &column, direction);

		// Assert: rows with equal keys keep their relative order
		for pair in sorted.windows(2) {
			if pair[0].get("score") == pair[1].get("score") {
				prop_assert!(position(&original, pair[0]) < position(&original, pair[1]));
			}
		}
	}

	#[test]
	fn prop_sort_puts_nulls_last(rows in arb_rows(), direction in arb_direction()) {
		// Arrange
		let column = Column::number("score", "Score");
		let mut sorted: Vec<&Row> = rows.iter().collect();

		// Act
		sort_rows(&mut sorted, &column, direction);

		// Assert
		let first_null = sorted.iter().position(|row| row.get("score").is_null());
		if let Some(first_null) = first_null {
			prop_assert!(sorted[first_null..].iter().all(|row| row.get("score").is_null()));
		}
	}

	#[test]
	fn prop_mixed_kinds_sort_totally(
		rows in arb_mixed_rows(),
		column in arb_column(),
		direction in arb_direction(),
	) {
		// Arrange
		let mut sorted: Vec<&Row> = rows.iter().collect();

		// Act
		sort_rows(&mut sorted, &column, direction);

		// Assert
		prop_assert_eq!(sorted.len(), rows.len());
		let first_null = sorted.iter().position(|row| row.get("v").is_null()).unwrap_or(sorted.len());
		prop_assert!(sorted[first_null..].iter().all(|row| row.get("v").is_null()));
		for pair in sorted.windows(2) {
			prop_assert_ne!(
				compare_values(pair[0].get("v"), pair[1].get("v"), direction),
				Ordering::Greater
			);
		}
	}

	#[test]
	fn prop_sort_orders_numbers(rows in arb_rows(), direction in arb_direction()) {
		let column = Column::number("score", "Score");
		let mut sorted: Vec<&Row> = rows.iter().collect();
		sort_rows(&mut sorted, &column, direction);

		let scores: Vec<f64> = sorted.iter().filter_map(|row| row.get("score").as_number()).collect();
		for pair in scores.windows(2) {
			match direction {
				SortDirection::Ascending => prop_assert!(pair[0] <= pair[1]),
				SortDirection::Descending => prop_assert!(pair[0] >= pair[1]),
			}
		}
	}

	#[test]
	fn prop_total_pages(n in 0usize..500, p in 1usize..50) {
		let expected = if n == 0 { 1 } else { n.div_ceil(p) };
		prop_assert_eq!(total_pages(n, p), expected);
		prop_assert!(total_pages(n, p) >= 1);
	}

	#[test]
	fn prop_page_slice(n in 0usize..200, p in 1usize..20, k in 1usize..30) {
		let items: Vec<usize> = (0..n).collect();
		let page = paginate(&items, k, p);
		let start = ((k - 1) * p).min(n);
		let end = (k * p).min(n);
		prop_assert_eq!(page, &items[start..end]);
	}

	#[test]
	fn prop_navigation_stays_in_bounds(
		total in 1usize..40,
		moves in proptest::collection::vec(prop_oneof![Just(ViewEvent::NextPage), Just(ViewEvent::PreviousPage)], 0..60),
	) {
		let mut state = ViewState::new(10);
		for event in &moves {
			state = state.apply(event, total);
			prop_assert!(state.current_page() >= 1);
			prop_assert!(state.current_page() <= total);
		}
	}

	#[test]
	fn prop_window_contains_ends_and_current(current in 1usize..100, total in 1usize..100) {
		let window = page_window(current, total);
		let current = current.min(total);

		prop_assert_eq!(window.first(), Some(&PageLink::Page(1)));
		prop_assert_eq!(window.last(), Some(&PageLink::Page(total)));
		prop_assert!(window.contains(&PageLink::Page(current)));
		prop_assert!(window.len() <= 7);

		let pages: Vec<usize> = window.iter().filter_map(|link| link.page()).collect();
		for pair in pages.windows(2) {
			prop_assert!(pair[0] < pair[1]);
		}
		for pair in window.windows(2) {
			if let (PageLink::Page(a), PageLink::Page(b)) = (pair[0], pair[1]) {
				prop_assert_eq!(b, a + 1);
			}
		}
	}

	#[test]
	fn prop_view_page_never_dangles(rows in arb_rows(), page in 1usize..20, keep in 0usize..30) {
		// Arrange
		let mut table = DataTable::with_options(columns(), TableOptions::new().paginated(10)).unwrap();
		table.go_to_page(&rows, page).unwrap();

		// Act
		let shrunk = &rows[..keep.min(rows.len())];
		let view = table.view(shrunk);

		// Assert
		prop_assert!(view.page.number >= 1);
		prop_assert!(view.page.number <= view.page.num_pages);
		prop_assert_eq!(table.state().current_page(), view.page.number);
		if !shrunk.is_empty() {
			prop_assert!(!view.rows.is_empty());
		}
	}
}

