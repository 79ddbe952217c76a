#![allow(missing_docs)]

use generic::impl_reflect;
use generic::reflect::{Reflect, Result, Value, append, field, foreach, is_int, make_slice};

struct Book {
	title: String,
	pages: i64,
}

impl_reflect!(Book { title: String, pages: i64 });

struct Setting {
	key: String,
	value: Value,
}

impl_reflect!(Setting { key: String, value: Value });

/// Keep the elements of any slice that satisfy `keep`, preserving the element type.
fn filter(items: &Value, keep: impl Fn(&Value) -> bool) -> Result<Value> {
	let mut out = make_slice(items);
	let mut failure = None;
	foreach(items, |_, item| {
		if !keep(item) {
			return true;
		}
		match append(&out, item) {
			Ok(next) => {
				out = next;
				true
			}
			Err(err) => {
				failure = Some(err);
				false
			}
		}
	});
	match failure {
		Some(err) => Err(err),
		None => Ok(out),
	}
}

/// Project one named field out of every struct in a slice.
fn pluck(items: &Value, name: &str) -> Result<Value> {
	let mut out: Option<Value> = None;
	let mut failure = None;
	foreach(items, |_, item| {
		let value = field(item, name);
		let current = out.take().unwrap_or_else(|| make_slice(&value));
		match append(&current, &value) {
			Ok(next) => {
				out = Some(next);
				true
			}
			Err(err) => {
				failure = Some(err);
				false
			}
		}
	});
	if let Some(err) = failure {
		return Err(err);
	}
	Ok(out.unwrap_or_else(|| make_slice(&Value::Nil)))
}

fn books() -> Value {
	vec![
		Book {
			title: "Dune".to_owned(),
			pages: 412,
		},
		Book {
			title: "Ubik".to_owned(),
			pages: 202,
		},
		Book {
			title: "Solaris".to_owned(),
			pages: 204,
		},
	]
	.reflect()
}

#[test]
fn one_filter_works_for_ints_and_structs() {
	let evens = filter(&vec![1_i64, 2, 3, 4].reflect(), |item| item.as_int().is_some_and(|n| n % 2 == 0)).expect("filter ints");
	assert_eq!(evens, vec![2_i64, 4].reflect());

	let long = filter(&books(), |item| field(item, "pages").as_int().is_some_and(|pages| pages > 300)).expect("filter structs");
	assert_eq!(long.as_slice().map(|slice| slice.len()), Some(1));
	assert_eq!(long.ty(), Vec::<Book>::reflect_type());
}

#[test]
fn filter_of_nothing_keeps_element_type() {
	let none = filter(&vec!["a".to_owned()].reflect(), |_| false).expect("filter strings");
	assert_eq!(none, Vec::<String>::new().reflect());
}

#[test]
fn pluck_builds_typed_column() {
	let titles = pluck(&books(), "title").expect("pluck titles");
	assert_eq!(titles, vec!["Dune".to_owned(), "Ubik".to_owned(), "Solaris".to_owned()].reflect());

	let pages = pluck(&books(), "pages").expect("pluck pages");
	let mut total = 0;
	foreach(&pages, |_, item| {
		assert!(is_int(item));
		total += item.as_int().unwrap_or_default();
		true
	});
	assert_eq!(total, 818);
}

#[test]
fn filter_keeps_structs_with_dynamic_fields() {
	let settings = vec![
		Setting {
			key: "retries".to_owned(),
			value: Value::Int(3),
		},
		Setting {
			key: "name".to_owned(),
			value: Value::string("primary"),
		},
		Setting {
			key: "verbose".to_owned(),
			value: Value::Bool(true),
		},
	]
	.reflect();

	let all = filter(&settings, |_| true).expect("filter settings");
	assert_eq!(all.as_slice().map(|slice| slice.len()), Some(3));
	assert_eq!(all.ty(), Vec::<Setting>::reflect_type());

	let ints = filter(&settings, |item| is_int(&field(item, "value"))).expect("filter int settings");
	let keys = pluck(&ints, "key").expect("pluck keys");
	assert_eq!(keys, vec!["retries".to_owned()].reflect());
}
