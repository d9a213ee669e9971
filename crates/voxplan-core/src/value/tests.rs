use crate::value::{Value, ValueTag, canonical_cmp, numeric_cmp};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_i(n: i32) -> Value {
    Value::int(n)
}
fn v_f64(x: f64) -> Value {
    Value::float64(x).expect("finite f64")
}
fn v_f32(x: f32) -> Value {
    Value::float32(x).expect("finite f32")
}
fn v_txt(s: &str) -> Value {
    Value::text(s)
}

// ---- ordering ----------------------------------------------------------

#[test]
fn orders_by_tag_rank_first() {
    // Float32 < Float64 < Int < Text by stable tag rank
    assert_eq!(canonical_cmp(&v_f32(9.0), &v_f64(1.0)), Ordering::Less);
    assert_eq!(canonical_cmp(&v_f64(9.0), &v_i(1)), Ordering::Less);
    assert_eq!(canonical_cmp(&v_i(9), &v_txt("a")), Ordering::Less);
}

#[test]
fn orders_naturally_within_tag() {
    assert_eq!(canonical_cmp(&v_i(-3), &v_i(7)), Ordering::Less);
    assert_eq!(canonical_cmp(&v_txt("alpha"), &v_txt("beta")), Ordering::Less);
    assert_eq!(canonical_cmp(&v_f64(1.5), &v_f64(1.5)), Ordering::Equal);
}

#[test]
fn numeric_cmp_crosses_tags() {
    assert_eq!(numeric_cmp(&v_i(5), &v_f64(4.5)), Some(Ordering::Greater));
    assert_eq!(numeric_cmp(&v_f32(2.0), &v_i(2)), Some(Ordering::Equal));
    assert_eq!(numeric_cmp(&v_i(1), &v_txt("1")), None);
}

#[test]
fn equality_implies_identical_tag() {
    assert_ne!(v_i(1), v_f64(1.0));
    assert_eq!(v_i(1).tag(), ValueTag::Int);
}

// ---- rendering ---------------------------------------------------------

#[test]
fn short_text_keeps_literals() {
    assert_eq!(v_i(123).short_text(), "123");
    assert_eq!(v_f64(2.5).short_text(), "2.5");
    assert_eq!(v_txt("Italian").short_text(), "Italian");
}

#[test]
fn spoken_text_expands_numbers() {
    assert_eq!(v_i(123).spoken_text(), "one hundred twenty-three");
    assert_eq!(v_f64(2.5).spoken_text(), "two point five");
    assert_eq!(v_txt("Italian").spoken_text(), "Italian");
}

#[test]
fn spoken_text_is_stable() {
    let v = v_i(-47);
    assert_eq!(v.spoken_text(), v.spoken_text());
    assert_eq!(v.spoken_text(), "minus forty-seven");
}
