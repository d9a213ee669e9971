use crate::{
    domain::{CategoricalDomain, NumericalDomain, ValueDomain},
    value::Value,
};

fn v_i(n: i32) -> Value {
    Value::int(n)
}
fn v_txt(s: &str) -> Value {
    Value::text(s)
}

// ---- categorical -------------------------------------------------------

#[test]
fn categorical_membership() {
    let d = CategoricalDomain::new("cuisine", vec![v_txt("Italian"), v_txt("Mexican")]);
    assert!(d.contains(&v_txt("Italian")));
    assert!(!d.contains(&v_txt("Thai")));
    assert!(!d.contains(&v_i(1)));
}

#[test]
fn categorical_renders_by_size() {
    let one = CategoricalDomain::new("cuisine", vec![v_txt("Italian")]);
    assert_eq!(one.short_text(), "Italian cuisine");

    let two = CategoricalDomain::new("cuisine", vec![v_txt("Italian"), v_txt("Mexican")]);
    assert_eq!(two.short_text(), "Italian or Mexican cuisine");

    let three = CategoricalDomain::new(
        "cuisine",
        vec![v_txt("Italian"), v_txt("Mexican"), v_txt("Thai")],
    );
    assert_eq!(three.short_text(), "Italian, Mexican or Thai cuisine");
}

#[test]
fn categorical_spoken_expands_numbers() {
    let d = CategoricalDomain::new("rating", vec![v_i(4), v_i(5)]);
    assert_eq!(d.spoken_text(), "four or five rating");
}

// ---- numerical ---------------------------------------------------------

#[test]
fn numerical_swaps_misordered_bounds() {
    let d = NumericalDomain::new("price", v_i(200), v_i(100));
    assert_eq!(d.lower(), &v_i(100));
    assert_eq!(d.upper(), &v_i(200));
}

#[test]
fn numerical_membership_is_inclusive() {
    let d = NumericalDomain::new("price", v_i(100), v_i(200));
    assert!(d.contains(&v_i(100)));
    assert!(d.contains(&v_i(200)));
    assert!(d.contains(&Value::float64(150.5).unwrap()));
    assert!(!d.contains(&v_i(99)));
    assert!(!d.contains(&v_txt("100")));
}

#[test]
fn numerical_width_convention() {
    let positive = NumericalDomain::new("price", v_i(100), v_i(200));
    assert!((positive.width() - 2.0).abs() < 1e-9);

    let point = NumericalDomain::new("price", v_i(7), v_i(7));
    assert!((point.width() - 1.0).abs() < 1e-9);

    let negative = NumericalDomain::new("delta", v_i(-200), v_i(-100));
    assert!((negative.width() - 2.0).abs() < 1e-9);

    let straddling = NumericalDomain::new("delta", v_i(-5), v_i(5));
    assert!(straddling.width().is_infinite());

    let touching = NumericalDomain::new("delta", v_i(0), v_i(10));
    assert!(touching.width().is_infinite());
}

#[test]
fn numerical_renders_range_and_point() {
    let range = NumericalDomain::new("price", v_i(100), v_i(200));
    assert_eq!(range.short_text(), "between 100 and 200 price");
    assert_eq!(
        range.spoken_text(),
        "between one hundred and two hundred price"
    );

    let point = NumericalDomain::new("price", v_i(7), v_i(7));
    assert_eq!(point.short_text(), "7 price");
}

// ---- tagged surface ----------------------------------------------------

#[test]
fn tagged_surface_delegates() {
    let cat: ValueDomain = CategoricalDomain::new("cuisine", vec![v_txt("Thai")]).into();
    assert!(cat.is_categorical());
    assert!(!cat.is_numerical());
    assert_eq!(cat.attribute(), "cuisine");
    assert!(cat.contains(&v_txt("Thai")));

    let num: ValueDomain = NumericalDomain::new("price", v_i(1), v_i(2)).into();
    assert!(num.is_numerical());
    assert_eq!(num.short_text(), "between 1 and 2 price");
}
