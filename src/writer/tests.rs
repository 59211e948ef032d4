use super::*;
use crate::monoid::{Product, Sum};

// ==================== Construction and Inspection ====================

#[test]
fn test_new_then_run_is_identity() {
    let w = Writer::new(1, "x".to_string());
    assert_eq!(w.run(), (1, "x".to_string()));
}

#[test]
fn test_unit_string_log_is_empty() {
    let w: Writer<&str> = Writer::unit("a");
    assert_eq!(w.run(), ("a", String::new()));
}

#[test]
fn test_unit_sum_log_is_zero() {
    let w: Writer<i32, Sum<i32>> = Writer::unit(5);
    assert_eq!(w.run(), (5, Sum(0)));
}

#[test]
fn test_unit_product_log_is_one() {
    let w: Writer<i32, Product<i32>> = Writer::unit(5);
    assert_eq!(w.run(), (5, Product(1)));
}

#[test]
fn test_borrowing_accessors() {
    let w = Writer::new(vec![1, 2], "log".to_string());
    assert_eq!(w.value(), &vec![1, 2]);
    assert_eq!(w.log(), "log");
    assert_eq!(w.clone().into_value(), vec![1, 2]);
    assert_eq!(w.into_log(), "log");
}

#[test]
fn test_tuple_conversions() {
    let w: Writer<i32, Vec<u8>> = (4, vec![1]).into();
    let pair: (i32, Vec<u8>) = w.into();
    assert_eq!(pair, (4, vec![1]));
}

#[test]
fn test_default_uses_identity() {
    let w: Writer<i32, Sum<u64>> = Writer::default();
    assert_eq!(w.run(), (0, Sum(0)));
}

// ==================== Equality and Rendering ====================

#[test]
fn test_equality() {
    assert_eq!(Writer::new(1, "x".to_string()), Writer::new(1, "x".to_string()));
    assert_ne!(Writer::new(1, "x".to_string()), Writer::new(1, "y".to_string()));
    assert_ne!(Writer::new(1, "x".to_string()), Writer::new(2, "x".to_string()));
}

#[test]
fn test_display() {
    let w = Writer::new(7, "start;doubled;inc;".to_string());
    assert_eq!(w.to_string(), "7 :: start;doubled;inc;");
}

#[test]
fn test_display_sum_log() {
    assert_eq!(Writer::new("done", Sum(3)).to_string(), "done :: 3");
}

// ==================== map ====================

#[test]
fn test_map_leaves_log() {
    let w = Writer::new(3, "kept".to_string()).map(|x| x.to_string());
    assert_eq!(w.run(), ("3".to_string(), "kept".to_string()));
}

#[test]
fn test_map_identity() {
    let w = Writer::new(3, vec!["a"]);
    assert_eq!(w.clone().map(|x| x).run(), w.run());
}

#[test]
fn test_map_composition() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;
    let w = Writer::new(3, vec!["a"]);
    assert_eq!(w.clone().map(f).map(g).run(), w.map(|x| g(f(x))).run());
}

// ==================== bind ====================

#[test]
fn test_bind_log_order() {
    let w = Writer::new("a".to_string(), "log1".to_string())
        .bind(|x| Writer::new(x + "b", "log2".to_string()));
    assert_eq!(w.run(), ("ab".to_string(), "log1log2".to_string()));
}

#[test]
fn test_bind_sum_log() {
    let w = Writer::new(5, Sum(3)).bind(|x| Writer::new(x + 1, Sum(4)));
    assert_eq!(w.run(), (6, Sum(7)));
}

#[test]
fn test_concrete_pipeline() {
    let w = Writer::new(3, "start;".to_string())
        .bind(|x| Writer::new(x * 2, "doubled;".to_string()))
        .bind(|x| Writer::new(x + 1, "inc;".to_string()));
    assert_eq!(w.run(), (7, "start;doubled;inc;".to_string()));
}

#[test]
fn test_bind_left_identity() {
    let f = |x: i32| Writer::new(x * 2, "f;".to_string());
    let w: Writer<i32> = Writer::unit(4);
    assert_eq!(w.bind(f).run(), f(4).run());
}

#[test]
fn test_bind_right_identity() {
    let w = Writer::new(4, "m;".to_string());
    assert_eq!(w.clone().bind(Writer::unit).run(), w.run());
}

#[test]
fn test_bind_associativity() {
    let f = |x: i32| Writer::new(x + 1, "f;".to_string());
    let g = |x: i32| Writer::new(x * 2, "g;".to_string());
    let w = Writer::new(1, "m;".to_string());
    assert_eq!(
        w.clone().bind(f).bind(g).run(),
        w.bind(|x| f(x).bind(g)).run()
    );
}

#[test]
fn test_and_then_is_bind() {
    let f = |x: i32| Writer::new(x - 1, vec![x]);
    let w = Writer::new(10, vec![0]);
    assert_eq!(w.clone().and_then(f), w.bind(f));
}

#[test]
#[should_panic(expected = "continuation failed")]
fn test_bind_propagates_panics() {
    let w = Writer::new(1, "before;".to_string());
    let _ = w.bind(|_: i32| -> Writer<i32> { panic!("continuation failed") });
}

// ==================== Derived combinators ====================

#[test]
fn test_then_discards_left_value() {
    let w = Writer::new("ignored", Sum(1)).then(Writer::new(2, Sum(2)));
    assert_eq!(w.run(), (2, Sum(3)));
}

#[test]
fn test_zip() {
    let w = Writer::new(1, vec!["left"]).zip(Writer::new("r", vec!["right"]));
    assert_eq!(w.run(), ((1, "r"), vec!["left", "right"]));
}

#[test]
fn test_flatten() {
    let nested = Writer::new(Writer::new(1, "inner;".to_string()), "outer;".to_string());
    assert_eq!(nested.flatten().run(), (1, "outer;inner;".to_string()));
}

#[test]
fn test_apply_log() {
    let (value, log) = Writer::<i32, Vec<&str>>::apply_log((2, vec!["start"]), |x| {
        (x * 5, vec!["times five"])
    });
    assert_eq!((value, log), (10, vec!["start", "times five"]));
}

#[test]
fn test_try_bind_ok_and_err() {
    let checked = |x: i32| {
        if x > 0 {
            Ok(Writer::new(x, "positive;".to_string()))
        } else {
            Err(format!("{} is not positive", x))
        }
    };

    let ok = Writer::new(3, "in;".to_string()).try_bind(checked);
    assert_eq!(ok, Ok(Writer::new(3, "in;positive;".to_string())));

    let err = Writer::new(-1, "in;".to_string()).try_bind(checked);
    assert_eq!(err, Err("-1 is not positive".to_string()));
}

#[test]
fn test_transpose() {
    let ok: Writer<Result<i32, &str>, Sum<i32>> = Writer::new(Ok(1), Sum(2));
    assert_eq!(ok.transpose(), Ok(Writer::new(1, Sum(2))));

    let err: Writer<Result<i32, &str>, Sum<i32>> = Writer::new(Err("boom"), Sum(2));
    assert_eq!(err.transpose(), Err("boom"));
}

// ==================== Capability traits ====================

#[test]
fn test_functor_trait_agrees_with_inherent_map() {
    let w = Writer::new(2, "two".to_string());
    assert_eq!(Functor::map(w.clone(), |x| x + 1), w.map(|x| x + 1));
}

#[test]
fn test_monad_trait_unit_agrees_with_inherent_unit() {
    let via_trait: Writer<u8, Vec<u8>> = Monad::unit(9);
    assert_eq!(via_trait, Writer::unit(9));
}

// ==================== Property-based laws ====================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn writer_strategy() -> impl Strategy<Value = Writer<i32, String>> {
        (any::<i32>(), "[a-z;]{0,12}").prop_map(|(v, l)| Writer::new(v, l))
    }

    fn f(x: i32) -> Writer<i32, String> {
        Writer::new(x.wrapping_add(1), format!("f{};", x))
    }

    fn g(x: i32) -> Writer<i32, String> {
        Writer::new(x.wrapping_mul(2), format!("g{};", x))
    }

    proptest! {
        #[test]
        fn prop_unit_has_identity_log(a: i32) {
            let w: Writer<i32, Sum<i64>> = Writer::unit(a);
            prop_assert_eq!(w.run(), (a, Sum(0)));
        }

        #[test]
        fn prop_map_identity(w in writer_strategy()) {
            prop_assert_eq!(w.clone().map(|x| x).run(), w.run());
        }

        #[test]
        fn prop_map_composition(w in writer_strategy()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(w.clone().map(f).map(g).run(), w.map(|x| g(f(x))).run());
        }

        #[test]
        fn prop_bind_left_identity(a: i32) {
            let w: Writer<i32> = Writer::unit(a);
            prop_assert_eq!(w.bind(f).run(), f(a).run());
        }

        #[test]
        fn prop_bind_right_identity(w in writer_strategy()) {
            prop_assert_eq!(w.clone().bind(Writer::unit).run(), w.run());
        }

        #[test]
        fn prop_bind_associativity(w in writer_strategy()) {
            prop_assert_eq!(
                w.clone().bind(f).bind(g).run(),
                w.bind(|x| f(x).bind(g)).run()
            );
        }

        #[test]
        fn prop_bind_sum_adds_logs(v in any::<i16>(), a in -1000i64..1000, b in -1000i64..1000) {
            let w = Writer::new(v, Sum(a)).bind(|x| Writer::new(x, Sum(b)));
            prop_assert_eq!(w.run(), (v, Sum(a + b)));
        }

        #[test]
        fn prop_equality_is_structural(a in 0i32..3, b in 0i32..3, l1 in "[a-c]{0,3}", l2 in "[a-c]{0,3}") {
            let equal = Writer::new(a, l1.clone()) == Writer::new(b, l2.clone());
            prop_assert_eq!(equal, a == b && l1 == l2);
        }
    }
}
