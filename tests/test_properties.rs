use proptest::prelude::*;

use xmlpair::{qname, Pair};

const NAME: &str = "[a-zA-Z_][a-zA-Z0-9_.-]{0,8}";

proptest! {
    #[test]
    fn test_prefixed_views(prefix in NAME, local in "[a-zA-Z0-9_.-]{0,8}") {
        let mut chars = vec![char::from_u32(prefix.chars().count() as u32).unwrap()];
        chars.extend(prefix.chars());
        chars.extend(local.chars());
        let pair = Pair::new(chars).unwrap();
        prop_assert_eq!(pair.pref(), prefix.clone());
        prop_assert_eq!(pair.local(), local.clone());
        prop_assert_eq!(pair.qname(), format!("{}{}", prefix, local));
    }

    #[test]
    fn test_unprefixed_views(local in "[a-zA-Z0-9_.-]{0,8}") {
        let mut chars = vec![qname::NO_PREFIX];
        chars.extend(local.chars());
        let pair = Pair::new(chars).unwrap();
        prop_assert_eq!(pair.pref(), "");
        prop_assert_eq!(pair.local(), local.clone());
        prop_assert_eq!(pair.qname(), local);
    }

    #[test]
    fn test_eqname_is_buffer_equality(a in NAME, b in NAME) {
        let left = Pair::parse(&a).unwrap();
        let right = Pair::parse(&b).unwrap();
        prop_assert_eq!(left.eqname(right.chars()), a == b);
        prop_assert_eq!(left.eqname(right.chars()), right.eqname(left.chars()));
        prop_assert!(left.eqname(left.chars()));
    }

    #[test]
    fn test_eqpref_ignores_local(prefix in NAME, a in NAME, b in NAME) {
        let left = Pair::from_parts(&prefix, &a).unwrap();
        let right = Pair::from_parts(&prefix, &b).unwrap();
        prop_assert!(left.eqpref(right.chars()));
        prop_assert!(right.eqpref(left.chars()));
        prop_assert_eq!(left.eqname(right.chars()), a == b);
    }

    #[test]
    fn test_eqpref_distinguishes_prefixes(p in NAME, q in NAME, local in NAME) {
        let left = Pair::from_parts(&p, &local).unwrap();
        let right = Pair::from_parts(&q, &local).unwrap();
        prop_assert_eq!(left.eqpref(right.chars()), p == q);
    }

    #[test]
    fn test_full_name_roundtrip(prefix in prop_oneof![Just(String::new()), NAME], local in NAME) {
        let pair = Pair::from_parts(&prefix, &local).unwrap();
        let parsed = Pair::parse(&pair.full_name()).unwrap();
        prop_assert!(parsed.eqname(pair.chars()));
    }
}
