//! Property tests over every family table.

use codedef_core::codes::CodeFamily;
use codedef_core::registry::{self, DesignCodeRegistry};
use proptest::prelude::*;

fn any_family() -> impl Strategy<Value = CodeFamily> {
    prop::sample::select(CodeFamily::ALL.to_vec())
}

proptest! {
    #[test]
    fn valid_iff_name_lookup_succeeds(family in any_family(), id in -1_000i64..1_000) {
        let valid = registry::is_valid(family, id);
        prop_assert_eq!(valid, registry::full_name(family, id).is_ok());
        prop_assert_eq!(valid, registry::short_name(family, id).is_ok());
        prop_assert_eq!(valid, 0 <= id && id <= i64::from(family.max_id()));
    }

    #[test]
    fn negative_ids_never_valid(family in any_family(), id in i64::MIN..0) {
        prop_assert!(!registry::is_valid(family, id));
    }

    #[test]
    fn ids_above_max_never_valid(family in any_family(), offset in 1i64..100_000) {
        let id = i64::from(family.max_id()) + offset;
        prop_assert!(!registry::is_valid(family, id));
        prop_assert!(registry::full_name(family, id).is_err());
    }

    #[test]
    fn declared_ids_have_names(family in any_family(), pick in any::<prop::sample::Index>()) {
        let entries = family.entries();
        let entry = entries[pick.index(entries.len())];
        let id = i64::from(entry.id);
        prop_assert!(!registry::full_name(family, id).unwrap().trim().is_empty());
        prop_assert!(!registry::short_name(family, id).unwrap().trim().is_empty());
    }

    #[test]
    fn localized_names_resolve_to_same_id(family in any_family(), pick in any::<prop::sample::Index>()) {
        let ru = DesignCodeRegistry::new().with_locale("ru");
        let variants = ru.list_variants(family, false);
        let (id, short) = variants[pick.index(variants.len())];
        let found = ru.find(family, short).unwrap();
        // duplicate names resolve to the first declaration
        prop_assert!(found <= id);
    }
}

#[test]
fn list_variant_ids_are_dense() {
    for family in CodeFamily::ALL {
        let variants = registry::list_variants(family);
        assert_eq!(variants.len(), family.variant_count(), "{}", family);
        let ids: Vec<u16> = variants.iter().map(|(id, _)| *id).collect();
        let expected: Vec<u16> = (1..=family.max_id()).collect();
        assert_eq!(ids, expected, "{} is not in declaration order", family);
    }
}

#[test]
fn sentinel_policy_every_family() {
    for family in CodeFamily::ALL {
        assert!(registry::is_valid(family, 0));
        assert_eq!(registry::full_name(family, 0).unwrap(), "None");
        assert_eq!(registry::short_name(family, 0).unwrap(), "None");
    }
}
