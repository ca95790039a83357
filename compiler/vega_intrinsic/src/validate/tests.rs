use pretty_assertions::assert_eq;

use super::*;

fn errors_of(records: &[RawIntrinsic]) -> Vec<CatalogueError> {
    match validate(records) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

#[test]
fn shipped_manifest_is_clean() {
    let defs = validate(crate::VC_INTERNAL_INTRINSICS);
    assert!(defs.is_ok());
    assert_eq!(
        defs.map(|d| d.len()),
        Ok(crate::VC_INTERNAL_INTRINSICS.len())
    );
}

#[test]
fn unknown_type_token_is_reported_with_slot() {
    let records = [RawIntrinsic::new("bad", "anyint", &["i32"], "NoMem")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].name, "bad");
    assert_eq!(errors[0].slot, Some(SlotIdx::arg(0)));
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::UnknownTypeToken {
            token: "i32".to_string(),
        }
    );
}

#[test]
fn conflicting_memory_attributes_never_reach_a_definition() {
    let records = [RawIntrinsic::new("bad", "int", &[], "NoMem,ReadMem")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::ConflictingMemoryAttributes {
            first: "NoMem",
            second: "ReadMem",
        }
    );
}

#[test]
fn unknown_attribute_token() {
    let records = [RawIntrinsic::new("bad", "int", &[], "WriteMem")];
    let errors = errors_of(&records);
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::UnknownAttributeToken {
            token: "WriteMem".to_string(),
        }
    );
}

#[test]
fn duplicate_names_detected() {
    let records = [
        RawIntrinsic::new("jump_table", "anyptr", &["anyint", "vararg"], "NoMem"),
        RawIntrinsic::new("jump_table", "anyptr", &["anyint", "vararg"], "NoMem"),
    ];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::DuplicateName {
            previous: "jump_table".to_string(),
        }
    );
}

#[test]
fn duplicate_after_namespace_normalization() {
    let records = [
        RawIntrinsic::new("jump_table", "anyptr", &["anyint", "vararg"], "NoMem"),
        RawIntrinsic::new(
            "llvm.vc.internal.jump.table",
            "anyptr",
            &["anyint", "vararg"],
            "NoMem",
        ),
    ];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::DuplicateName {
            previous: "jump_table".to_string(),
        }
    );
}

#[test]
fn vararg_must_be_last() {
    let records = [RawIntrinsic::new("bad", "int", &["vararg", "int"], "None")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].slot, Some(SlotIdx::arg(0)));
    assert_eq!(errors[0].kind, CatalogueErrorKind::MisplacedVarArg);
}

#[test]
fn vararg_result_rejected() {
    let records = [RawIntrinsic::new("bad", "vararg", &[], "None")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].slot, Some(SlotIdx::RESULT));
    assert_eq!(errors[0].kind, CatalogueErrorKind::MisplacedVarArg);
}

#[test]
fn match_ref_out_of_range() {
    let records = [RawIntrinsic::new("bad", "any", &["7"], "None")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].slot, Some(SlotIdx::arg(0)));
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::UnresolvedMatchChain {
            target: SlotIdx::arg(6),
        }
    );
}

#[test]
fn match_ref_into_vararg_tail() {
    let records = [RawIntrinsic::new("bad", "2", &["int", "vararg"], "None")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].slot, Some(SlotIdx::RESULT));
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::UnresolvedMatchChain {
            target: SlotIdx::arg(1),
        }
    );
}

#[test]
fn match_ref_cycle() {
    // result -> arg0 -> arg1 -> arg0: a cycle that never reaches a
    // concrete or class slot.
    let records = [RawIntrinsic::new("bad", "1", &["2", "1"], "None")];
    let errors = errors_of(&records);
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .all(|e| matches!(e.kind, CatalogueErrorKind::UnresolvedMatchChain { .. })));
}

#[test]
fn match_ref_self_reference() {
    let records = [RawIntrinsic::new("bad", "int", &["1"], "None")];
    let errors = errors_of(&records);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        CatalogueErrorKind::UnresolvedMatchChain {
            target: SlotIdx::arg(0),
        }
    );
}

#[test]
fn valid_match_chain_through_another_match() {
    // arg1 -> arg0 -> result(any): terminates at a class slot.
    let records = [RawIntrinsic::new("ok", "any", &["0", "1"], "None")];
    assert!(validate(&records).is_ok());
}

#[test]
fn collects_all_violations_in_one_pass() {
    let records = [
        RawIntrinsic::new("one", "bogus", &["int"], "NoMem,ReadMem"),
        RawIntrinsic::new("two", "int", &["vararg", "int"], "Sideways"),
        RawIntrinsic::new("one", "int", &[], "None"),
    ];
    let errors = errors_of(&records);
    // bogus result token + conflicting memory + misplaced vararg +
    // unknown attribute + duplicate name.
    assert_eq!(errors.len(), 5);
}

#[test]
fn failed_validation_produces_no_definitions() {
    let records = [
        RawIntrinsic::new("good", "int", &[], "NoMem"),
        RawIntrinsic::new("bad", "bogus", &[], "NoMem"),
    ];
    assert!(validate(&records).is_err());
}
