use acelist_core::{
    Checklist, ChecklistFile, EditContext, Entry, EntryPreset, EntryType, Group, Justification,
};

#[test]
fn starter_document_carries_seed_content() {
    let file = ChecklistFile::new();

    assert_eq!(file.name(), "Blank Checklist");
    assert_eq!(file.make_and_model(), "Fast Plane");
    assert_eq!(file.aircraft_info(), "Some Data");
    assert_eq!(file.manufacturer_id(), "Manufacturer");
    assert_eq!(file.copyright(), "2024");
    assert_eq!(file.groups().len(), 1);

    let group = &file.groups()[0];
    assert_eq!(group.name(), "New Group");
    assert_eq!(group.checklists().len(), 1);

    let checklist = &group.checklists()[0];
    assert_eq!(checklist.name(), "Checklist 1");
    assert_eq!(checklist.entries().len(), 1);

    let entry = &checklist.entries()[0];
    assert_eq!(entry.kind(), EntryType::Undefined);
    assert_eq!(entry.justification(), Justification::Left);
    assert_eq!(entry.text(), "New Item");
}

#[test]
fn presets_match_sample_palette() {
    let note = Entry::preset(EntryPreset::NoteBlankLines);
    assert_eq!(note.kind(), EntryType::Note);
    assert_eq!(note.blank_lines_following(), 5);

    let warning = Entry::preset(EntryPreset::Warning);
    assert_eq!(warning.kind(), EntryType::Warning);
    assert_eq!(warning.justification(), Justification::Center);

    let challenge = Entry::preset(EntryPreset::Challenge);
    assert_eq!(challenge.kind(), EntryType::Challenge);
    assert_eq!(challenge.text(), "Challenge");
    assert_eq!(challenge.response(), "Response");
}

#[test]
fn set_default_checklist_is_exclusive_regardless_of_prior_state() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    let group = file.group_mut(group_id).expect("group exists");
    let a_id = group.add_checklist(&mut ctx, Checklist::named("A"), None);
    let b_id = group.add_checklist(&mut ctx, Checklist::named("B"), None);

    // From the unflagged state.
    file.set_default_checklist(&mut ctx, b_id);
    let group = file.group(group_id).expect("group exists");
    assert!(!group.checklist(a_id).expect("A exists").is_default());
    assert!(group.checklist(b_id).expect("B exists").is_default());

    // From the state where A holds the flag.
    file.set_default_checklist(&mut ctx, a_id);
    file.set_default_checklist(&mut ctx, b_id);
    let group = file.group(group_id).expect("group exists");
    assert!(!group.checklist(a_id).expect("A exists").is_default());
    assert!(group.checklist(b_id).expect("B exists").is_default());
}

#[test]
fn set_default_group_clears_siblings() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let first_id = file.add_group(&mut ctx, Group::named("First"), None);
    let second_id = file.add_group(&mut ctx, Group::named("Second"), None);

    file.set_default_group(&mut ctx, first_id);
    file.set_default_group(&mut ctx, second_id);

    assert!(!file.group(first_id).expect("first exists").is_default());
    assert!(file.group(second_id).expect("second exists").is_default());
    assert_eq!(file.default_group_name(), "Second");
}

#[test]
fn default_names_fall_back_to_sentinel() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    assert_eq!(file.default_group_name(), "None");

    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    let group = file.group(group_id).expect("group exists");
    assert_eq!(group.default_checklist_name(), "None");
}

#[test]
fn set_default_with_unknown_id_is_a_legal_no_op() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    file.set_default_group(&mut ctx, group_id);
    let recorded_before = ctx.current_action_name();

    file.set_default_group(&mut ctx, uuid::Uuid::new_v4());
    file.set_default_checklist(&mut ctx, uuid::Uuid::new_v4());

    assert!(file.group(group_id).expect("group exists").is_default());
    assert_eq!(ctx.current_action_name(), recorded_before);
}

#[test]
fn duplicate_entry_gets_fresh_identity_and_same_content() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    let group = file.group_mut(group_id).expect("group exists");
    let checklist_id = group.add_checklist(&mut ctx, Checklist::named("C"), None);
    let checklist = file.checklist_mut(checklist_id).expect("checklist exists");
    let source_id = checklist.add_entry(
        &mut ctx,
        Entry::new(EntryType::Caution, Justification::IndentOne, "Hot start"),
    );

    let copy_id = checklist
        .duplicate_entry(&mut ctx, source_id)
        .expect("source exists");

    let checklist = file.checklist(checklist_id).expect("checklist exists");
    assert_ne!(source_id, copy_id);
    assert_eq!(checklist.entries().len(), 2);
    let source = checklist.entry(source_id).expect("source exists");
    let copy = checklist.entry(copy_id).expect("copy exists");
    assert!(source.content_eq(copy));
    // The copy sits right after the source.
    assert_eq!(checklist.entries()[1].id(), copy_id);
}

#[test]
fn duplicate_group_copies_subtree_without_stealing_default() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    let group = file.group_mut(group_id).expect("group exists");
    let checklist_id = group.add_checklist(&mut ctx, Checklist::named("C"), None);
    file.checklist_mut(checklist_id)
        .expect("checklist exists")
        .add_entry(
            &mut ctx,
            Entry::new(EntryType::Text, Justification::Left, "Item"),
        );
    file.set_default_group(&mut ctx, group_id);

    let copy_id = file
        .duplicate_group(&mut ctx, group_id)
        .expect("source exists");

    assert_eq!(file.groups().len(), 2);
    assert_eq!(file.groups()[1].id(), copy_id);
    let copy = file.group(copy_id).expect("copy exists");
    assert_eq!(copy.name(), "G");
    assert_eq!(copy.checklists().len(), 1);
    assert!(!copy.is_default(), "the source keeps the default flag");
    assert!(file.group(group_id).expect("source exists").is_default());
    // Child identities are fresh throughout the copied subtree.
    assert_ne!(copy.checklists()[0].id(), checklist_id);
}

#[test]
fn whole_file_duplicate_preserves_scalars_under_fresh_ids() {
    let mut ctx = EditContext::new();
    let file = {
        let mut file = ChecklistFile::new();
        let group_id = file.groups()[0].id();
        file.set_default_group(&mut ctx, group_id);
        file
    };

    let copy = file.duplicate();
    assert_ne!(copy.id(), file.id());
    assert!(copy.content_eq(&file));
    assert_ne!(copy.groups()[0].id(), file.groups()[0].id());
}

#[test]
fn lookup_resolves_nested_entities_by_id() {
    let mut ctx = EditContext::new();
    let mut file = ChecklistFile::named("Doc");
    let group_id = file.add_group(&mut ctx, Group::named("G"), None);
    let group = file.group_mut(group_id).expect("group exists");
    let checklist_id = group.add_checklist(&mut ctx, Checklist::named("C"), None);
    let entry_id = file
        .checklist_mut(checklist_id)
        .expect("checklist exists")
        .add_entry(
            &mut ctx,
            Entry::new(EntryType::Text, Justification::Left, "Item"),
        );

    assert_eq!(file.group(group_id).map(Group::id), Some(group_id));
    assert_eq!(
        file.checklist(checklist_id).map(Checklist::id),
        Some(checklist_id)
    );
    assert_eq!(file.entry(entry_id).map(Entry::id), Some(entry_id));
    assert!(file.entry(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let entry = Entry::new(EntryType::Warning, Justification::Center, "Gear down");

    let json = serde_json::to_value(&entry).expect("entry serializes");
    assert_eq!(json["type"], "warning");
    assert_eq!(json["justification"], "center");
    assert_eq!(json["text"], "Gear down");
    assert_eq!(json["blank_lines_following"], 0);

    let decoded: Entry = serde_json::from_value(json).expect("entry deserializes");
    assert_eq!(decoded, entry);
}

#[test]
fn display_labels_are_stable() {
    assert_eq!(EntryType::Challenge.label(), "Challenge/Response");
    assert_eq!(Justification::IndentThree.label(), "Indent 3 Levels");
}
