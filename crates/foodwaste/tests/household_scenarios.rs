//! End-to-end scenarios across households, members, storages and storage types.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;

use intranet_core::{
    CultureInfo, DomainError, Identifiable, Identifier, Identity, Range, Translatable,
    Translation, TranslationInfo,
};
use intranet_foodwaste::{
    DomainObjectValidations, Household, HouseholdMember, HouseholdMemberRef, HouseholdRef,
    Membership, StandardDomainObjectValidations, Storage, StorageRef, StorageSettings,
    StorageType, StorageTypePermissions, StorageTypeRef, generate_activation_code,
};

fn validations() -> Arc<dyn DomainObjectValidations> {
    intranet_observability::init();
    Arc::new(StandardDomainObjectValidations::new())
}

fn culture(name: &str) -> CultureInfo {
    CultureInfo::new(name).unwrap()
}

fn translation(owner: Identifier, culture_name: &str, value: &str) -> Translation {
    Translation::new(
        Identity::persisted(Identifier::new()),
        owner,
        TranslationInfo::new(Identity::persisted(Identifier::new()), culture(culture_name)),
        value,
    )
    .unwrap()
}

fn household(name: &str) -> HouseholdRef {
    Household::new(
        Identity::persisted(Identifier::new()),
        name,
        Some("Test household".to_string()),
        Utc::now(),
    )
    .unwrap()
    .into_ref()
}

fn member(mail_address: &str) -> HouseholdMemberRef {
    HouseholdMember::new(
        Identity::persisted(Identifier::new()),
        mail_address,
        generate_activation_code(),
        Utc::now(),
        validations(),
    )
    .unwrap()
    .into_ref()
}

fn refrigerator() -> StorageTypeRef {
    let id = Identifier::new();
    let mut storage_type = StorageType::new(
        Identity::persisted(id),
        1,
        5,
        Range::new(0, 10),
        StorageTypePermissions::default(),
        validations(),
    )
    .unwrap();
    storage_type.translation_add(translation(id, "da-DK", "Køleskab"));
    storage_type.translation_add(translation(id, "en-US", "Refrigerator"));
    Rc::new(RefCell::new(storage_type))
}

fn storage(
    home: &HouseholdRef,
    storage_type: &StorageTypeRef,
    sort_order: i32,
    temperature: i32,
) -> Storage {
    Storage::new(
        Identity::transient(),
        home,
        Rc::clone(storage_type),
        StorageSettings {
            sort_order,
            temperature,
            description: None,
        },
        Utc::now(),
        validations(),
    )
    .unwrap()
}

fn resolved(storage_type: &StorageTypeRef) -> Option<String> {
    storage_type
        .borrow()
        .translation()
        .map(|translation| translation.value().to_string())
}

#[test]
fn storage_temperature_follows_storage_type_range() {
    let home = household("Home");
    let mut storage = storage(&home, &refrigerator(), 50, 10);
    assert_eq!(storage.temperature(), 10);

    let err = storage.set_temperature(11).unwrap_err();
    assert_eq!(
        err,
        DomainError::IllegalValue {
            value: "11".to_string(),
            property: "value".to_string(),
        }
    );
    assert_eq!(storage.temperature(), 10);
}

#[test]
fn storage_translate_fans_out_on_request() {
    let home = household("Home");
    let storage_type = refrigerator();
    let storage = storage(&home, &storage_type, 1, 5);

    storage.translate(&culture("en-US"), true, false);
    assert!(storage_type.borrow().translation().is_none());

    storage.translate(&culture("en-US"), true, true);
    assert_eq!(
        storage_type.borrow().translation().unwrap().value(),
        "Refrigerator"
    );

    // Redundant calls are harmless; untranslated cultures fall back.
    storage.translate(&culture("fr-FR"), false, true);
    storage.translate(&culture("fr-FR"), false, true);
    assert_eq!(storage_type.borrow().translation().unwrap().value(), "Køleskab");
}

#[test]
fn adding_member_twice_keeps_one_link_each_way() {
    let home = household("Home");
    let ole = member("ole@example.com");

    Household::household_member_add(&home, &ole);
    Household::household_member_add(&home, &ole);

    assert_eq!(home.borrow().household_members().len(), 1);
    let households = ole.borrow().households();
    assert_eq!(households.len(), 1);
    assert!(Rc::ptr_eq(&households[0], &home));
}

#[test]
fn household_limit_is_reported_not_enforced() {
    let ole = member("ole@example.com");
    let home = household("Home");
    let cabin = household("Cabin");

    Household::household_member_add(&home, &ole);
    assert!(ole.borrow().has_reached_household_limit());

    // The aggregate can represent more households than the tier allows;
    // callers decide whether to allow it.
    Household::household_member_add(&cabin, &ole);
    assert_eq!(ole.borrow().household_count(), 2);
    assert!(ole.borrow().has_reached_household_limit());

    ole.borrow_mut()
        .membership_apply(Membership::Premium, None)
        .unwrap();
    assert!(!ole.borrow().has_reached_household_limit());
}

#[test]
fn member_finds_household_by_identifier() {
    let ole = member("ole@example.com");
    let home = household("Home");
    Household::household_member_add(&home, &ole);

    let id = home.borrow().identifier().unwrap();
    assert!(ole.borrow().household(id).is_some());
    assert!(ole.borrow().household(Identifier::new()).is_none());
}

#[test]
fn translate_cascades_without_looping_back() {
    let home = household("Home");
    let storage_type = refrigerator();
    let fridge: StorageRef = storage(&home, &storage_type, 1, 5).into_ref();
    Household::storage_add(&home, &fridge).unwrap();

    let ole = member("ole@example.com");
    let mette = member("mette@example.com");
    Household::household_member_add(&home, &ole);
    Household::household_member_add(&home, &mette);
    assert_eq!(resolved(&storage_type), None);

    // Household -> storages -> storage type, and household -> members.
    home.borrow_mut().translate(&culture("da-DK"), true);
    assert_eq!(resolved(&storage_type).as_deref(), Some("Køleskab"));

    // Member -> households -> storages. The households do not cascade back
    // to their members, which are still mutably borrowed here.
    ole.borrow_mut().translate(&culture("en-US"), true);
    assert_eq!(resolved(&storage_type).as_deref(), Some("Refrigerator"));

    // Storage -> household -> storages, again without reaching members.
    fridge.borrow().translate(&culture("da-DK"), true, false);
    assert_eq!(resolved(&storage_type).as_deref(), Some("Køleskab"));

    assert_eq!(home.borrow().household_members().len(), 2);
    assert_eq!(home.borrow().storages().len(), 1);
}

#[test]
fn pending_activation_is_not_activated() {
    let ole = member("ole@example.com");
    let now = Utc::now();
    ole.borrow_mut().activate(now + chrono::Duration::days(1));
    assert!(!ole.borrow().is_activated_at(now));
    assert!(ole.borrow().activation_time().is_some());
}
