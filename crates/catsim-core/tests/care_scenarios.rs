//! End-to-end caretaking scenarios across cats, clowders and owners.
//!
//! These tests drive the public API the way a household would: cats live
//! in a cattery, owners and clowders refer to them by id, and every change
//! is visible through every reference.

use catsim_core::{Cat, CatError, Cattery, Clowder, Color, ErrorKind, Meal, Owner, PlayBoosts};

// =============================================================================
// Test Helpers
// =============================================================================

/// A cattery with three cats and their ids.
fn household() -> (Cattery, [catsim_core::CatId; 3]) {
    let mut cattery = Cattery::new();
    let nutmeg = cattery.insert(
        Cat::builder("Nutmeg")
            .age(3)
            .color("tortoiseshell")
            .hunger_level(3)
            .build(),
    );
    let chestnut = cattery.insert(Cat::builder("Chestnut").age(4).color("tabby").build());
    let boots = cattery.insert(Cat::builder("Boots").color("purple").mood(2).health(4).build());
    (cattery, [nutmeg, chestnut, boots])
}

// =============================================================================
// Cat scenarios
// =============================================================================

#[test]
fn boots_eats_three_times() {
    let mut boots = Cat::builder("Boots").hunger_level(2).mood(0).build();
    let meals: Vec<Meal> = (0..3).map(|_| boots.eat()).collect();
    assert_eq!(
        meals,
        vec![
            Meal {
                hunger_level: 1,
                mood: 1
            },
            Meal {
                hunger_level: 0,
                mood: 2
            },
            Meal {
                hunger_level: 0,
                mood: 3
            },
        ]
    );
}

#[test]
fn colours_are_interpreted_at_construction() {
    let (cattery, [nutmeg, chestnut, boots]) = household();
    assert_eq!(cattery.get(nutmeg).unwrap().color, Some(Color::Tortoiseshell));
    assert_eq!(cattery.get(chestnut).unwrap().color, Some(Color::Tabby));
    assert_eq!(cattery.get(boots).unwrap().color, None);
}

#[test]
fn a_day_in_the_life() {
    let mut cat = Cat::builder("Mochi").mood(0).health(5).build();

    cat.play(PlayBoosts {
        mood_boost: 2,
        hunger_boost: 2,
        energy_boost: -3,
    })
    .unwrap();
    cat.bathe();
    cat.groom();
    cat.eat();
    cat.sleep(7.5).unwrap();

    assert_eq!(cat.mood, 3);
    assert_eq!(cat.hunger_level, 1);
    assert_eq!(cat.energy, -1);
    assert_eq!(cat.health, 7);
}

#[test]
fn failed_operations_leave_state_untouched() {
    let mut cat = Cat::builder("Mochi").mood(1).hunger_level(1).energy(1).build();
    let before = cat.clone();

    let errors = [
        cat.play(PlayBoosts {
            hunger_boost: -1,
            ..PlayBoosts::default()
        })
        .unwrap_err(),
        cat.play(PlayBoosts {
            energy_boost: 5,
            ..PlayBoosts::default()
        })
        .unwrap_err(),
        cat.sleep(-0.5).unwrap_err(),
        cat.sleep(24.0).unwrap_err(),
    ];

    assert!(errors.iter().all(|e| e.kind() == ErrorKind::Domain));
    assert_eq!(cat, before);
}

// =============================================================================
// Owner scenarios
// =============================================================================

#[test]
fn jordan_feeds_their_cat() {
    let mut cat = Cat::builder("Pixel").hunger_level(5).mood(4).build();
    let owner = Owner::new("Jordan", &cat);
    owner.feed(&mut cat).unwrap();
    assert_eq!(cat.hunger_level, 4);
    assert_eq!(cat.mood, 5);
}

#[test]
fn feeding_an_unowned_cat_is_refused() {
    let (mut cattery, [nutmeg, chestnut, _]) = household();
    let owner = Owner::new("Jordan", nutmeg);
    let before = cattery.get(chestnut).unwrap().clone();

    let err = owner.feed(cattery.get_mut(chestnut).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Referential);
    assert_eq!(cattery.get(chestnut).unwrap(), &before);
}

#[test]
fn adoption_extends_what_an_owner_may_care_for() {
    let (mut cattery, [nutmeg, chestnut, boots]) = household();
    let mut owner = Owner::new("Sasha", nutmeg);

    assert!(owner.groom(cattery.get_mut(boots).unwrap()).is_err());
    owner.adopt(vec![chestnut, boots]);
    owner.groom(cattery.get_mut(boots).unwrap()).unwrap();

    assert_eq!(owner.cats_owned(), &[nutmeg, chestnut, boots]);
    assert_eq!(cattery.get(boots).unwrap().mood, 3);
}

#[test]
fn shared_cat_changes_are_seen_everywhere() {
    let (mut cattery, [nutmeg, chestnut, _]) = household();
    let sasha = Owner::new("Sasha", nutmeg);
    let liam = Owner::new("Liam", vec![nutmeg, chestnut]);
    let clowder = Clowder::from_cats(vec![nutmeg, chestnut]);

    sasha.feed(cattery.get_mut(nutmeg).unwrap()).unwrap();
    liam.feed(cattery.get_mut(nutmeg).unwrap()).unwrap();

    let members = cattery.resolve(clowder.members()).unwrap();
    assert_eq!(members[0].name, "Nutmeg");
    assert_eq!(members[0].hunger_level, 1);
    assert_eq!(members[0].mood, 2);
}

#[test]
fn owner_facts_come_from_the_pool() {
    let owner = Owner::new("Sasha", &Cat::new("Whiskers"));
    for _ in 0..20 {
        assert!(catsim_core::facts::CAT_FACTS.contains(&owner.give_fact()));
    }
}

// =============================================================================
// Clowder scenarios
// =============================================================================

#[test]
fn clowder_membership_round_trip() {
    let (cattery, [nutmeg, chestnut, boots]) = household();
    let mut clowder = Clowder::from_cats(vec![nutmeg, chestnut]);
    let before = clowder.clone();

    let newcomer = cattery.get(boots).unwrap();
    clowder.add(newcomer);
    assert!(clowder.contains(newcomer));
    clowder.remove(newcomer).unwrap();

    assert_eq!(clowder, before);
    assert!(matches!(
        clowder.remove(newcomer),
        Err(CatError::NotInClowder(id)) if id == boots
    ));
}

#[test]
fn a_cat_can_live_in_an_owner_and_a_clowder() {
    let (cattery, [nutmeg, _, _]) = household();
    let cat = cattery.get(nutmeg).unwrap();
    let owner = Owner::new("Sasha", cat);
    let clowder = Clowder::from_cats(cat);
    assert!(owner.owns(cat));
    assert!(clowder.contains(cat));
}
