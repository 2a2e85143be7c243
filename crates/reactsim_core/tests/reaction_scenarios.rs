use reactsim_core::{
    enumerate_reactions, evaluate_selection, mass_energy, ParticleState, ReactionOutcome,
    SelectionBoard, Species,
};

const EPSILON: f64 = 1e-6;

fn signature_of(terms: &str) -> [i64; 8] {
    ParticleState::parse_terms(terms)
        .expect("valid terms")
        .signature()
}

#[test]
fn single_proton_includes_trivial_reaction_with_zero_delta() {
    let input = ParticleState::parse_terms("p").unwrap();
    let reactions = enumerate_reactions(&input);

    let trivial = reactions
        .iter()
        .find(|reaction| reaction.products == input)
        .expect("p -> p must be enumerated");
    assert_eq!(trivial.energy_delta_mev, 0.0);
    assert_eq!(reactions[0].products, input);

    // p + 1.804 MeV -> n + e+ + nu_e is the only other candidate.
    assert_eq!(reactions.len(), 2);
    assert_eq!(reactions[1].products.signature(), signature_of("n + e_plus + nu_e"));
    assert!((reactions[1].energy_delta_mev + 1.8040022).abs() < EPSILON);
}

#[test]
fn neutron_beta_decay_ranks_first() {
    let input = ParticleState::parse_terms("n").unwrap();
    let reactions = enumerate_reactions(&input);

    let first = &reactions[0];
    assert_eq!(first.products.signature(), signature_of("p + e_minus + anti_nu_e"));
    assert!((first.energy_delta_mev - (939.565 - (938.272 + 0.511 + 0.0000022))).abs() < EPSILON);
    assert!(first.is_exothermic());
    assert_eq!((first.leading, first.leading_value), (Species::Proton, 1));

    assert_eq!(reactions[1].products, input);
    assert_eq!(reactions.len(), 2);
}

#[test]
fn two_neutrons_rank_double_decay_above_single_decay() {
    let input = ParticleState::parse_terms("2n").unwrap();
    let reactions = enumerate_reactions(&input);

    let signatures: Vec<_> = reactions.iter().map(|r| r.products.signature()).collect();
    assert_eq!(
        signatures,
        vec![
            signature_of("2p + 2e_minus + 2anti_nu_e"),
            signature_of("p + n + e_minus + anti_nu_e"),
            signature_of("2n"),
        ]
    );
}

#[test]
fn electron_positron_pair_annihilates_to_empty_state() {
    let input = ParticleState::parse_terms("e_minus + e_plus").unwrap();
    let reactions = enumerate_reactions(&input);

    assert_eq!(reactions.len(), 1);
    assert!(reactions[0].products.is_empty());
    assert!((reactions[0].energy_delta_mev - 1.022).abs() < EPSILON);
}

#[test]
fn proton_antiproton_annihilation_releases_both_rest_masses() {
    let input = ParticleState::parse_terms("p + anti_p").unwrap();
    let reactions = enumerate_reactions(&input);

    assert!(reactions[0].products.is_empty());
    assert!((reactions[0].energy_delta_mev - mass_energy(&input)).abs() < EPSILON);
}

#[test]
fn empty_selection_bypasses_enumeration() {
    let board = SelectionBoard::new();
    assert_eq!(evaluate_selection(&board), ReactionOutcome::NoSelection);
}

#[test]
fn selection_with_species_is_computed_even_when_reset_later() {
    let mut board = SelectionBoard::new();
    board.select(Species::Neutron, 1).unwrap();

    match evaluate_selection(&board) {
        ReactionOutcome::Computed { input, reactions } => {
            assert_eq!(input, ParticleState::new().with(Species::Neutron, 1));
            assert_eq!(reactions, enumerate_reactions(&input));
        }
        ReactionOutcome::NoSelection => panic!("neutron is selected"),
    }

    board.reset();
    assert_eq!(board, SelectionBoard::new());
    assert_eq!(evaluate_selection(&board), ReactionOutcome::NoSelection);
}

#[test]
fn enumeration_is_idempotent() {
    let input = ParticleState::parse_terms("2p + n + 3anti_nu_e").unwrap();
    assert_eq!(enumerate_reactions(&input), enumerate_reactions(&input));
}
