use reactsim_core::{
    enumerate_reactions, mass_energy, ConservationSolver, ConservedTotal, ConservedTotals,
    ParticleState, Species,
};

#[test]
fn raw_chain_solutions_carry_mirrored_negative_slots() {
    // The chain writes each pair's net value into the particle slot and its
    // negation into the antiparticle slot, so raw vectors are not particle
    // counts. Only folded states are reported as products.
    let input = ParticleState::parse_terms("p").unwrap();
    let solver = ConservationSolver::new(&input).unwrap();

    let raw = solver.solve_raw(Species::Proton, 1).unwrap();
    assert_eq!(raw.values(), [1, 0, 0, 0, 0, -1, 0, 0]);
    assert!(raw.has_negative_slot());

    for particle in Species::PARTICLES {
        assert_eq!(raw.get(particle.antiparticle()), -raw.get(particle));
    }

    let folded = raw.fold().unwrap();
    assert_eq!(folded, input);
    let raw_state = ParticleState::from_signature(raw.values());
    assert_eq!(mass_energy(&raw_state), mass_energy(&folded));
}

#[test]
fn raw_chain_vectors_do_not_conserve_but_folded_states_do() {
    let input = ParticleState::parse_terms("n").unwrap();
    let solver = ConservationSolver::new(&input).unwrap();

    let raw = solver.solve_raw(Species::Proton, 1).unwrap();
    assert!(!solver.conserves(&ParticleState::from_signature(raw.values())));
    assert!(solver.conserves(&raw.fold().unwrap()));
}

#[test]
fn every_reaction_reproduces_all_twelve_totals() {
    let input = ParticleState::parse_terms("3p + 2e_plus + anti_n + nu_e").unwrap();
    let expected = ConservedTotals::compute(&input).unwrap();

    for reaction in enumerate_reactions(&input) {
        let actual = ConservedTotals::compute(&reaction.products).unwrap();
        assert_eq!(actual.iter().count(), ConservedTotal::ALL.len());
        for (total, value) in actual.iter() {
            assert_eq!(
                value,
                expected.get(total),
                "{} differs for {:?}",
                total.name(),
                reaction.products
            );
        }
        assert_eq!(reaction.products.baryon_number(), input.baryon_number());
        assert_eq!(reaction.products.lepton_number(), input.lepton_number());
        assert_eq!(reaction.products.charge(), input.charge());
    }
}

#[test]
fn solver_bounds_use_the_three_leading_totals() {
    let input = ParticleState::parse_terms("2n + e_minus").unwrap();
    let solver = ConservationSolver::new(&input).unwrap();
    let totals = solver.totals();

    assert_eq!(totals.get(ConservedTotal::PN), 2);
    assert_eq!(totals.get(ConservedTotal::NEMinus), 3);
    assert_eq!(totals.get(ConservedTotal::NAntiNuE), 2);
    assert_eq!(solver.max_leading_value(Species::Neutron), 3);
}
