//! Land adjacency for every supported park, as declared by the live system.
//!
//! Edges are kept exactly as declared, including the one-way ones; see
//! [`Topology::asymmetries`].

use parkpicks_core::{Park, Topology, TopologyRegistry};

type Lands = &'static [(&'static str, &'static [&'static str])];

const DISNEYLAND: Lands = &[
    ("Main Street, U.S.A.", &["Adventureland", "Tomorrowland", "Fantasyland"]),
    ("Adventureland", &["New Orleans Square", "Frontierland", "Main Street, U.S.A."]),
    ("New Orleans Square", &["Adventureland", "Bayou Country", "Frontierland"]),
    ("Bayou Country", &["New Orleans Square", "Star Wars: Galaxy's Edge"]),
    ("Frontierland", &["Adventureland", "New Orleans Square", "Fantasyland"]),
    ("Fantasyland", &["Frontierland", "Mickey's Toontown", "Tomorrowland", "Main Street, U.S.A."]),
    ("Mickey's Toontown", &["Fantasyland"]),
    ("Tomorrowland", &["Fantasyland", "Main Street, U.S.A."]),
    ("Star Wars: Galaxy's Edge", &["Bayou Country", "Fantasyland"]),
];

const CALIFORNIA_ADVENTURE: Lands = &[
    ("Buena Vista Street", &["Hollywood Land", "Grizzly Peak"]),
    ("Hollywood Land", &["Avengers Campus", "Buena Vista Street"]),
    ("Avengers Campus", &["Hollywood Land", "Cars Land"]),
    ("Cars Land", &["Avengers Campus", "San Fransokyo Square"]),
    ("San Fransokyo Square", &["Cars Land", "Pixar Pier", "Grizzly Peak"]),
    ("Grizzly Peak", &["San Fransokyo Square", "Buena Vista Street"]),
    ("Pixar Pier", &["San Fransokyo Square", "Paradise Gardens Park"]),
    ("Paradise Gardens Park", &["Pixar Pier"]),
];

const ANIMAL_KINGDOM: Lands = &[
    ("The Oasis", &["Discovery Island"]),
    (
        "Discovery Island",
        &["The Oasis", "Africa", "Asia", "Pandora – The World of Avatar", "Dinoland U.S.A."],
    ),
    ("Africa", &["Discovery Island", "Asia"]),
    ("Asia", &["Africa", "Discovery Island", "Dinoland U.S.A."]),
    ("Dinoland U.S.A.", &["Asia", "Discovery Island"]),
    ("Pandora – The World of Avatar", &["Discovery Island"]),
];

const MAGIC_KINGDOM: Lands = &[
    ("Main Street, U.S.A.", &["Adventureland", "Tomorrowland", "Fantasyland"]),
    ("Adventureland", &["Frontierland", "Main Street, U.S.A."]),
    ("Frontierland", &["Adventureland", "Liberty Square"]),
    ("Liberty Square", &["Frontierland", "Fantasyland"]),
    ("Fantasyland", &["Liberty Square", "Tomorrowland", "Main Street, U.S.A."]),
    ("Tomorrowland", &["Fantasyland", "Main Street, U.S.A."]),
];

const EPCOT: Lands = &[
    ("American Adventure Pavilion", &["World Showcase"]),
    ("France Pavilion", &["World Showcase", "Imagination Pavilion"]),
    ("Imagination Pavilion", &["France Pavilion", "World Celebration"]),
    ("Japan Pavilion", &["World Showcase"]),
    ("World Celebration", &["Imagination Pavilion", "World Discovery"]),
    ("World Discovery", &["World Celebration", "World Nature"]),
    ("World Nature", &["World Discovery", "World Showcase"]),
    (
        "World Showcase",
        &["American Adventure Pavilion", "France Pavilion", "Japan Pavilion", "World Nature"],
    ),
];

const HOLLYWOOD_STUDIOS: Lands = &[
    ("Hollywood Boulevard", &["Echo Lake", "Animation Courtyard"]),
    ("Echo Lake", &["Hollywood Boulevard", "Star Wars Launch Bay"]),
    ("Star Wars Launch Bay", &["Echo Lake", "Star Wars: Galaxy’s Edge"]),
    ("Star Wars: Galaxy’s Edge", &["Star Wars Launch Bay", "Toy Story Land"]),
    ("Toy Story Land", &["Star Wars: Galaxy’s Edge", "Animation Courtyard"]),
    ("Animation Courtyard", &["Hollywood Boulevard", "Toy Story Land"]),
];

const fn lands_of(park: Park) -> Lands {
    match park {
        Park::Disneyland => DISNEYLAND,
        Park::DisneyCaliforniaAdventure => CALIFORNIA_ADVENTURE,
        Park::AnimalKingdom => ANIMAL_KINGDOM,
        Park::MagicKingdom => MAGIC_KINGDOM,
        Park::Epcot => EPCOT,
        Park::HollywoodStudios => HOLLYWOOD_STUDIOS,
    }
}

/// Built-in topology for a single park.
#[must_use]
pub fn park_topology(park: Park) -> Topology {
    lands_of(park)
        .iter()
        .fold(Topology::new(), |topology, &(land, neighbors)| {
            topology.with_land(land, neighbors.iter().copied())
        })
}

/// Built-in topologies for every park.
#[must_use]
pub fn builtin_topology() -> TopologyRegistry {
    Park::ALL
        .into_iter()
        .fold(TopologyRegistry::new(), |registry, park| {
            registry.with_park(park, park_topology(park))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkpicks_core::Asymmetry;
    use rstest::rstest;

    #[rstest]
    #[case(Park::Disneyland, 9)]
    #[case(Park::DisneyCaliforniaAdventure, 8)]
    #[case(Park::AnimalKingdom, 6)]
    #[case(Park::MagicKingdom, 6)]
    #[case(Park::Epcot, 8)]
    #[case(Park::HollywoodStudios, 6)]
    fn every_park_declares_its_lands(#[case] park: Park, #[case] expected: usize) {
        assert_eq!(park_topology(park).lands().count(), expected);
    }

    #[rstest]
    fn lands_keep_declaration_order() {
        let lands: Vec<&str> = lands_of(Park::MagicKingdom)
            .iter()
            .map(|&(land, _)| land)
            .collect();
        let topology = park_topology(Park::MagicKingdom);
        assert_eq!(topology.lands().collect::<Vec<_>>(), lands);
        assert_eq!(lands.first(), Some(&"Main Street, U.S.A."));
    }

    #[rstest]
    fn galaxys_edge_is_the_only_one_way_edge() {
        assert_eq!(
            builtin_topology().asymmetries(),
            vec![(
                Park::Disneyland,
                Asymmetry {
                    from: "Star Wars: Galaxy's Edge".to_owned(),
                    to: "Fantasyland".to_owned(),
                },
            )]
        );
    }

    #[rstest]
    fn curly_apostrophes_are_preserved() {
        let registry = builtin_topology();
        assert!(registry.is_adjacent(
            Park::HollywoodStudios,
            "Toy Story Land",
            "Star Wars: Galaxy\u{2019}s Edge"
        ));
        assert!(!registry.is_adjacent(
            Park::HollywoodStudios,
            "Toy Story Land",
            "Star Wars: Galaxy's Edge"
        ));
    }

    #[rstest]
    fn same_land_names_differ_per_park() {
        let registry = builtin_topology();
        assert!(registry.is_adjacent(Park::Disneyland, "Adventureland", "New Orleans Square"));
        assert!(!registry.is_adjacent(Park::MagicKingdom, "Adventureland", "New Orleans Square"));
    }
}
