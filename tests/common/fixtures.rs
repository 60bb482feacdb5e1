//! Road network fixtures
//!
//! Lengths are in km, coordinates in degrees (longitude, latitude).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routegraph::{Category, Graph, VertexId};
use std::collections::HashMap;

/// A built graph with its vertex ids addressable by place name
pub struct Fixture {
    pub graph: Graph,
    pub places: HashMap<&'static str, VertexId>,
}

impl Fixture {
    fn build(places: &[(&'static str, f64, f64)], roads: &[(&str, &str, &str, f64, u8)]) -> Self {
        let mut graph = Graph::new();
        let places: HashMap<_, _> = places
            .iter()
            .map(|&(name, longitude, latitude)| (name, graph.add_vertex(longitude, latitude)))
            .collect();

        for &(name, from, to, length, category) in roads {
            graph
                .add_edge(name, places[from], places[to], length, Category::new(category))
                .unwrap_or_else(|e| panic!("fixture road {name}: {e}"));
        }

        Self { graph, places }
    }

    /// Vertex id of a named place
    pub fn id(&self, place: &str) -> VertexId {
        *self
            .places
            .get(place)
            .unwrap_or_else(|| panic!("unknown place {place}"))
    }
}

/// Main road network of Austria: 17 cities, 33 roads, 4017 km in total
pub fn austria() -> Fixture {
    let places = [
        ("bregenz", 9.76, 47.50),
        ("dornbirn", 9.74, 47.41),
        ("feldkirch", 9.59, 47.25),
        ("salzburg", 13.05, 47.81),
        ("innsbruck", 11.40, 47.27),
        ("villach", 13.88, 46.62),
        ("wels", 14.02, 48.16),
        ("linz", 14.30, 48.32),
        ("steyr", 14.42, 48.05),
        ("klagenfurt", 14.30, 46.62),
        ("leoben", 15.01, 47.38),
        ("graz", 15.44, 47.07),
        ("krems", 15.61, 48.41),
        ("st_poelten", 15.63, 48.21),
        ("wien", 16.40, 48.21),
        ("wiener_neustadt", 16.23, 47.81),
        ("eisenstadt", 16.53, 47.84),
    ];
    let roads = [
        ("bgzdbn", "bregenz", "dornbirn", 10.0, 1),
        ("dbnfkh", "dornbirn", "feldkirch", 25.0, 1),
        ("fkhinb", "feldkirch", "innsbruck", 158.0, 1),
        ("bgzszg", "bregenz", "salzburg", 330.0, 1),
        ("inbszg", "innsbruck", "salzburg", 166.0, 1),
        ("inbvil", "innsbruck", "villach", 289.0, 1),
        ("szgvil", "salzburg", "villach", 194.0, 1),
        ("szgwel", "salzburg", "wels", 107.0, 1),
        ("szgsty", "salzburg", "steyr", 130.0, 1),
        ("szglbn", "salzburg", "leoben", 227.0, 1),
        ("wellnz", "wels", "linz", 28.0, 1),
        ("welsty", "wels", "steyr", 41.0, 1),
        ("welkla", "wels", "klagenfurt", 225.0, 1),
        ("vilkla", "villach", "klagenfurt", 40.0, 1),
        ("lnzsty", "linz", "steyr", 37.0, 1),
        ("styvil", "steyr", "villach", 257.0, 1),
        ("stykla", "steyr", "klagenfurt", 220.0, 1),
        ("stykrm", "steyr", "krems", 121.0, 1),
        ("styspn", "steyr", "st_poelten", 108.0, 1),
        ("stylbn", "steyr", "leoben", 152.0, 1),
        ("wellbn", "wels", "leoben", 156.0, 1),
        ("lnzkrm", "linz", "krems", 139.0, 1),
        ("lnzspn", "linz", "st_poelten", 125.0, 1),
        ("lbngrz", "leoben", "graz", 61.0, 1),
        ("lbnwns", "leoben", "wiener_neustadt", 108.0, 1),
        ("grzwns", "graz", "wiener_neustadt", 144.0, 1),
        ("wnsest", "wiener_neustadt", "eisenstadt", 32.0, 1),
        ("wnswie", "wiener_neustadt", "wien", 63.0, 1),
        ("wieest", "wien", "eisenstadt", 61.0, 1),
        ("spnwns", "st_poelten", "wiener_neustadt", 94.0, 1),
        ("krmwie", "krems", "wien", 77.0, 1),
        ("krmspn", "krems", "st_poelten", 27.0, 1),
        ("spnwie", "st_poelten", "wien", 65.0, 1),
    ];
    Fixture::build(&places, &roads)
}

/// Upper Austria with mixed road classes: 10 towns, 17 roads, 634 km
pub fn upper_austria() -> Fixture {
    let places = [
        ("braunau", 13.04, 48.25),
        ("ried", 13.49, 48.21),
        ("voecklabruck", 13.66, 48.01),
        ("gmunden", 13.80, 47.92),
        ("bad_ischl", 13.62, 47.71),
        ("traun", 14.24, 48.23),
        ("ansfelden", 14.26, 48.21),
        ("linz", 14.30, 48.32),
        ("steyr", 14.42, 48.05),
        ("wels", 14.02, 48.16),
    ];
    let roads = [
        ("brnrie", "braunau", "ried", 40.0, 3),
        ("brnvoe", "braunau", "voecklabruck", 70.0, 2),
        ("brnbil", "braunau", "bad_ischl", 94.0, 3),
        ("rievoe", "ried", "voecklabruck", 33.0, 3),
        ("voegmd", "voecklabruck", "gmunden", 17.0, 3),
        ("riewel", "ried", "wels", 48.0, 1),
        ("voewel", "voecklabruck", "wels", 36.0, 1),
        ("gmdwel", "gmunden", "wels", 45.0, 1),
        ("gmdsty", "gmunden", "steyr", 71.0, 1),
        ("welsty", "wels", "steyr", 41.0, 3),
        ("weltra", "wels", "traun", 18.0, 1),
        ("trasty", "traun", "steyr", 28.0, 3),
        ("tralnz", "traun", "linz", 13.0, 1),
        ("traans", "traun", "ansfelden", 6.0, 4),
        ("lnzans", "linz", "ansfelden", 14.0, 1),
        ("anssty", "ansfelden", "steyr", 27.0, 3),
        ("bilgmd", "bad_ischl", "gmunden", 33.0, 3),
    ];
    Fixture::build(&places, &roads)
}

/// Random connected-ish graph with integer lengths
///
/// Vertices sit on a unit square, so planar estimates never exceed the
/// lengths (every length is at least 2). Parallel edges and self-loops
/// may occur.
pub fn random_graph(seed: u64, vertices: usize, edges: usize) -> (Graph, Vec<VertexId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let ids: Vec<_> = (0..vertices)
        .map(|_| graph.add_vertex(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for i in 0..edges {
        let a = ids[rng.gen_range(0..vertices)];
        let b = ids[rng.gen_range(0..vertices)];
        let length = f64::from(rng.gen_range(2u32..=20));
        let category = Category::new(rng.gen_range(1u8..=5));
        graph
            .add_edge(format!("e{i}"), a, b, length, category)
            .expect("random graph endpoints exist");
    }

    (graph, ids)
}
