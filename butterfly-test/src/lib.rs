//! Synthetic fixtures used across the workspace's test suites: the six
//! named end-to-end scenarios, as plain node/edge data that any crate can
//! flatten into whatever graph representation it tests against.

/// One fixture: a node count, an undirected edge list `(u, v, weight_m)`,
/// a chosen source and destination, and the delta the scenario is defined
/// under.
pub struct Scenario {
    pub name: &'static str,
    pub node_count: usize,
    pub edges: Vec<(u32, u32, f64)>,
    pub positions: Vec<(f64, f64)>,
    pub src: u32,
    pub dest: u32,
    pub delta_m: f64,
}

/// N=5 chain, each hop weight 1.
pub fn five_node_chain() -> Scenario {
    Scenario {
        name: "five_node_chain",
        node_count: 5,
        edges: vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)],
        positions: (0..5).map(|i| (0.0, i as f64)).collect(),
        src: 0,
        dest: 4,
        delta_m: 1.0,
    }
}

/// N=4 diamond: a cheap 0-1-3 side and an expensive 0-2-3 side.
pub fn diamond() -> Scenario {
    Scenario {
        name: "diamond",
        node_count: 4,
        edges: vec![(0, 1, 1.0), (0, 2, 5.0), (1, 3, 1.0), (2, 3, 1.0)],
        positions: vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)],
        src: 0,
        dest: 3,
        delta_m: 2.0,
    }
}

/// N=3, node 2 is disconnected from the {0, 1} component.
pub fn disconnection() -> Scenario {
    Scenario {
        name: "disconnection",
        node_count: 3,
        edges: vec![(0, 1, 1.0)],
        positions: vec![(0.0, 0.0), (0.0, 1.0), (5.0, 5.0)],
        src: 0,
        dest: 2,
        delta_m: 1.0,
    }
}

/// N=2 with two parallel edges of different weight; only the minimum
/// should survive relaxation.
pub fn parallel_edges() -> Scenario {
    Scenario {
        name: "parallel_edges",
        node_count: 2,
        edges: vec![(0, 1, 5.0), (0, 1, 3.0)],
        positions: vec![(0.0, 0.0), (0.0, 1.0)],
        src: 0,
        dest: 1,
        delta_m: 40.0,
    }
}

/// N=3 chain where each hop's weight equals delta exactly, exercising the
/// "never reopen a past bucket" boundary condition.
pub fn delta_boundary(delta_m: f64) -> Scenario {
    Scenario {
        name: "delta_boundary",
        node_count: 3,
        edges: vec![(0, 1, delta_m), (1, 2, delta_m)],
        positions: vec![(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)],
        src: 0,
        dest: 2,
        delta_m,
    }
}

/// Two real-world coordinates (Bremerhaven, Germany) connected by a single
/// edge whose weight is computed from the actual haversine distance
/// between them, so tests can assert the edge weight matches geodesic
/// distance to within 1 cm.
pub fn geographic_pair() -> Scenario {
    let a = (53.347781, 8.466496);
    let b = (53.350880, 8.466570);
    let weight = butterfly_geometry::haversine_distance_m(a.0, a.1, b.0, b.1);

    Scenario {
        name: "geographic_pair",
        node_count: 2,
        edges: vec![(0, 1, weight)],
        positions: vec![a, b],
        src: 0,
        dest: 1,
        delta_m: 40.0,
    }
}
