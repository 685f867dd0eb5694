//! Unit tests for ro-tour.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use ro_core::{GeoPoint, StopId};
    use ro_graph::Graph;

    /// Depot 1 at (0,0) and stops along the equator at 1°, 2°, 3° east,
    /// inserted out of order so id order differs from distance order.
    ///
    /// ```text
    ///   id:   1      4      2      3
    ///   lon:  0      1      2      3
    /// ```
    pub fn equator_line() -> Graph {
        Graph::complete([
            (StopId(1), GeoPoint::new(0.0, 0.0)),
            (StopId(2), GeoPoint::new(0.0, 2.0)),
            (StopId(3), GeoPoint::new(0.0, 3.0)),
            (StopId(4), GeoPoint::new(0.0, 1.0)),
        ])
        .unwrap()
    }

    pub fn random_graph(n: usize, seed: u64) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        Graph::complete((0..n).map(|i| {
            let lat = rng.gen_range(30.0..31.0);
            let lon = rng.gen_range(-88.5..-87.5);
            (StopId(i as u32 + 1), GeoPoint::new(lat, lon))
        }))
        .unwrap()
    }

    /// Complete graph over stops on the equator at `lons`, ids from 1.
    /// Mirrored longitudes give exactly tied direct weights.
    pub fn equator_graph(lons: &[f64]) -> Graph {
        Graph::complete(
            lons.iter()
                .enumerate()
                .map(|(i, &lon)| (StopId(i as u32 + 1), GeoPoint::new(0.0, lon))),
        )
        .unwrap()
    }

    /// Every vertex exactly once, depot first.
    pub fn assert_covers(graph: &Graph, depot: StopId, order: &[StopId]) {
        assert_eq!(order.first(), Some(&depot));
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, graph.vertices());
    }
}

// ── Algorithm names ───────────────────────────────────────────────────────────

#[cfg(test)]
mod algorithm {
    use ro_core::ErrorKind;

    use crate::{Algorithm, TourBuilder, TourError};

    #[test]
    fn parse_known_names() {
        assert_eq!("nearest_neighbor".parse::<Algorithm>().unwrap(), Algorithm::NearestNeighbor);
        assert_eq!("dijkstra_chain".parse::<Algorithm>().unwrap(), Algorithm::DijkstraChain);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>().unwrap(), a);
            assert_eq!(a.strategy().name(), a.as_str());
        }
    }

    #[test]
    fn unknown_name_has_no_fallback() {
        let err = "foo".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, TourError::UnknownAlgorithm("foo".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // Case and spelling variants are not accepted either.
        assert!("Nearest_Neighbor".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
        assert!(TourBuilder::named("foo").is_err());
    }

    #[test]
    fn default_is_nearest_neighbor() {
        assert_eq!(Algorithm::default(), Algorithm::NearestNeighbor);
        assert_eq!(TourBuilder::default().algorithm(), Algorithm::NearestNeighbor);
    }
}

// ── Strategies ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use ro_core::{ErrorKind, StopId};
    use ro_graph::{Graph, GraphError, ScanDijkstra};

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::{assert_covers, equator_graph, equator_line, random_graph};
    use crate::{DijkstraChain, NearestNeighbor, TourError, TourStrategy};

    #[test]
    fn nearest_neighbor_walks_the_line() {
        let g = equator_line();
        let order = NearestNeighbor.visit_order(&g, StopId(1)).unwrap();
        assert_eq!(order, vec![StopId(1), StopId(4), StopId(2), StopId(3)]);
    }

    #[test]
    fn nearest_neighbor_from_the_middle() {
        let g = equator_line();
        // From lon 1: lon 0 and lon 2 are equidistant; smaller id (1) wins.
        let order = NearestNeighbor.visit_order(&g, StopId(4)).unwrap();
        assert_eq!(order[1], StopId(1));
        assert_covers(&g, StopId(4), &order);
    }

    #[test]
    fn exact_ties_prefer_smaller_id() {
        let mut g = Graph::new();
        g.add_edge(StopId(10), StopId(30), 5.0).unwrap();
        g.add_edge(StopId(10), StopId(20), 5.0).unwrap();
        g.add_edge(StopId(20), StopId(30), 1.0).unwrap();
        for strategy in [
            Box::new(NearestNeighbor) as Box<dyn TourStrategy>,
            Box::new(DijkstraChain::new()) as Box<dyn TourStrategy>,
        ] {
            let order = strategy.visit_order(&g, StopId(10)).unwrap();
            assert_eq!(order, vec![StopId(10), StopId(20), StopId(30)], "{}", strategy.name());
        }
    }

    #[test]
    fn dijkstra_chain_matches_nearest_neighbor_on_line() {
        let g = equator_line();
        let chain = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap();
        let nn = NearestNeighbor.visit_order(&g, StopId(1)).unwrap();
        assert_eq!(chain, nn);
    }

    #[test]
    fn depot_only_graph() {
        let mut g = Graph::new();
        g.add_vertex(StopId(7));
        assert_eq!(NearestNeighbor.visit_order(&g, StopId(7)).unwrap(), vec![StopId(7)]);
        assert_eq!(DijkstraChain::new().visit_order(&g, StopId(7)).unwrap(), vec![StopId(7)]);
    }

    #[test]
    fn missing_depot_is_not_found() {
        let g = equator_line();
        let err = NearestNeighbor.visit_order(&g, StopId(99)).unwrap_err();
        assert_eq!(err, TourError::Graph(GraphError::VertexNotFound(StopId(99))));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(DijkstraChain::new().visit_order(&g, StopId(99)).is_err());
    }

    #[test]
    fn nearest_neighbor_needs_complete_graph() {
        // 1 ── 2 ── 3 : no direct 1–3 edge.
        let mut g = Graph::new();
        g.add_edge(StopId(1), StopId(2), 1.0).unwrap();
        g.add_edge(StopId(2), StopId(3), 1.0).unwrap();
        let err = NearestNeighbor.visit_order(&g, StopId(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn dijkstra_chain_on_sparse_graph_skips_visited_pass_throughs() {
        // Star around 1: every trip between leaves passes back through 1.
        //
        //   2 ─ 1 ─ 3
        //       │
        //       4
        let mut g = Graph::new();
        g.add_edge(StopId(1), StopId(2), 1.0).unwrap();
        g.add_edge(StopId(1), StopId(3), 2.0).unwrap();
        g.add_edge(StopId(1), StopId(4), 3.0).unwrap();
        let order = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap();
        assert_eq!(order, vec![StopId(1), StopId(2), StopId(3), StopId(4)]);
    }

    #[test]
    fn dijkstra_chain_visits_unvisited_pass_throughs_in_place() {
        // 1 ─(1)─ 5 ─(0)─ 2 : stops 2 and 5 are both 1 away from 1, the tie
        // goes to 2, and its shortest path runs through 5.
        let mut g = Graph::new();
        g.add_edge(StopId(1), StopId(5), 1.0).unwrap();
        g.add_edge(StopId(5), StopId(2), 0.0).unwrap();
        let order = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap();
        assert_covers(&g, StopId(1), &order);
        assert_eq!(order, vec![StopId(1), StopId(5), StopId(2)]);
    }

    #[test]
    fn dijkstra_chain_reports_disconnected() {
        let mut g = Graph::new();
        g.add_edge(StopId(1), StopId(2), 1.0).unwrap();
        g.add_vertex(StopId(3));
        let err = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap_err();
        assert_eq!(
            err,
            TourError::Graph(GraphError::Disconnected { from: StopId(2), to: StopId(3) })
        );
        assert_eq!(err.kind(), ErrorKind::Disconnected);
    }

    #[test]
    fn dijkstra_chain_ignores_rounding_shortcuts_on_tied_edges() {
        // From stop 5 (lon -0.4) stops 3 (1.2) and 4 (-2.0) are tied on the
        // direct edge, while 5 → 1 → 4 rounds an ulp shorter.
        let g = equator_graph(&[-0.8, -1.0, 1.2, -2.0, -0.4, 1.5, 1.5, 1.7]);
        let w3 = g.weight(StopId(5), StopId(3)).unwrap();
        let w4 = g.weight(StopId(5), StopId(4)).unwrap();
        assert_eq!(w3, w4);

        let nn = NearestNeighbor.visit_order(&g, StopId(1)).unwrap();
        let chain = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap();
        let scan = DijkstraChain::with_solver(ScanDijkstra).visit_order(&g, StopId(1)).unwrap();
        assert_eq!(
            nn,
            [1, 2, 5, 3, 6, 7, 8, 4].map(StopId).to_vec()
        );
        assert_eq!(chain, nn);
        assert_eq!(scan, nn);
    }

    #[test]
    fn strategies_match_on_collinear_stops() {
        // Longitudes on a 0.1° grid: many exact ties and many near-ulp
        // triangle violations.
        for seed in 0..300 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let lons: Vec<f64> =
                (0..8).map(|_| f64::from(rng.gen_range(-20i32..=20)) / 10.0).collect();
            let g = equator_graph(&lons);
            let nn = NearestNeighbor.visit_order(&g, StopId(1)).unwrap();
            let chain = DijkstraChain::new().visit_order(&g, StopId(1)).unwrap();
            assert_eq!(chain, nn, "seed {seed}: lons {lons:?}");
        }
    }

    #[test]
    fn random_complete_graphs_cover_every_stop() {
        for seed in 0..25 {
            let g = random_graph(20, seed);
            let depot = StopId(1 + (seed as u32 % 20));
            let nn = NearestNeighbor.visit_order(&g, depot).unwrap();
            let chain = DijkstraChain::new().visit_order(&g, depot).unwrap();
            let scan = DijkstraChain::with_solver(ScanDijkstra).visit_order(&g, depot).unwrap();
            assert_covers(&g, depot, &nn);
            assert_covers(&g, depot, &chain);
            assert_eq!(chain, scan, "seed {seed}");

            assert_eq!(chain, nn, "seed {seed}");
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ro_core::StopId;
    use ro_graph::{Graph, ScanDijkstra};

    use super::helpers::equator_line;
    use crate::{Algorithm, DijkstraChain, Tour, TourBuilder};

    #[test]
    fn open_tour() {
        let g = equator_line();
        let tour = TourBuilder::new(Algorithm::NearestNeighbor).build(&g, StopId(1)).unwrap();
        assert_eq!(tour.stops, vec![StopId(1), StopId(4), StopId(2), StopId(3)]);
        assert_eq!(tour.depot(), Some(StopId(1)));
        assert_eq!(tour.delivery_count(), 3);
        assert!(!tour.returns_to_depot);
    }

    #[test]
    fn closed_tour_appends_depot() {
        let g = equator_line();
        let tour = TourBuilder::new(Algorithm::DijkstraChain)
            .return_to_depot(true)
            .build(&g, StopId(1))
            .unwrap();
        assert_eq!(
            tour.stops,
            vec![StopId(1), StopId(4), StopId(2), StopId(3), StopId(1)]
        );
        assert_eq!(tour.delivery_count(), 3);
        assert_eq!(tour.algorithm, Algorithm::DijkstraChain);
    }

    #[test]
    fn depot_only_tours() {
        let mut g = Graph::new();
        g.add_vertex(StopId(5));
        let open = TourBuilder::default().build(&g, StopId(5)).unwrap();
        assert_eq!(open.stops, vec![StopId(5)]);
        assert_eq!(open.delivery_count(), 0);

        let closed = TourBuilder::default().return_to_depot(true).build(&g, StopId(5)).unwrap();
        assert_eq!(closed.stops, vec![StopId(5), StopId(5)]);
        assert_eq!(closed.delivery_count(), 0);
        assert_eq!(g.path_weight(&closed.stops).unwrap(), 0.0);
    }

    #[test]
    fn empty_tour_has_no_depot() {
        let tour = Tour { stops: Vec::new(), algorithm: Algorithm::NearestNeighbor, returns_to_depot: true };
        assert_eq!(tour.depot(), None);
        assert_eq!(tour.delivery_count(), 0);
    }

    #[test]
    fn single_delivery() {
        let mut g = Graph::new();
        g.add_edge(StopId(1), StopId(2), 3.0).unwrap();
        let tour = TourBuilder::named("nearest_neighbor")
            .unwrap()
            .return_to_depot(true)
            .build(&g, StopId(1))
            .unwrap();
        assert_eq!(tour.stops, vec![StopId(1), StopId(2), StopId(1)]);
        assert_eq!(g.path_weight(&tour.stops).unwrap(), 6.0);
    }

    #[test]
    fn custom_strategy() {
        let g = equator_line();
        let strategy = DijkstraChain::with_solver(ScanDijkstra);
        let tour = TourBuilder::new(Algorithm::DijkstraChain)
            .build_with(&strategy, &g, StopId(3))
            .unwrap();
        assert_eq!(tour.stops, vec![StopId(3), StopId(2), StopId(4), StopId(1)]);
    }
}
