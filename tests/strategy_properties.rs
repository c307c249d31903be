//! Property tests over random small dictionaries.

use proptest::prelude::*;
use wordladder::prelude::*;
use wordladder::util::hamming::is_next_to;

fn vocabulary_strategy() -> impl Strategy<Value = (Vec<String>, String, String)> {
    (
        prop::collection::hash_set("[ab_]{3}", 0..12),
        "[ab_]{3}",
        "[ab_]{3}",
    )
        .prop_map(|(dictionary, start, end)| (dictionary.into_iter().collect(), start, end))
}

proptest! {
    #[test]
    fn builders_produce_the_same_graph((dictionary, start, end) in vocabulary_strategy()) {
        let vocabulary = Vocabulary::validated(&dictionary, &start, &end).unwrap();
        let all_edges = AllEdgesBuilder::new().build(&vocabulary);
        let buckets = BucketsBuilder::new().build(&vocabulary);

        prop_assert_eq!(all_edges.edges(), buckets.edges());
        prop_assert_eq!(&all_edges, &buckets);
    }

    #[test]
    fn edges_are_exactly_the_hamming_neighbors((dictionary, start, end) in vocabulary_strategy()) {
        let vocabulary = Vocabulary::new(&dictionary, &start, &end);
        let graph = BucketsBuilder::new().build(&vocabulary);

        for w1 in vocabulary.iter() {
            for w2 in vocabulary.iter() {
                prop_assert_eq!(graph.are_adjacent(w1, w2), is_next_to(w1, w2));
                prop_assert_eq!(graph.are_adjacent(w1, w2), graph.are_adjacent(w2, w1));
            }
        }
    }

    #[test]
    fn bfs_counts_one_more_than_dijkstra((dictionary, start, end) in vocabulary_strategy()) {
        let config = LadderConfig::default();
        for builder in BuilderKind::ALL {
            let bfs = SolutionKind::from_parts(builder, SearchKind::Bfs)
                .solve(&dictionary, &start, &end, &config);
            let dijkstra = SolutionKind::from_parts(builder, SearchKind::Dijkstra)
                .solve(&dictionary, &start, &end, &config)
                .unwrap();

            match (bfs, dijkstra) {
                (Ok(Distance::Finite(words)), Distance::Finite(edges)) => {
                    prop_assert_eq!(words, edges + 1)
                }
                (Err(err), Distance::Infinite) => prop_assert!(err.is_no_path()),
                (bfs, dijkstra) => {
                    prop_assert!(false, "bfs {:?} disagrees with dijkstra {:?}", bfs, dijkstra)
                }
            }
        }
    }

    #[test]
    fn frontier_modes_agree((dictionary, start, end) in vocabulary_strategy()) {
        let path_copy = LadderConfig::default();
        let visited_set = LadderConfig::default().with_frontier(FrontierMode::VisitedSet);
        let kind = SolutionKind::BuildBucketsSearchWithBfs;

        let a = kind.solve(&dictionary, &start, &end, &path_copy).map_err(|e| e.is_no_path());
        let b = kind.solve(&dictionary, &start, &end, &visited_set).map_err(|e| e.is_no_path());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn search_is_symmetric((dictionary, start, end) in vocabulary_strategy()) {
        let config = LadderConfig::default();
        for kind in SolutionKind::ALL {
            let forward = kind.solve(&dictionary, &start, &end, &config).map_err(|e| e.is_no_path());
            let backward = kind.solve(&dictionary, &end, &start, &config).map_err(|e| e.is_no_path());
            prop_assert_eq!(forward, backward);
        }
    }
}
