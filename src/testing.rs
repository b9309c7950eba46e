/// Stamps out the structural test battery shared by all graph representations.
///
/// `$undirected` and `$multi` describe the representation under test, the trait list selects
/// which tests are generated.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, $multi:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates `m` random edge instances for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge::new(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Reference adjacency: sorted neighbor multisets as expected from the graph
            fn expected_neighbors(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Node>> {
                let mut seen = fxhash::FxHashSet::default();
                let mut nbs = vec![Vec::new(); n as usize];
                for e in edges {
                    let key = if $undirected { e.key() } else { e.endpoints() };
                    if !$multi && !seen.insert(key) {
                        continue;
                    }
                    nbs[e.start as usize].push(e.end);
                    if $undirected && !e.is_loop() {
                        nbs[e.end as usize].push(e.start);
                    }
                }
                nbs.iter_mut().for_each(|x| x.sort_unstable());
                nbs
            }

            $(
                test_graph_ops!($graph<$undirected, $multi>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal, $multi:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::with_vertices(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.isolated_vertices().count(), n as usize);
                assert_eq!(<$graph>::is_undirected(), $undirected);
                assert_eq!(<$graph>::is_multi(), $multi);
            }
        }
    };
    ($graph:ident<$undirected:literal, $multi:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m);
                        let expected = expected_neighbors(n, &edges);
                        let graph = <$graph>::from_edges(0..n, edges.iter());

                        let num_edges = if $multi {
                            edges.len()
                        } else if $undirected {
                            edges.iter().map(Edge::key).unique().count()
                        } else {
                            edges.iter().map(Edge::endpoints).unique().count()
                        };

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges() as usize, num_edges);
                        assert_eq!(graph.edges().len(), num_edges);

                        for u in 0..n {
                            let nbs = graph.neighbors_of(u).unwrap().sorted().collect_vec();
                            assert_eq!(nbs, expected[u as usize]);
                            assert_eq!(graph.degree_of(u).unwrap() as usize, nbs.len());
                            for &v in &nbs {
                                assert!(graph.has_edge(u, v));
                            }
                        }
                        assert!(graph.neighbors_of(n).is_err());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal, $multi:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let reversed = edges.iter().map(Edge::reverse).collect_vec();
                    let expected_in = expected_neighbors(n, &reversed);
                    let graph = <$graph>::from_edges(0..n, edges.iter());

                    for u in 0..n {
                        let in_nbs = graph.in_neighbors_of(u).unwrap().sorted().collect_vec();
                        assert_eq!(in_nbs, expected_in[u as usize]);
                        assert_eq!(graph.in_degree_of(u).unwrap() as usize, in_nbs.len());
                        assert_eq!(
                            graph.total_degree_of(u).unwrap(),
                            graph.in_degree_of(u).unwrap() + graph.out_degree_of(u).unwrap()
                        );
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal, $multi:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5] {
                    let edges = random_edges(rng, n, m);
                    let mut graph = <$graph>::with_vertices(n);
                    graph.add_edges(edges.iter());

                    let mut remaining = graph.number_of_edges();
                    for _ in 0..m {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        let present = graph.has_edge(u, v);
                        assert_eq!(graph.remove_edge(u, v), present);
                        if present {
                            remaining -= 1;
                        }
                        assert_eq!(graph.number_of_edges(), remaining);
                        assert_eq!(graph.edges().len() as NumEdges, remaining);
                    }

                    for u in 0..n {
                        assert!(graph.remove_vertex(u));
                        assert!(!graph.remove_vertex(u));
                    }
                    assert!(graph.is_empty());
                    assert!(graph.is_edgeless());
                }
            }
        }
    };
    ($graph:ident<$undirected:literal, $multi:literal>: CachedViews) => {
        #[test]
        fn test_cache_invalidation() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);
            let mut graph = <$graph>::from_edges(0..20, random_edges(rng, 20, 40));

            assert!(!graph.edge_cache().is_valid());
            let edges = graph.edges().to_vec();
            graph.adjacency_matrix();
            assert!(graph.edge_cache().is_valid());
            assert!(graph.matrix_cache().is_valid());

            graph.add_edge((0, 21));
            assert!(!graph.edge_cache().is_valid());
            assert!(!graph.matrix_cache().is_valid());
            assert_eq!(graph.edges().len(), edges.len() + 1);
            assert_eq!(graph.adjacency_matrix().len(), 21);

            graph.remove_vertex(21);
            assert!(!graph.matrix_cache().is_valid());
            assert_eq!(graph.edges(), edges.as_slice());
        }
    };
}

pub(crate) use test_graph_ops;
